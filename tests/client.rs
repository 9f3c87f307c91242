use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobfeed::api::{CoopleClient, JobSource};
use jobfeed::error::AppError;

fn summary_json(n: u32) -> serde_json::Value {
    json!({
        "workAssignmentId": format!("wa-{n:04}"),
        "waReadableId": format!("W-{n:04}"),
        "workAssignmentName": format!("Job {n}"),
        "hourlyWage": { "amount": 26.5, "currencyId": 1 },
        "salary": { "amount": 3996.0, "currencyId": 1 },
        "jobSkill": { "jobProfileId": 12, "educationalLevelId": 3 },
        "jobLocation": {
            "addressStreet": "Bahnhofstrasse 10",
            "extraAddress": "",
            "zip": "8001",
            "city": "Zürich",
            "state": "",
            "countryId": 1
        },
        "periodFrom": 1_756_684_800_000u64,
        "datePublished": 1_755_043_200_000u64,
        "branchLink": null
    })
}

fn page_envelope(count: u32, total: u32) -> serde_json::Value {
    let items: Vec<_> = (0..count).map(summary_json).collect();
    json!({
        "status": 200,
        "data": { "items": items, "total": total },
        "errorCode": "",
        "errorDetails": {},
        "errorId": 0,
        "error": false
    })
}

async fn client_for(server: &MockServer) -> CoopleClient {
    CoopleClient::new(server.uri(), None).expect("client builds")
}

#[tokio::test]
async fn fetch_page_decodes_items_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(query_param("pageNum", "0"))
        .and(query_param("pageSize", "20"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(20, 25)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server).await.fetch_page(0, 20).await.unwrap();
    assert_eq!(page.items.len(), 20);
    assert_eq!(page.total, 25);
    assert_eq!(page.items[0].work_assignment_id, "wa-0000");
    assert_eq!(page.items[0].hourly_wage.amount, 26.5);
    assert_eq!(page.items[0].job_location.city, "Zürich");
    assert_eq!(
        page.items[0].date_published.timestamp_millis(),
        1_755_043_200_000
    );
}

#[tokio::test]
async fn short_final_page_comes_through_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(query_param("pageNum", "1"))
        .and(query_param("pageSize", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(5, 25)))
        .mount(&server)
        .await;

    let page = client_for(&server).await.fetch_page(1, 20).await.unwrap();
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total, 25);
}

#[tokio::test]
async fn non_success_status_carries_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_page(0, 20)
        .await
        .unwrap_err();
    match err {
        AppError::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn envelope_error_beats_http_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": null,
            "errorCode": "RATE_LIMITED",
            "errorDetails": { "retryAfter": 30 },
            "errorId": 17,
            "error": true
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_page(0, 20)
        .await
        .unwrap_err();
    match err {
        AppError::Api { code, details } => {
            assert_eq!(code, "RATE_LIMITED");
            assert_eq!(details["retryAfter"], 30);
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn clean_envelope_without_payload_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "error": false
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_page(0, 20)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MissingData));
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_page(0, 20)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn dead_endpoint_is_a_network_error() {
    // A pooled server (MockServer::start) keeps its listener alive after
    // drop; an exclusive one actually shuts down, leaving the port dead.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = CoopleClient::new(uri, None).unwrap();
    let err = client.fetch_page(0, 20).await.unwrap_err();
    assert!(err.is_network(), "expected Network, got {err:?}");
}

#[tokio::test]
async fn fetch_details_hits_the_id_path_and_decodes() {
    let server = MockServer::start().await;
    let mut record = summary_json(7);
    record["requirements"] = json!("Prior service experience");
    record["clothingRequirements"] = json!("Black trousers, white shirt");
    record["periodTo"] = json!(1_759_276_800_000u64);
    record["firstShiftTo"] = json!(1_756_713_600_000u64);
    record["shiftsCount"] = json!(14);
    record["workDuration"] = json!(8880);

    Mock::given(method("GET"))
        .and(path("/wa-0007"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": record,
            "errorCode": "",
            "errorDetails": {},
            "errorId": 0,
            "error": false
        })))
        .mount(&server)
        .await;

    let details = client_for(&server)
        .await
        .fetch_details("wa-0007")
        .await
        .unwrap();
    assert_eq!(details.work_assignment_id, "wa-0007");
    assert_eq!(details.requirements, "Prior service experience");
    assert_eq!(details.shifts_count, 14);
    assert_eq!(details.work_duration, 8880);
    assert_eq!(details.period_to.timestamp_millis(), 1_759_276_800_000);
}

#[tokio::test]
async fn fetch_details_classifies_envelope_errors_too() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wa-gone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "errorCode": "JOB_NOT_FOUND",
            "errorDetails": {},
            "errorId": 3,
            "error": true
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_details("wa-gone")
        .await
        .unwrap_err();
    match err {
        AppError::Api { code, .. } => assert_eq!(code, "JOB_NOT_FOUND"),
        other => panic!("expected Api, got {other:?}"),
    }
}
