use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Monetary amount paired with the API's numeric currency identifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wage {
    pub amount: f64,
    pub currency_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSkill {
    pub job_profile_id: u32,
    pub educational_level_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLocation {
    pub address_street: String,
    pub extra_address: String,
    pub zip: String,
    pub city: String,
    pub state: String,
    pub country_id: u32,
}

/// One posting as returned by the listing endpoint. Produced only by
/// decoding a server response; never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub work_assignment_id: String,
    pub wa_readable_id: String,
    pub work_assignment_name: String,
    pub hourly_wage: Wage,
    pub salary: Wage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_wage_with_holiday_pay: Option<Wage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_with_holiday_pay: Option<Wage>,
    pub job_skill: JobSkill,
    pub job_location: JobLocation,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub period_from: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date_published: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_link: Option<String>,
}

/// One fetched page plus the server-reported size of the whole collection
/// (not just this page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPage {
    pub items: Vec<JobSummary>,
    pub total: u32,
}
