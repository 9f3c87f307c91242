use serde::Deserialize;

use crate::error::AppError;

/// Outer wrapper every API response arrives in. The `error` flag signals
/// failure independently of the HTTP status code, so a 200 can still carry
/// an error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_details: Option<serde_json::Value>,
    #[serde(default)]
    pub error_id: Option<i64>,
    #[serde(default)]
    pub error: bool,
}

impl<T> Envelope<T> {
    /// Unwrap the payload. Only the `error` flag decides: when it is set the
    /// result is `AppError::Api` carrying the code and details; a clean
    /// envelope with no payload is `AppError::MissingData`.
    pub fn into_data(self) -> Result<T, AppError> {
        if self.error {
            let code = self
                .error_code
                .filter(|code| !code.is_empty())
                .unwrap_or_else(|| "unspecified".to_string());
            return Err(AppError::Api {
                code,
                details: self.error_details.unwrap_or(serde_json::Value::Null),
            });
        }
        self.data.ok_or(AppError::MissingData)
    }
}
