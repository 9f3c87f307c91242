use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job::{JobLocation, JobSkill, Wage};

/// Full record returned by the single-job endpoint. Superset of
/// `JobSummary`: same envelope, same core fields, plus the requirement and
/// scheduling details only the detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub work_assignment_id: String,
    pub wa_readable_id: String,
    pub work_assignment_name: String,
    pub hourly_wage: Wage,
    pub salary: Wage,
    pub job_skill: JobSkill,
    pub job_location: JobLocation,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub period_from: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub period_to: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub first_shift_to: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date_published: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_link: Option<String>,
    pub requirements: String,
    pub clothing_requirements: String,
    pub shifts_count: u32,
    /// Total scheduled working time in minutes.
    pub work_duration: u32,
}
