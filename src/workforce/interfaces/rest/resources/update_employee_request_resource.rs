use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Patch body; absent fields stay unchanged. `expected_row_version` is the
/// version the caller read, for conflict detection.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpdateEmployeeRequestResource {
    pub expected_row_version: i64,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 120))]
    pub job_title: Option<String>,

    pub department_id: Option<String>,

    /// One of `active`, `on_leave`, `terminated`.
    pub employment_status: Option<String>,

    pub termination_date: Option<NaiveDate>,

    pub is_active: Option<bool>,
}
