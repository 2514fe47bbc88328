use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpsertEmployerSettingsRequestResource {
    /// One of `weekly`, `biweekly`, `semimonthly`, `monthly`.
    pub default_pay_period_type: String,

    #[validate(length(min = 3, max = 3))]
    pub default_currency: String,

    #[validate(length(min = 1, max = 64))]
    pub time_zone: String,

    #[validate(range(min = 1, max = 12))]
    pub fiscal_year_start_month: i32,

    pub allow_overtime: bool,

    #[validate(range(min = 100))]
    pub overtime_multiplier_percent: i32,

    pub enable_timesheets: bool,

    pub require_time_approval: bool,
}
