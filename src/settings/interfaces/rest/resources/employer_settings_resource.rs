use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::settings::domain::model::entities::employer_settings::EmployerSettings;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EmployerSettingsResource {
    pub default_pay_period_type: String,
    pub default_currency: String,
    pub time_zone: String,
    pub fiscal_year_start_month: i32,
    pub allow_overtime: bool,
    pub overtime_multiplier_percent: i32,
    pub enable_timesheets: bool,
    pub require_time_approval: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<EmployerSettings> for EmployerSettingsResource {
    fn from(settings: EmployerSettings) -> Self {
        Self {
            default_pay_period_type: settings.default_pay_period_type.as_str().to_string(),
            default_currency: settings.default_currency,
            time_zone: settings.time_zone,
            fiscal_year_start_month: settings.fiscal_year_start_month,
            allow_overtime: settings.allow_overtime,
            overtime_multiplier_percent: settings.overtime_multiplier_percent,
            enable_timesheets: settings.enable_timesheets,
            require_time_approval: settings.require_time_approval,
            created_at: settings.audit.created_at,
            created_by: settings.audit.created_by.value().to_string(),
            modified_at: settings.audit.modified_at,
            modified_by: settings
                .audit
                .modified_by
                .map(|actor| actor.value().to_string()),
        }
    }
}
