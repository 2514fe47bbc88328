use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::payroll::domain::model::entities::pay_period::PayPeriod;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PayPeriodResource {
    pub id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub pay_date: NaiveDate,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<PayPeriod> for PayPeriodResource {
    fn from(period: PayPeriod) -> Self {
        Self {
            id: period.id.to_string(),
            period_start: period.period_start,
            period_end: period.period_end,
            pay_date: period.pay_date,
            status: period.status.as_str().to_string(),
            is_deleted: period.audit.is_deleted,
            created_at: period.audit.created_at,
            created_by: period.audit.created_by.value().to_string(),
            modified_at: period.audit.modified_at,
            modified_by: period
                .audit
                .modified_by
                .map(|actor| actor.value().to_string()),
        }
    }
}
