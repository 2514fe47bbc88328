use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpdatePayrollTransactionRequestResource {
    pub expected_row_version: i64,

    /// One of `pending`, `paid`, `voided`.
    pub payment_status: Option<String>,

    pub payment_date: Option<NaiveDate>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}
