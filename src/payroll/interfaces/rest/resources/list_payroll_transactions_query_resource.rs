use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
pub struct ListPayrollTransactionsQueryResource {
    pub pay_period_id: Option<String>,

    pub employee_id: Option<String>,

    /// Also return soft-deleted rows.
    pub include_deleted: Option<bool>,

    pub limit: Option<i64>,

    pub offset: Option<i64>,
}
