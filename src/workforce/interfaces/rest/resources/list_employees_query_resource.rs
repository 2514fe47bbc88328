use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
pub struct ListEmployeesQueryResource {
    /// Filter by employment status (`active`, `on_leave`, `terminated`).
    pub employment_status: Option<String>,

    pub department_id: Option<String>,

    /// Also return soft-deleted rows.
    pub include_deleted: Option<bool>,

    pub limit: Option<i64>,

    pub offset: Option<i64>,
}
