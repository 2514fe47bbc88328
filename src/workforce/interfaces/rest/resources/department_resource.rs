use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::workforce::domain::model::entities::department::Department;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DepartmentResource {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<Department> for DepartmentResource {
    fn from(department: Department) -> Self {
        Self {
            id: department.id.to_string(),
            company_id: department.company_id.to_string(),
            name: department.name,
            description: department.description,
            is_active: department.is_active,
            is_deleted: department.audit.is_deleted,
            created_at: department.audit.created_at,
            created_by: department.audit.created_by.value().to_string(),
            modified_at: department.audit.modified_at,
            modified_by: department
                .audit
                .modified_by
                .map(|actor| actor.value().to_string()),
        }
    }
}
