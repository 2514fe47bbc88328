use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::workforce::domain::model::entities::company::Company;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CompanyResource {
    pub id: String,
    pub name: String,
    pub registration_number: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<Company> for CompanyResource {
    fn from(company: Company) -> Self {
        Self {
            id: company.id.to_string(),
            name: company.name,
            registration_number: company.registration_number,
            is_deleted: company.audit.is_deleted,
            created_at: company.audit.created_at,
            created_by: company.audit.created_by.value().to_string(),
            modified_at: company.audit.modified_at,
            modified_by: company
                .audit
                .modified_by
                .map(|actor| actor.value().to_string()),
        }
    }
}
