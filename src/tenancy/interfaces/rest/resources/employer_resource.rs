use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::tenancy::domain::model::entities::employer::Employer;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EmployerResource {
    pub id: i64,
    pub legal_name: String,
    pub tax_identification_number: String,
    pub country: String,
    pub subscription_plan: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<Employer> for EmployerResource {
    fn from(employer: Employer) -> Self {
        Self {
            id: employer.id.value(),
            legal_name: employer.legal_name,
            tax_identification_number: employer.tax_identification_number,
            country: employer.country,
            subscription_plan: employer.subscription_plan,
            is_active: employer.is_active,
            created_at: employer.audit.created_at,
            created_by: employer.audit.created_by.value().to_string(),
            modified_at: employer.audit.modified_at,
            modified_by: employer
                .audit
                .modified_by
                .map(|actor| actor.value().to_string()),
        }
    }
}
