use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateDepartmentRequestResource {
    pub company_id: String,

    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}
