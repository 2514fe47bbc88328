use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateCompanyRequestResource {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(max = 64))]
    pub registration_number: Option<String>,
}
