use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpsertSystemSettingRequestResource {
    #[validate(length(min = 1, max = 4000))]
    pub value: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}
