use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
pub struct ListDepartmentsQueryResource {
    /// Restrict to one company of the employer group.
    pub company_id: Option<String>,
}
