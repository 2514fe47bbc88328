use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
pub struct IncludeDeletedQueryResource {
    /// Also return the row when it is soft-deleted.
    pub include_deleted: Option<bool>,
}
