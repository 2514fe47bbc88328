use sqlx::{Row, postgres::PgRow};

use crate::tenancy::domain::model::{
    entities::audit_metadata::AuditMetadata, enums::tenancy_domain_error::TenancyDomainError,
    value_objects::actor_id::ActorId,
};

/// Audit columns shared by every table, in the order the schema declares
/// them. Select lists append this after the entity's own columns.
pub const AUDIT_COLUMNS: &str =
    "t.is_deleted, t.created_at, t.created_by, t.modified_at, t.modified_by";

pub fn audit_metadata_from_row(row: &PgRow) -> Result<AuditMetadata, TenancyDomainError> {
    let created_by: String = row
        .try_get("created_by")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let modified_by: Option<String> = row
        .try_get("modified_by")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(AuditMetadata {
        created_at: row
            .try_get("created_at")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        created_by: ActorId::new(created_by)?,
        modified_at: row
            .try_get("modified_at")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        modified_by: modified_by.map(ActorId::new).transpose()?,
        is_deleted: row
            .try_get("is_deleted")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
    })
}
