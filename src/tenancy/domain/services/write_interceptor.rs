use chrono::Utc;

use crate::tenancy::domain::model::{
    entities::{
        audit_metadata::{AuditMetadata, TenantOwnership},
        tenant_context::{TenantContext, TenantContextProvider},
    },
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{actor_id::ActorId, employer_id::EmployerId},
};

/// Stamps audit metadata on every write and routes deletes into the
/// soft-delete flag. Calling code never touches the audit columns directly.
#[derive(Clone, Debug)]
pub struct WriteInterceptor {
    actor: ActorId,
}

impl WriteInterceptor {
    pub fn from_context(context: &TenantContext) -> Self {
        Self {
            actor: context.actor().clone(),
        }
    }

    /// Interceptor acting as the well-known system principal. Used by
    /// seeding and maintenance tooling; the actor stays visible in the audit
    /// columns instead of masquerading as a user.
    pub fn for_system() -> Self {
        Self {
            actor: ActorId::system(),
        }
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// Fresh audit columns for an insert: creation and modification pairs
    /// both point at now/actor, the record starts undeleted.
    pub fn before_insert(&self) -> AuditMetadata {
        let now = Utc::now();
        AuditMetadata {
            created_at: now,
            created_by: self.actor.clone(),
            modified_at: Some(now),
            modified_by: Some(self.actor.clone()),
            is_deleted: false,
        }
    }

    /// Moves the modification pair only. The creation pair is immutable once
    /// set; nothing here can rewrite it.
    pub fn before_update(&self, audit: &mut AuditMetadata) {
        audit.modified_at = Some(Utc::now());
        audit.modified_by = Some(self.actor.clone());
    }

    /// Modification pair for statements that stamp in place, without the
    /// entity in memory.
    pub fn update_stamp(&self) -> (chrono::DateTime<Utc>, ActorId) {
        (Utc::now(), self.actor.clone())
    }

    /// Logical delete: flips the flag and stamps the update pair. Physical
    /// deletion only exists on the maintenance path.
    pub fn soft_delete(&self, audit: &mut AuditMetadata) {
        audit.is_deleted = true;
        self.before_update(audit);
    }
}

/// Resolves the tenant stamped onto a new tenant-scoped record.
///
/// With an established context the record takes the caller's tenant; a preset
/// id that disagrees with it is a cross-tenant write and is denied. Without a
/// context (bulk seeding) the caller must have pre-set the tenant explicitly,
/// otherwise the insert fails.
pub fn resolve_ownership(
    preset: Option<EmployerId>,
    provider: &TenantContextProvider,
) -> Result<TenantOwnership, TenancyDomainError> {
    match provider.resolve() {
        Ok(context) => match preset {
            Some(employer_id) if employer_id != context.employer_id() => {
                Err(TenancyDomainError::AccessDenied)
            }
            _ => Ok(TenantOwnership::new(context.employer_id())),
        },
        Err(TenancyDomainError::ContextNotSet) => preset
            .map(TenantOwnership::new)
            .ok_or(TenancyDomainError::MissingTenant),
        Err(other) => Err(other),
    }
}
