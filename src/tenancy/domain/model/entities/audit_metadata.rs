use chrono::{DateTime, Utc};

use crate::tenancy::domain::model::value_objects::{actor_id::ActorId, employer_id::EmployerId};

/// Audit columns embedded by every mutable entity. Populated by the write
/// interceptor, never by calling code. `created_at`/`created_by` are fixed at
/// first insert; updates only move the `modified_*` pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditMetadata {
    pub created_at: DateTime<Utc>,
    pub created_by: ActorId,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<ActorId>,
    pub is_deleted: bool,
}

/// Tenant column embedded by tenant-scoped entities. The employer id is fixed
/// for the lifetime of the record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TenantOwnership {
    employer_id: EmployerId,
}

impl TenantOwnership {
    pub(crate) fn new(employer_id: EmployerId) -> Self {
        Self { employer_id }
    }

    pub fn employer_id(&self) -> EmployerId {
        self.employer_id
    }
}
