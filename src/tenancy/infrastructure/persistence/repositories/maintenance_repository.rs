use async_trait::async_trait;

use crate::tenancy::domain::model::{
    entities::employer::Employer, enums::tenancy_domain_error::TenancyDomainError,
};

/// Input for registering a new tenant root. Only maintenance/provisioning
/// tooling creates employers; there is no tenant context before the tenant
/// exists.
#[derive(Clone, Debug)]
pub struct RegisterEmployerRecord {
    pub legal_name: String,
    pub tax_identification_number: String,
    pub country: String,
    pub subscription_plan: String,
}

/// Administrative persistence surface. Implementations are constructed from
/// an explicit [`MaintenanceScope`] and are never wired into request-serving
/// routes.
///
/// [`MaintenanceScope`]: crate::tenancy::infrastructure::persistence::scoped_query::MaintenanceScope
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    /// Creates any missing tables. Idempotent; runs at bootstrap.
    async fn synchronize_schema(&self) -> Result<(), TenancyDomainError>;

    async fn register_employer(
        &self,
        record: RegisterEmployerRecord,
    ) -> Result<Employer, TenancyDomainError>;

    /// Rows in a table across all tenants, soft-deleted included. Inspection
    /// helper for retention tooling.
    async fn count_rows_all_tenants(&self, table_name: &str) -> Result<i64, TenancyDomainError>;

    /// Physically removes rows already soft-deleted, across every table that
    /// carries the flag. Returns the number of rows purged.
    async fn purge_soft_deleted(&self) -> Result<u64, TenancyDomainError>;
}
