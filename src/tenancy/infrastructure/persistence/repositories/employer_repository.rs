use async_trait::async_trait;

use crate::tenancy::{
    domain::model::{
        entities::employer::Employer, enums::tenancy_domain_error::TenancyDomainError,
    },
    infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
};

#[async_trait]
pub trait EmployerRepository: Send + Sync {
    /// The caller's own employer row, resolved through the tenant filter so a
    /// context can never read another tenant's root.
    async fn find_current(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Option<Employer>, TenancyDomainError>;
}
