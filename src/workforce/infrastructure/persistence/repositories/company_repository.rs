use async_trait::async_trait;

use crate::{
    tenancy::{
        domain::{
            model::{
                entities::audit_metadata::TenantOwnership, value_objects::company_id::CompanyId,
            },
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
    },
    workforce::domain::model::{
        entities::company::Company, enums::workforce_domain_error::WorkforceDomainError,
    },
};

#[derive(Clone, Debug)]
pub struct NewCompanyRecord {
    pub name: String,
    pub registration_number: Option<String>,
}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewCompanyRecord,
    ) -> Result<Company, WorkforceDomainError>;

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        company_id: CompanyId,
        visibility: RowVisibility,
    ) -> Result<Option<Company>, WorkforceDomainError>;

    async fn list(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Vec<Company>, WorkforceDomainError>;

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        company_id: CompanyId,
    ) -> Result<(), WorkforceDomainError>;
}
