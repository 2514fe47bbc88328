use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    tenancy::{
        domain::{
            model::value_objects::company_id::CompanyId,
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
    },
    workforce::domain::model::{
        entities::department::Department, enums::workforce_domain_error::WorkforceDomainError,
    },
};

#[derive(Clone, Debug)]
pub struct NewDepartmentRecord {
    pub company_id: CompanyId,
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Verifies the parent company resolves to the caller's tenant before
    /// inserting; a parent under another tenant is denied, not silently
    /// attached.
    async fn insert(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        record: NewDepartmentRecord,
    ) -> Result<Department, WorkforceDomainError>;

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        department_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<Department>, WorkforceDomainError>;

    async fn list(
        &self,
        filter: &TenantFilter,
        company_id: Option<CompanyId>,
        visibility: RowVisibility,
    ) -> Result<Vec<Department>, WorkforceDomainError>;

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        department_id: Uuid,
    ) -> Result<(), WorkforceDomainError>;
}
