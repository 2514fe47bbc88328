use std::sync::Arc;

use async_trait::async_trait;

use crate::tenancy::{
    domain::{
        model::{
            entities::employer::Employer, enums::tenancy_domain_error::TenancyDomainError,
            queries::get_employer_query::GetEmployerQuery,
        },
        services::employer_query_service::EmployerQueryService,
    },
    infrastructure::persistence::{
        repositories::employer_repository::EmployerRepository,
        scoped_query::{RowVisibility, TenantFilter},
    },
};

pub struct EmployerQueryServiceImpl {
    repository: Arc<dyn EmployerRepository>,
}

impl EmployerQueryServiceImpl {
    pub fn new(repository: Arc<dyn EmployerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl EmployerQueryService for EmployerQueryServiceImpl {
    async fn handle_get_current_employer(
        &self,
        query: GetEmployerQuery,
    ) -> Result<Employer, TenancyDomainError> {
        let filter = TenantFilter::from_context(query.context());

        self.repository
            .find_current(&filter, RowVisibility::ActiveOnly)
            .await?
            .ok_or(TenancyDomainError::RecordNotFound)
    }
}
