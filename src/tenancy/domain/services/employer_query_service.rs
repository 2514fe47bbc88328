use async_trait::async_trait;

use crate::tenancy::domain::model::{
    entities::employer::Employer, enums::tenancy_domain_error::TenancyDomainError,
    queries::get_employer_query::GetEmployerQuery,
};

#[async_trait]
pub trait EmployerQueryService: Send + Sync {
    async fn handle_get_current_employer(
        &self,
        query: GetEmployerQuery,
    ) -> Result<Employer, TenancyDomainError>;
}
