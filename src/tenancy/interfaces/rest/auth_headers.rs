use axum::http::HeaderMap;

use crate::tenancy::domain::model::{
    entities::tenant_context::{TenantContext, TenantContextProvider},
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{actor_id::ActorId, company_id::CompanyId, employer_id::EmployerId},
};

pub const ACTOR_HEADER: &str = "x-actor-id";
pub const EMPLOYER_HEADER: &str = "x-employer-id";
pub const COMPANY_HEADER: &str = "x-company-id";

/// Builds the per-request context provider from the identity headers the
/// upstream authentication collaborator attaches. One provider per request;
/// it is dropped with the request scope.
pub fn establish_request_context(
    headers: &HeaderMap,
) -> Result<TenantContextProvider, TenancyDomainError> {
    let actor = header_value(headers, ACTOR_HEADER)?
        .ok_or(TenancyDomainError::MissingAuthentication)
        .and_then(ActorId::new)?;

    let employer_id = header_value(headers, EMPLOYER_HEADER)?
        .ok_or(TenancyDomainError::MissingAuthentication)?
        .parse::<i64>()
        .map_err(|_| TenancyDomainError::InvalidEmployerId)
        .and_then(EmployerId::new)?;

    let company_id = header_value(headers, COMPANY_HEADER)?
        .map(CompanyId::new)
        .transpose()?;

    let mut provider = TenantContextProvider::new();
    provider.establish(TenantContext::new(employer_id, company_id, actor))?;
    Ok(provider)
}

fn header_value(headers: &HeaderMap, name: &str) -> Result<Option<String>, TenancyDomainError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|s| Some(s.to_string()))
            .map_err(|_| TenancyDomainError::MissingAuthentication),
    }
}
