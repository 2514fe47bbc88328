use axum::http::StatusCode;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Status mapping for the isolation/audit taxonomy, shared by every
/// controller that surfaces tenancy errors.
pub fn tenancy_status_code(error: &TenancyDomainError) -> StatusCode {
    match error {
        TenancyDomainError::MissingAuthentication
        | TenancyDomainError::ContextNotSet
        | TenancyDomainError::InvalidActorId => StatusCode::UNAUTHORIZED,
        TenancyDomainError::InvalidEmployerId | TenancyDomainError::InvalidCompanyId => {
            StatusCode::BAD_REQUEST
        }
        TenancyDomainError::AccessDenied => StatusCode::FORBIDDEN,
        TenancyDomainError::RecordNotFound => StatusCode::NOT_FOUND,
        TenancyDomainError::ConcurrencyConflict | TenancyDomainError::DuplicateRecord(_) => {
            StatusCode::CONFLICT
        }
        TenancyDomainError::ContextReassigned
        | TenancyDomainError::MissingTenant
        | TenancyDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
