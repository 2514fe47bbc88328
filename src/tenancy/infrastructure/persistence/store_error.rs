use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Translates driver errors at the repository boundary so raw `sqlx::Error`
/// never reaches callers. Unique violations become duplicates, foreign-key
/// violations mean the referenced row does not exist (or is not visible).
pub fn translate_store_error(error: sqlx::Error, duplicate_hint: &str) -> TenancyDomainError {
    match &error {
        sqlx::Error::Database(db_error) => match db_error.code().as_deref() {
            Some("23505") => TenancyDomainError::DuplicateRecord(duplicate_hint.to_string()),
            Some("23503") => TenancyDomainError::RecordNotFound,
            _ => TenancyDomainError::InfrastructureError(db_error.message().to_string()),
        },
        _ => TenancyDomainError::InfrastructureError(error.to_string()),
    }
}
