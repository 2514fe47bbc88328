use thiserror::Error;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

#[derive(Debug, Error)]
pub enum WorkforceDomainError {
    #[error("company name is invalid")]
    InvalidCompanyName,

    #[error("department name is invalid")]
    InvalidDepartmentName,

    #[error("employee name is invalid")]
    InvalidEmployeeName,

    #[error("employee number is invalid")]
    InvalidEmployeeNumber,

    #[error("email address is invalid")]
    InvalidEmailAddress,

    #[error("unknown employment type: {0}")]
    InvalidEmploymentType(String),

    #[error("unknown employment status: {0}")]
    InvalidEmploymentStatus(String),

    #[error("termination date must not precede the hire date")]
    InvalidTerminationDate,

    #[error("invalid record identifier")]
    InvalidRecordId,

    #[error("invalid paging parameters")]
    InvalidPaging,

    #[error(transparent)]
    Tenancy(#[from] TenancyDomainError),
}
