use thiserror::Error;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

#[derive(Debug, Error)]
pub enum PayrollDomainError {
    #[error("pay period end must be after its start")]
    InvalidPayPeriodRange,

    #[error("amount must not be negative")]
    InvalidAmount,

    #[error("worked minutes must not be negative")]
    InvalidMinutes,

    #[error("unknown pay period status: {0}")]
    InvalidPayPeriodStatus(String),

    #[error("unknown payment status: {0}")]
    InvalidPaymentStatus(String),

    #[error("unknown payment method: {0}")]
    InvalidPaymentMethod(String),

    #[error("invalid record identifier")]
    InvalidRecordId,

    #[error("invalid paging parameters")]
    InvalidPaging,

    #[error(transparent)]
    Tenancy(#[from] TenancyDomainError),
}
