use thiserror::Error;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

#[derive(Debug, Error)]
pub enum SettingsDomainError {
    #[error("setting key is invalid")]
    InvalidSettingKey,

    #[error("setting value is required")]
    InvalidSettingValue,

    #[error("currency must be a three-letter code")]
    InvalidCurrency,

    #[error("fiscal year start month must be between 1 and 12")]
    InvalidFiscalYearStartMonth,

    #[error("overtime multiplier must be at least 100 percent")]
    InvalidOvertimeMultiplier,

    #[error("unknown pay period type: {0}")]
    InvalidPayPeriodType(String),

    #[error("time zone is required")]
    InvalidTimeZone,

    #[error(transparent)]
    Tenancy(#[from] TenancyDomainError),
}
