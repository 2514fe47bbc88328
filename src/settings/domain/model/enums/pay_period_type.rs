use crate::settings::domain::model::enums::settings_domain_error::SettingsDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayPeriodType {
    Weekly,
    Biweekly,
    SemiMonthly,
    Monthly,
}

impl PayPeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriodType::Weekly => "weekly",
            PayPeriodType::Biweekly => "biweekly",
            PayPeriodType::SemiMonthly => "semimonthly",
            PayPeriodType::Monthly => "monthly",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SettingsDomainError> {
        match value.trim().to_lowercase().as_str() {
            "weekly" => Ok(PayPeriodType::Weekly),
            "biweekly" => Ok(PayPeriodType::Biweekly),
            "semimonthly" => Ok(PayPeriodType::SemiMonthly),
            "monthly" => Ok(PayPeriodType::Monthly),
            other => Err(SettingsDomainError::InvalidPayPeriodType(other.to_string())),
        }
    }
}
