use crate::{
    settings::domain::model::enums::{
        pay_period_type::PayPeriodType, settings_domain_error::SettingsDomainError,
    },
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

pub struct UpsertEmployerSettingsCommandParts {
    pub default_pay_period_type: String,
    pub default_currency: String,
    pub time_zone: String,
    pub fiscal_year_start_month: i32,
    pub allow_overtime: bool,
    pub overtime_multiplier_percent: i32,
    pub enable_timesheets: bool,
    pub require_time_approval: bool,
}

#[derive(Clone, Debug)]
pub struct UpsertEmployerSettingsCommand {
    context: TenantContext,
    default_pay_period_type: PayPeriodType,
    default_currency: String,
    time_zone: String,
    fiscal_year_start_month: i32,
    allow_overtime: bool,
    overtime_multiplier_percent: i32,
    enable_timesheets: bool,
    require_time_approval: bool,
}

impl UpsertEmployerSettingsCommand {
    pub fn new(
        context: TenantContext,
        parts: UpsertEmployerSettingsCommandParts,
    ) -> Result<Self, SettingsDomainError> {
        let currency = parts.default_currency.trim().to_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SettingsDomainError::InvalidCurrency);
        }

        if !(1..=12).contains(&parts.fiscal_year_start_month) {
            return Err(SettingsDomainError::InvalidFiscalYearStartMonth);
        }

        if parts.overtime_multiplier_percent < 100 {
            return Err(SettingsDomainError::InvalidOvertimeMultiplier);
        }

        let time_zone = parts.time_zone.trim().to_string();
        if time_zone.is_empty() || time_zone.len() > 64 {
            return Err(SettingsDomainError::InvalidTimeZone);
        }

        Ok(Self {
            context,
            default_pay_period_type: PayPeriodType::parse(&parts.default_pay_period_type)?,
            default_currency: currency,
            time_zone,
            fiscal_year_start_month: parts.fiscal_year_start_month,
            allow_overtime: parts.allow_overtime,
            overtime_multiplier_percent: parts.overtime_multiplier_percent,
            enable_timesheets: parts.enable_timesheets,
            require_time_approval: parts.require_time_approval,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn default_pay_period_type(&self) -> PayPeriodType {
        self.default_pay_period_type
    }
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }
    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }
    pub fn fiscal_year_start_month(&self) -> i32 {
        self.fiscal_year_start_month
    }
    pub fn allow_overtime(&self) -> bool {
        self.allow_overtime
    }
    pub fn overtime_multiplier_percent(&self) -> i32 {
        self.overtime_multiplier_percent
    }
    pub fn enable_timesheets(&self) -> bool {
        self.enable_timesheets
    }
    pub fn require_time_approval(&self) -> bool {
        self.require_time_approval
    }
}
