use chrono::NaiveDate;

use crate::{
    payroll::domain::model::enums::payroll_domain_error::PayrollDomainError,
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

#[derive(Clone, Debug)]
pub struct CreatePayPeriodCommand {
    context: TenantContext,
    period_start: NaiveDate,
    period_end: NaiveDate,
    pay_date: NaiveDate,
}

impl CreatePayPeriodCommand {
    pub fn new(
        context: TenantContext,
        period_start: NaiveDate,
        period_end: NaiveDate,
        pay_date: NaiveDate,
    ) -> Result<Self, PayrollDomainError> {
        if period_end <= period_start {
            return Err(PayrollDomainError::InvalidPayPeriodRange);
        }

        Ok(Self {
            context,
            period_start,
            period_end,
            pay_date,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }
    pub fn period_end(&self) -> NaiveDate {
        self.period_end
    }
    pub fn pay_date(&self) -> NaiveDate {
        self.pay_date
    }
}
