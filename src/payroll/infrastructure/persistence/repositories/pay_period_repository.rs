use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    payroll::domain::model::{
        entities::pay_period::PayPeriod, enums::payroll_domain_error::PayrollDomainError,
    },
    tenancy::{
        domain::{
            model::entities::audit_metadata::TenantOwnership,
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
    },
};

#[derive(Clone, Debug)]
pub struct NewPayPeriodRecord {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub pay_date: NaiveDate,
}

#[async_trait]
pub trait PayPeriodRepository: Send + Sync {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewPayPeriodRecord,
    ) -> Result<PayPeriod, PayrollDomainError>;

    async fn list(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Vec<PayPeriod>, PayrollDomainError>;
}
