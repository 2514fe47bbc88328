use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    payroll::domain::model::{
        entities::payroll_transaction::PayrollTransaction,
        enums::{
            payment_method::PaymentMethod, payment_status::PaymentStatus,
            payroll_domain_error::PayrollDomainError,
        },
        value_objects::money_cents::MoneyCents,
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
pub struct NewPayrollTransactionRecord {
    pub employee_id: Uuid,
    pub pay_period_id: Uuid,
    pub gross_pay: MoneyCents,
    pub net_pay: MoneyCents,
    pub regular_minutes: i32,
    pub overtime_minutes: i32,
    pub regular_pay: MoneyCents,
    pub overtime_pay: MoneyCents,
    pub total_deductions: MoneyCents,
    pub total_taxes: MoneyCents,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct PayrollTransactionUpdateRecord {
    pub payment_status: Option<PaymentStatus>,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ListPayrollTransactionsCriteria {
    pub pay_period_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait PayrollTransactionRepository: Send + Sync {
    /// The referenced employee and pay period must both resolve to the
    /// transaction's tenant; foreign references are denied.
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewPayrollTransactionRecord,
    ) -> Result<PayrollTransaction, PayrollDomainError>;

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        transaction_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<PayrollTransaction>, PayrollDomainError>;

    async fn list(
        &self,
        filter: &TenantFilter,
        criteria: ListPayrollTransactionsCriteria,
        visibility: RowVisibility,
    ) -> Result<Vec<PayrollTransaction>, PayrollDomainError>;

    async fn update(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        transaction_id: Uuid,
        expected_row_version: i64,
        record: PayrollTransactionUpdateRecord,
    ) -> Result<PayrollTransaction, PayrollDomainError>;

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        transaction_id: Uuid,
    ) -> Result<(), PayrollDomainError>;
}
