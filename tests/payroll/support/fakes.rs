use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use payroll_axum_api::{
    payroll::{
        domain::model::{
            entities::{pay_period::PayPeriod, payroll_transaction::PayrollTransaction},
            enums::{
                pay_period_status::PayPeriodStatus, payroll_domain_error::PayrollDomainError,
            },
        },
        infrastructure::persistence::repositories::{
            pay_period_repository::{NewPayPeriodRecord, PayPeriodRepository},
            payroll_transaction_repository::{
                ListPayrollTransactionsCriteria, NewPayrollTransactionRecord,
                PayrollTransactionRepository, PayrollTransactionUpdateRecord,
            },
        },
    },
    tenancy::{
        domain::{
            model::{
                entities::audit_metadata::TenantOwnership,
                enums::tenancy_domain_error::TenancyDomainError,
                events::record_change_audited_event::RecordChangeAuditedEvent,
            },
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::{
            repositories::change_log_repository::ChangeLogRepository,
            scoped_query::{RowVisibility, TenantFilter},
        },
    },
};
use uuid::Uuid;

fn visible(is_deleted: bool, visibility: RowVisibility) -> bool {
    visibility == RowVisibility::IncludeDeleted || !is_deleted
}

#[derive(Default)]
pub struct FakePayPeriodRepository {
    state: Mutex<Vec<PayPeriod>>,
}

impl FakePayPeriodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PayPeriodRepository for FakePayPeriodRepository {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewPayPeriodRecord,
    ) -> Result<PayPeriod, PayrollDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        if state.iter().any(|period| {
            period.ownership.employer_id() == ownership.employer_id()
                && period.period_start == record.period_start
                && period.period_end == record.period_end
                && !period.audit.is_deleted
        }) {
            return Err(TenancyDomainError::DuplicateRecord(
                "pay period already exists for this range".to_string(),
            )
            .into());
        }

        let period = PayPeriod {
            id: Uuid::now_v7(),
            ownership,
            period_start: record.period_start,
            period_end: record.period_end,
            pay_date: record.pay_date,
            status: PayPeriodStatus::Open,
            audit: interceptor.before_insert(),
        };
        state.push(period.clone());
        Ok(period)
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Vec<PayPeriod>, PayrollDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .filter(|period| {
                period.ownership.employer_id() == filter.employer_id()
                    && visible(period.audit.is_deleted, visibility)
            })
            .cloned()
            .collect())
    }
}

/// Transaction store plus the employee/pay-period tenant maps the insert
/// verification resolves against.
#[derive(Default)]
pub struct FakePayrollTransactionRepository {
    employees: Mutex<HashMap<Uuid, i64>>,
    pay_periods: Mutex<HashMap<Uuid, i64>>,
    state: Mutex<Vec<PayrollTransaction>>,
}

impl FakePayrollTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_employee(&self, employee_id: Uuid, employer_id: i64) {
        self.employees
            .lock()
            .expect("mutex poisoned")
            .insert(employee_id, employer_id);
    }

    pub fn register_pay_period(&self, pay_period_id: Uuid, employer_id: i64) {
        self.pay_periods
            .lock()
            .expect("mutex poisoned")
            .insert(pay_period_id, employer_id);
    }

    fn employee_tenant(&self, employee_id: Uuid) -> Option<i64> {
        self.employees
            .lock()
            .expect("mutex poisoned")
            .get(&employee_id)
            .copied()
    }

    fn pay_period_tenant(&self, pay_period_id: Uuid) -> Option<i64> {
        self.pay_periods
            .lock()
            .expect("mutex poisoned")
            .get(&pay_period_id)
            .copied()
    }
}

#[async_trait]
impl PayrollTransactionRepository for FakePayrollTransactionRepository {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewPayrollTransactionRecord,
    ) -> Result<PayrollTransaction, PayrollDomainError> {
        let employer = ownership.employer_id().value();
        if self.employee_tenant(record.employee_id) != Some(employer)
            || self.pay_period_tenant(record.pay_period_id) != Some(employer)
        {
            return Err(TenancyDomainError::AccessDenied.into());
        }

        let transaction = PayrollTransaction {
            id: Uuid::now_v7(),
            ownership,
            employee_id: record.employee_id,
            pay_period_id: record.pay_period_id,
            gross_pay: record.gross_pay,
            net_pay: record.net_pay,
            regular_minutes: record.regular_minutes,
            overtime_minutes: record.overtime_minutes,
            regular_pay: record.regular_pay,
            overtime_pay: record.overtime_pay,
            total_deductions: record.total_deductions,
            total_taxes: record.total_taxes,
            payment_method: record.payment_method,
            payment_status: record.payment_status,
            payment_date: None,
            notes: record.notes,
            row_version: 0,
            audit: interceptor.before_insert(),
        };
        self.state
            .lock()
            .expect("mutex poisoned")
            .push(transaction.clone());
        Ok(transaction)
    }

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        transaction_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<PayrollTransaction>, PayrollDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .find(|transaction| {
                transaction.ownership.employer_id() == filter.employer_id()
                    && transaction.id == transaction_id
                    && visible(transaction.audit.is_deleted, visibility)
            })
            .cloned())
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        criteria: ListPayrollTransactionsCriteria,
        visibility: RowVisibility,
    ) -> Result<Vec<PayrollTransaction>, PayrollDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .filter(|transaction| {
                transaction.ownership.employer_id() == filter.employer_id()
                    && criteria
                        .pay_period_id
                        .is_none_or(|wanted| transaction.pay_period_id == wanted)
                    && criteria
                        .employee_id
                        .is_none_or(|wanted| transaction.employee_id == wanted)
                    && visible(transaction.audit.is_deleted, visibility)
            })
            .skip(criteria.offset as usize)
            .take(criteria.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        transaction_id: Uuid,
        expected_row_version: i64,
        record: PayrollTransactionUpdateRecord,
    ) -> Result<PayrollTransaction, PayrollDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let transaction = state
            .iter_mut()
            .find(|transaction| {
                transaction.ownership.employer_id() == filter.employer_id()
                    && transaction.id == transaction_id
                    && !transaction.audit.is_deleted
            })
            .ok_or(TenancyDomainError::RecordNotFound)?;

        if transaction.row_version != expected_row_version {
            return Err(TenancyDomainError::ConcurrencyConflict.into());
        }

        if let Some(status) = record.payment_status {
            transaction.payment_status = status;
        }
        if let Some(payment_date) = record.payment_date {
            transaction.payment_date = Some(payment_date);
        }
        if let Some(notes) = record.notes {
            transaction.notes = Some(notes);
        }

        interceptor.before_update(&mut transaction.audit);
        transaction.row_version += 1;
        Ok(transaction.clone())
    }

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        transaction_id: Uuid,
    ) -> Result<(), PayrollDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let transaction = state
            .iter_mut()
            .find(|transaction| {
                transaction.ownership.employer_id() == filter.employer_id()
                    && transaction.id == transaction_id
                    && !transaction.audit.is_deleted
            })
            .ok_or(TenancyDomainError::RecordNotFound)?;

        interceptor.soft_delete(&mut transaction.audit);
        transaction.row_version += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeChangeLogRepository {
    events: Mutex<Vec<RecordChangeAuditedEvent>>,
}

impl FakeChangeLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_events(&self) -> Vec<RecordChangeAuditedEvent> {
        self.events.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl ChangeLogRepository for FakeChangeLogRepository {
    async fn save_event(
        &self,
        event: &RecordChangeAuditedEvent,
    ) -> Result<(), TenancyDomainError> {
        self.events
            .lock()
            .expect("mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}
