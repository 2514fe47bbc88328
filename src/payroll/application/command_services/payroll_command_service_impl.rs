use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    payroll::{
        domain::{
            model::{
                commands::{
                    create_pay_period_command::CreatePayPeriodCommand,
                    create_payroll_transaction_command::CreatePayrollTransactionCommand,
                    delete_payroll_transaction_command::DeletePayrollTransactionCommand,
                    update_payroll_transaction_command::UpdatePayrollTransactionCommand,
                },
                entities::{pay_period::PayPeriod, payroll_transaction::PayrollTransaction},
                enums::payroll_domain_error::PayrollDomainError,
            },
            services::payroll_command_service::PayrollCommandService,
        },
        infrastructure::persistence::repositories::{
            pay_period_repository::{NewPayPeriodRecord, PayPeriodRepository},
            payroll_transaction_repository::{
                NewPayrollTransactionRecord, PayrollTransactionRepository,
                PayrollTransactionUpdateRecord,
            },
        },
    },
    tenancy::{
        domain::{
            model::{
                entities::tenant_context::{TenantContext, TenantContextProvider},
                enums::record_change_action::RecordChangeAction,
                events::record_change_audited_event::RecordChangeAuditedEvent,
            },
            services::write_interceptor::{WriteInterceptor, resolve_ownership},
        },
        infrastructure::persistence::{
            repositories::change_log_repository::ChangeLogRepository, scoped_query::TenantFilter,
        },
    },
};

pub struct PayrollCommandServiceImpl {
    pay_period_repository: Arc<dyn PayPeriodRepository>,
    transaction_repository: Arc<dyn PayrollTransactionRepository>,
    change_log_repository: Arc<dyn ChangeLogRepository>,
}

impl PayrollCommandServiceImpl {
    pub fn new(
        pay_period_repository: Arc<dyn PayPeriodRepository>,
        transaction_repository: Arc<dyn PayrollTransactionRepository>,
        change_log_repository: Arc<dyn ChangeLogRepository>,
    ) -> Self {
        Self {
            pay_period_repository,
            transaction_repository,
            change_log_repository,
        }
    }

    async fn record_change(
        &self,
        context: &TenantContext,
        entity_name: &str,
        entity_id: String,
        action: RecordChangeAction,
        error: Option<&PayrollDomainError>,
    ) {
        let _ = self
            .change_log_repository
            .save_event(&RecordChangeAuditedEvent {
                employer_id: Some(context.employer_id().value()),
                entity_name: entity_name.to_string(),
                entity_id,
                action,
                actor: context.actor().value().to_string(),
                success: error.is_none(),
                details: error.map(|e| e.to_string()),
                occurred_at: Utc::now(),
            })
            .await;
    }
}

#[async_trait]
impl PayrollCommandService for PayrollCommandServiceImpl {
    async fn handle_create_pay_period(
        &self,
        command: CreatePayPeriodCommand,
    ) -> Result<PayPeriod, PayrollDomainError> {
        let provider = TenantContextProvider::established(command.context().clone());
        let ownership = resolve_ownership(None, &provider)?;
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .pay_period_repository
            .insert(
                ownership,
                &interceptor,
                NewPayPeriodRecord {
                    period_start: command.period_start(),
                    period_end: command.period_end(),
                    pay_date: command.pay_date(),
                },
            )
            .await;

        let entity_id = result
            .as_ref()
            .map(|period| period.id.to_string())
            .unwrap_or_else(|_| "new".to_string());
        self.record_change(
            command.context(),
            "pay_period",
            entity_id,
            RecordChangeAction::Created,
            result.as_ref().err(),
        )
        .await;

        result
    }

    async fn handle_create_transaction(
        &self,
        command: CreatePayrollTransactionCommand,
    ) -> Result<PayrollTransaction, PayrollDomainError> {
        let provider = TenantContextProvider::established(command.context().clone());
        let ownership = resolve_ownership(None, &provider)?;
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .transaction_repository
            .insert(
                ownership,
                &interceptor,
                NewPayrollTransactionRecord {
                    employee_id: command.employee_id(),
                    pay_period_id: command.pay_period_id(),
                    gross_pay: command.gross_pay(),
                    net_pay: command.net_pay(),
                    regular_minutes: command.regular_minutes(),
                    overtime_minutes: command.overtime_minutes(),
                    regular_pay: command.regular_pay(),
                    overtime_pay: command.overtime_pay(),
                    total_deductions: command.total_deductions(),
                    total_taxes: command.total_taxes(),
                    payment_method: command.payment_method(),
                    payment_status: command.initial_status(),
                    notes: command.notes().map(str::to_string),
                },
            )
            .await;

        if let Ok(transaction) = &result {
            tracing::info!(transaction_id = %transaction.id, "payroll transaction created");
        }

        let entity_id = result
            .as_ref()
            .map(|transaction| transaction.id.to_string())
            .unwrap_or_else(|_| "new".to_string());
        self.record_change(
            command.context(),
            "payroll_transaction",
            entity_id,
            RecordChangeAction::Created,
            result.as_ref().err(),
        )
        .await;

        result
    }

    async fn handle_update_transaction(
        &self,
        command: UpdatePayrollTransactionCommand,
    ) -> Result<PayrollTransaction, PayrollDomainError> {
        let filter = TenantFilter::from_context(command.context());
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .transaction_repository
            .update(
                &filter,
                &interceptor,
                command.transaction_id(),
                command.expected_row_version(),
                PayrollTransactionUpdateRecord {
                    payment_status: command.payment_status(),
                    payment_date: command.payment_date(),
                    notes: command.notes().map(str::to_string),
                },
            )
            .await;

        self.record_change(
            command.context(),
            "payroll_transaction",
            command.transaction_id().to_string(),
            RecordChangeAction::Updated,
            result.as_ref().err(),
        )
        .await;

        result
    }

    async fn handle_delete_transaction(
        &self,
        command: DeletePayrollTransactionCommand,
    ) -> Result<(), PayrollDomainError> {
        let filter = TenantFilter::from_context(command.context());
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .transaction_repository
            .soft_delete(&filter, &interceptor, command.transaction_id())
            .await;

        self.record_change(
            command.context(),
            "payroll_transaction",
            command.transaction_id().to_string(),
            RecordChangeAction::SoftDeleted,
            result.as_ref().err(),
        )
        .await;

        result
    }
}
