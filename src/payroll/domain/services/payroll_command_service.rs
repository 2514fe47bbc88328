use async_trait::async_trait;

use crate::payroll::domain::model::{
    commands::{
        create_pay_period_command::CreatePayPeriodCommand,
        create_payroll_transaction_command::CreatePayrollTransactionCommand,
        delete_payroll_transaction_command::DeletePayrollTransactionCommand,
        update_payroll_transaction_command::UpdatePayrollTransactionCommand,
    },
    entities::{pay_period::PayPeriod, payroll_transaction::PayrollTransaction},
    enums::payroll_domain_error::PayrollDomainError,
};

#[async_trait]
pub trait PayrollCommandService: Send + Sync {
    async fn handle_create_pay_period(
        &self,
        command: CreatePayPeriodCommand,
    ) -> Result<PayPeriod, PayrollDomainError>;

    async fn handle_create_transaction(
        &self,
        command: CreatePayrollTransactionCommand,
    ) -> Result<PayrollTransaction, PayrollDomainError>;

    async fn handle_update_transaction(
        &self,
        command: UpdatePayrollTransactionCommand,
    ) -> Result<PayrollTransaction, PayrollDomainError>;

    async fn handle_delete_transaction(
        &self,
        command: DeletePayrollTransactionCommand,
    ) -> Result<(), PayrollDomainError>;
}
