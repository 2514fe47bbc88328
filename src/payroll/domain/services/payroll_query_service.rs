use async_trait::async_trait;

use crate::payroll::domain::model::{
    entities::{pay_period::PayPeriod, payroll_transaction::PayrollTransaction},
    enums::payroll_domain_error::PayrollDomainError,
    queries::{
        get_payroll_transaction_query::GetPayrollTransactionQuery,
        list_pay_periods_query::ListPayPeriodsQuery,
        list_payroll_transactions_query::ListPayrollTransactionsQuery,
    },
};

#[async_trait]
pub trait PayrollQueryService: Send + Sync {
    async fn handle_list_pay_periods(
        &self,
        query: ListPayPeriodsQuery,
    ) -> Result<Vec<PayPeriod>, PayrollDomainError>;

    async fn handle_list_transactions(
        &self,
        query: ListPayrollTransactionsQuery,
    ) -> Result<Vec<PayrollTransaction>, PayrollDomainError>;

    async fn handle_get_transaction(
        &self,
        query: GetPayrollTransactionQuery,
    ) -> Result<PayrollTransaction, PayrollDomainError>;
}
