pub mod get_payroll_transaction_query;
pub mod list_pay_periods_query;
pub mod list_payroll_transactions_query;
