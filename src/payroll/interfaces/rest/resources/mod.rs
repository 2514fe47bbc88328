pub mod create_pay_period_request_resource;
pub mod create_payroll_transaction_request_resource;
pub mod list_payroll_transactions_query_resource;
pub mod pay_period_resource;
pub mod payroll_error_response_resource;
pub mod payroll_transaction_resource;
pub mod update_payroll_transaction_request_resource;
