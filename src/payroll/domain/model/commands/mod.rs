pub mod create_pay_period_command;
pub mod create_payroll_transaction_command;
pub mod delete_payroll_transaction_command;
pub mod update_payroll_transaction_command;
