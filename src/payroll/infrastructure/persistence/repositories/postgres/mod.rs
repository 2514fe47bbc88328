pub mod sqlx_pay_period_repository_impl;
pub mod sqlx_payroll_transaction_repository_impl;
