pub mod pay_period_repository;
pub mod payroll_transaction_repository;
pub mod postgres;
