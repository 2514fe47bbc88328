pub mod pay_period;
pub mod payroll_transaction;
