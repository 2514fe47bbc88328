pub mod pay_period_status;
pub mod payment_method;
pub mod payment_status;
pub mod payroll_domain_error;
