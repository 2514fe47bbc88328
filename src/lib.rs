pub mod config;
pub mod payroll;
pub mod settings;
pub mod tenancy;
pub mod workforce;
