pub mod employment_status;
pub mod employment_type;
pub mod workforce_domain_error;
