pub mod record_change_action;
pub mod tenancy_domain_error;
