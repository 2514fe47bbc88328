pub mod employer_resource;
pub mod tenancy_error_response_resource;
