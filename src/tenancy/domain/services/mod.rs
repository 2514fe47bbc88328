pub mod employer_query_service;
pub mod write_interceptor;
