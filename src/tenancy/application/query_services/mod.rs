pub mod employer_query_service_impl;
