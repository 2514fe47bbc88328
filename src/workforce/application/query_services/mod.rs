pub mod workforce_query_service_impl;
