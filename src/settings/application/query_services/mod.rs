pub mod settings_query_service_impl;
