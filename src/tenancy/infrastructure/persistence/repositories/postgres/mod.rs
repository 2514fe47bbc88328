pub mod sqlx_change_log_repository_impl;
pub mod sqlx_employer_repository_impl;
pub mod sqlx_maintenance_repository_impl;
