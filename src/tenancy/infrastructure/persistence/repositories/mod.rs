pub mod change_log_repository;
pub mod employer_repository;
pub mod maintenance_repository;
pub mod postgres;
