pub mod actor_id;
pub mod company_id;
pub mod employer_id;
