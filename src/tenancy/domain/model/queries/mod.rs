pub mod get_employer_query;
