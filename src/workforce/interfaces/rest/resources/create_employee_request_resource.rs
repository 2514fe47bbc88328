use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateEmployeeRequestResource {
    #[validate(length(min = 2, max = 32))]
    pub employee_number: String,

    #[validate(length(min = 1, max = 80))]
    pub first_name: String,

    #[validate(length(max = 80))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 80))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 120))]
    pub job_title: Option<String>,

    /// One of `salaried`, `hourly`, `contractor`.
    pub employment_type: String,

    pub hire_date: NaiveDate,

    pub department_id: Option<String>,
}
