use chrono::NaiveDate;
use payroll_axum_api::{
    tenancy::domain::model::{
        entities::tenant_context::TenantContext,
        value_objects::{actor_id::ActorId, employer_id::EmployerId},
    },
    workforce::domain::model::commands::create_employee_command::{
        CreateEmployeeCommand, CreateEmployeeCommandParts,
    },
};

pub fn context_for(employer: i64, actor: &str) -> TenantContext {
    TenantContext::new(
        EmployerId::new(employer).expect("valid employer id"),
        None,
        ActorId::new(actor.to_string()).expect("valid actor"),
    )
}

pub fn create_employee_command(
    context: TenantContext,
    employee_number: &str,
    email: &str,
) -> CreateEmployeeCommand {
    CreateEmployeeCommand::new(
        context,
        CreateEmployeeCommandParts {
            employee_number: employee_number.to_string(),
            first_name: "John".to_string(),
            middle_name: None,
            last_name: "Doe".to_string(),
            email: email.to_string(),
            phone: Some("555-0100".to_string()),
            job_title: Some("Accountant".to_string()),
            employment_type: "salaried".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            department_id: None,
        },
    )
    .expect("valid command")
}

pub fn create_employee_command_with_department(
    context: TenantContext,
    employee_number: &str,
    email: &str,
    department_id: String,
) -> CreateEmployeeCommand {
    CreateEmployeeCommand::new(
        context,
        CreateEmployeeCommandParts {
            employee_number: employee_number.to_string(),
            first_name: "John".to_string(),
            middle_name: None,
            last_name: "Doe".to_string(),
            email: email.to_string(),
            phone: None,
            job_title: None,
            employment_type: "hourly".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            department_id: Some(department_id),
        },
    )
    .expect("valid command")
}
