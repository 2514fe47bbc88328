use async_trait::async_trait;

use crate::workforce::domain::model::{
    commands::{
        create_company_command::CreateCompanyCommand,
        create_department_command::CreateDepartmentCommand,
        create_employee_command::CreateEmployeeCommand,
        delete_company_command::DeleteCompanyCommand,
        delete_department_command::DeleteDepartmentCommand,
        delete_employee_command::DeleteEmployeeCommand,
        update_employee_command::UpdateEmployeeCommand,
    },
    entities::{company::Company, department::Department, employee::Employee},
    enums::workforce_domain_error::WorkforceDomainError,
};

#[async_trait]
pub trait WorkforceCommandService: Send + Sync {
    async fn handle_create_company(
        &self,
        command: CreateCompanyCommand,
    ) -> Result<Company, WorkforceDomainError>;

    async fn handle_delete_company(
        &self,
        command: DeleteCompanyCommand,
    ) -> Result<(), WorkforceDomainError>;

    async fn handle_create_department(
        &self,
        command: CreateDepartmentCommand,
    ) -> Result<Department, WorkforceDomainError>;

    async fn handle_delete_department(
        &self,
        command: DeleteDepartmentCommand,
    ) -> Result<(), WorkforceDomainError>;

    async fn handle_create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, WorkforceDomainError>;

    async fn handle_update_employee(
        &self,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, WorkforceDomainError>;

    async fn handle_delete_employee(
        &self,
        command: DeleteEmployeeCommand,
    ) -> Result<(), WorkforceDomainError>;
}
