use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    tenancy::{
        domain::{
            model::{
                entities::tenant_context::{TenantContext, TenantContextProvider},
                enums::record_change_action::RecordChangeAction,
                events::record_change_audited_event::RecordChangeAuditedEvent,
            },
            services::write_interceptor::{WriteInterceptor, resolve_ownership},
        },
        infrastructure::persistence::{
            repositories::change_log_repository::ChangeLogRepository, scoped_query::TenantFilter,
        },
    },
    workforce::{
        domain::{
            model::{
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
            },
            services::workforce_command_service::WorkforceCommandService,
        },
        infrastructure::persistence::repositories::{
            company_repository::{CompanyRepository, NewCompanyRecord},
            department_repository::{DepartmentRepository, NewDepartmentRecord},
            employee_repository::{EmployeeRepository, EmployeeUpdateRecord, NewEmployeeRecord},
        },
    },
};

pub struct WorkforceCommandServiceImpl {
    company_repository: Arc<dyn CompanyRepository>,
    department_repository: Arc<dyn DepartmentRepository>,
    employee_repository: Arc<dyn EmployeeRepository>,
    change_log_repository: Arc<dyn ChangeLogRepository>,
}

struct ChangeContext<'a> {
    context: &'a TenantContext,
    entity_name: &'a str,
    entity_id: String,
    action: RecordChangeAction,
}

impl WorkforceCommandServiceImpl {
    pub fn new(
        company_repository: Arc<dyn CompanyRepository>,
        department_repository: Arc<dyn DepartmentRepository>,
        employee_repository: Arc<dyn EmployeeRepository>,
        change_log_repository: Arc<dyn ChangeLogRepository>,
    ) -> Self {
        Self {
            company_repository,
            department_repository,
            employee_repository,
            change_log_repository,
        }
    }

    async fn record_change(&self, change: ChangeContext<'_>, error: Option<&WorkforceDomainError>) {
        let _ = self
            .change_log_repository
            .save_event(&RecordChangeAuditedEvent {
                employer_id: Some(change.context.employer_id().value()),
                entity_name: change.entity_name.to_string(),
                entity_id: change.entity_id,
                action: change.action,
                actor: change.context.actor().value().to_string(),
                success: error.is_none(),
                details: error.map(|e| e.to_string()),
                occurred_at: Utc::now(),
            })
            .await;
    }
}

#[async_trait]
impl WorkforceCommandService for WorkforceCommandServiceImpl {
    async fn handle_create_company(
        &self,
        command: CreateCompanyCommand,
    ) -> Result<Company, WorkforceDomainError> {
        let provider = TenantContextProvider::established(command.context().clone());
        let ownership = resolve_ownership(None, &provider)?;
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .company_repository
            .insert(
                ownership,
                &interceptor,
                NewCompanyRecord {
                    name: command.name().to_string(),
                    registration_number: command.registration_number().map(str::to_string),
                },
            )
            .await;

        match result {
            Ok(company) => {
                tracing::info!(company_id = %company.id, "company created");
                self.record_change(
                    ChangeContext {
                        context: command.context(),
                        entity_name: "company",
                        entity_id: company.id.to_string(),
                        action: RecordChangeAction::Created,
                    },
                    None,
                )
                .await;
                Ok(company)
            }
            Err(error) => {
                self.record_change(
                    ChangeContext {
                        context: command.context(),
                        entity_name: "company",
                        entity_id: "new".to_string(),
                        action: RecordChangeAction::Created,
                    },
                    Some(&error),
                )
                .await;
                Err(error)
            }
        }
    }

    async fn handle_delete_company(
        &self,
        command: DeleteCompanyCommand,
    ) -> Result<(), WorkforceDomainError> {
        let filter = TenantFilter::from_context(command.context());
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .company_repository
            .soft_delete(&filter, &interceptor, command.company_id())
            .await;

        self.record_change(
            ChangeContext {
                context: command.context(),
                entity_name: "company",
                entity_id: command.company_id().to_string(),
                action: RecordChangeAction::SoftDeleted,
            },
            result.as_ref().err(),
        )
        .await;

        result
    }

    async fn handle_create_department(
        &self,
        command: CreateDepartmentCommand,
    ) -> Result<Department, WorkforceDomainError> {
        let filter = TenantFilter::from_context(command.context());
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .department_repository
            .insert(
                &filter,
                &interceptor,
                NewDepartmentRecord {
                    company_id: command.company_id(),
                    name: command.name().to_string(),
                    description: command.description().map(str::to_string),
                },
            )
            .await;

        match result {
            Ok(department) => {
                self.record_change(
                    ChangeContext {
                        context: command.context(),
                        entity_name: "department",
                        entity_id: department.id.to_string(),
                        action: RecordChangeAction::Created,
                    },
                    None,
                )
                .await;
                Ok(department)
            }
            Err(error) => {
                self.record_change(
                    ChangeContext {
                        context: command.context(),
                        entity_name: "department",
                        entity_id: "new".to_string(),
                        action: RecordChangeAction::Created,
                    },
                    Some(&error),
                )
                .await;
                Err(error)
            }
        }
    }

    async fn handle_delete_department(
        &self,
        command: DeleteDepartmentCommand,
    ) -> Result<(), WorkforceDomainError> {
        let filter = TenantFilter::from_context(command.context());
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .department_repository
            .soft_delete(&filter, &interceptor, command.department_id())
            .await;

        self.record_change(
            ChangeContext {
                context: command.context(),
                entity_name: "department",
                entity_id: command.department_id().to_string(),
                action: RecordChangeAction::SoftDeleted,
            },
            result.as_ref().err(),
        )
        .await;

        result
    }

    async fn handle_create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, WorkforceDomainError> {
        let provider = TenantContextProvider::established(command.context().clone());
        let ownership = resolve_ownership(None, &provider)?;
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .employee_repository
            .insert(
                ownership,
                &interceptor,
                NewEmployeeRecord {
                    employee_number: command.employee_number().clone(),
                    first_name: command.first_name().to_string(),
                    middle_name: command.middle_name().map(str::to_string),
                    last_name: command.last_name().to_string(),
                    email: command.email().clone(),
                    phone: command.phone().map(str::to_string),
                    job_title: command.job_title().map(str::to_string),
                    employment_type: command.employment_type(),
                    employment_status: command.initial_status(),
                    hire_date: command.hire_date(),
                    department_id: command.department_id(),
                },
            )
            .await;

        match result {
            Ok(employee) => {
                tracing::info!(employee_id = %employee.id, "employee created");
                self.record_change(
                    ChangeContext {
                        context: command.context(),
                        entity_name: "employee",
                        entity_id: employee.id.to_string(),
                        action: RecordChangeAction::Created,
                    },
                    None,
                )
                .await;
                Ok(employee)
            }
            Err(error) => {
                self.record_change(
                    ChangeContext {
                        context: command.context(),
                        entity_name: "employee",
                        entity_id: "new".to_string(),
                        action: RecordChangeAction::Created,
                    },
                    Some(&error),
                )
                .await;
                Err(error)
            }
        }
    }

    async fn handle_update_employee(
        &self,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, WorkforceDomainError> {
        let filter = TenantFilter::from_context(command.context());
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .employee_repository
            .update(
                &filter,
                &interceptor,
                command.employee_id(),
                command.expected_row_version(),
                EmployeeUpdateRecord {
                    phone: command.phone().map(str::to_string),
                    job_title: command.job_title().map(str::to_string),
                    department_id: command.department_id(),
                    employment_status: command.employment_status(),
                    termination_date: command.termination_date(),
                    is_active: command.is_active(),
                },
            )
            .await;

        self.record_change(
            ChangeContext {
                context: command.context(),
                entity_name: "employee",
                entity_id: command.employee_id().to_string(),
                action: RecordChangeAction::Updated,
            },
            result.as_ref().err(),
        )
        .await;

        result
    }

    async fn handle_delete_employee(
        &self,
        command: DeleteEmployeeCommand,
    ) -> Result<(), WorkforceDomainError> {
        let filter = TenantFilter::from_context(command.context());
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .employee_repository
            .soft_delete(&filter, &interceptor, command.employee_id())
            .await;

        self.record_change(
            ChangeContext {
                context: command.context(),
                entity_name: "employee",
                entity_id: command.employee_id().to_string(),
                action: RecordChangeAction::SoftDeleted,
            },
            result.as_ref().err(),
        )
        .await;

        result
    }
}
