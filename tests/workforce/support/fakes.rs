use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use payroll_axum_api::{
    tenancy::{
        domain::{
            model::{
                entities::audit_metadata::TenantOwnership,
                enums::tenancy_domain_error::TenancyDomainError,
                events::record_change_audited_event::RecordChangeAuditedEvent,
                value_objects::company_id::CompanyId,
            },
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::{
            repositories::change_log_repository::ChangeLogRepository,
            scoped_query::{RowVisibility, TenantFilter},
        },
    },
    workforce::{
        domain::model::{
            entities::{company::Company, department::Department, employee::Employee},
            enums::workforce_domain_error::WorkforceDomainError,
        },
        infrastructure::persistence::repositories::{
            company_repository::{CompanyRepository, NewCompanyRecord},
            department_repository::{DepartmentRepository, NewDepartmentRecord},
            employee_repository::{
                EmployeeRepository, EmployeeUpdateRecord, ListEmployeesCriteria, NewEmployeeRecord,
            },
        },
    },
};
use uuid::Uuid;

fn visible(is_deleted: bool, visibility: RowVisibility) -> bool {
    visibility == RowVisibility::IncludeDeleted || !is_deleted
}

#[derive(Default)]
pub struct FakeCompanyRepository {
    state: Mutex<Vec<Company>>,
}

impl FakeCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> Vec<Company> {
        self.state.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl CompanyRepository for FakeCompanyRepository {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewCompanyRecord,
    ) -> Result<Company, WorkforceDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        if state.iter().any(|company| {
            company.ownership.employer_id() == ownership.employer_id()
                && company.name == record.name
                && !company.audit.is_deleted
        }) {
            return Err(TenancyDomainError::DuplicateRecord(
                "company name already exists for this employer".to_string(),
            )
            .into());
        }

        let company = Company {
            id: CompanyId::from_uuid(Uuid::now_v7()),
            ownership,
            name: record.name,
            registration_number: record.registration_number,
            audit: interceptor.before_insert(),
        };
        state.push(company.clone());
        Ok(company)
    }

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        company_id: CompanyId,
        visibility: RowVisibility,
    ) -> Result<Option<Company>, WorkforceDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .find(|company| {
                company.ownership.employer_id() == filter.employer_id()
                    && company.id == company_id
                    && visible(company.audit.is_deleted, visibility)
            })
            .cloned())
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Vec<Company>, WorkforceDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .filter(|company| {
                company.ownership.employer_id() == filter.employer_id()
                    && filter
                        .company_id()
                        .is_none_or(|sub_scope| company.id == sub_scope)
                    && visible(company.audit.is_deleted, visibility)
            })
            .cloned()
            .collect())
    }

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        company_id: CompanyId,
    ) -> Result<(), WorkforceDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let company = state
            .iter_mut()
            .find(|company| {
                company.ownership.employer_id() == filter.employer_id()
                    && company.id == company_id
                    && !company.audit.is_deleted
            })
            .ok_or(TenancyDomainError::RecordNotFound)?;

        interceptor.soft_delete(&mut company.audit);
        Ok(())
    }
}

/// Department store plus the company→tenant mapping the transitive filter
/// would resolve through.
#[derive(Default)]
pub struct FakeDepartmentRepository {
    companies: Mutex<HashMap<Uuid, i64>>,
    state: Mutex<Vec<Department>>,
}

impl FakeDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_company(&self, company_id: CompanyId, employer_id: i64) {
        self.companies
            .lock()
            .expect("mutex poisoned")
            .insert(company_id.value(), employer_id);
    }

    fn company_tenant(&self, company_id: CompanyId) -> Option<i64> {
        self.companies
            .lock()
            .expect("mutex poisoned")
            .get(&company_id.value())
            .copied()
    }
}

#[async_trait]
impl DepartmentRepository for FakeDepartmentRepository {
    async fn insert(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        record: NewDepartmentRecord,
    ) -> Result<Department, WorkforceDomainError> {
        if self.company_tenant(record.company_id) != Some(filter.employer_id().value()) {
            return Err(TenancyDomainError::AccessDenied.into());
        }

        let department = Department {
            id: Uuid::now_v7(),
            company_id: record.company_id,
            name: record.name,
            description: record.description,
            is_active: true,
            audit: interceptor.before_insert(),
        };
        self.state
            .lock()
            .expect("mutex poisoned")
            .push(department.clone());
        Ok(department)
    }

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        department_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<Department>, WorkforceDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .find(|department| {
                department.id == department_id
                    && self.company_tenant(department.company_id)
                        == Some(filter.employer_id().value())
                    && visible(department.audit.is_deleted, visibility)
            })
            .cloned())
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        company_id: Option<CompanyId>,
        visibility: RowVisibility,
    ) -> Result<Vec<Department>, WorkforceDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .filter(|department| {
                self.company_tenant(department.company_id) == Some(filter.employer_id().value())
                    && company_id.is_none_or(|wanted| department.company_id == wanted)
                    && filter
                        .company_id()
                        .is_none_or(|sub_scope| department.company_id == sub_scope)
                    && visible(department.audit.is_deleted, visibility)
            })
            .cloned()
            .collect())
    }

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        department_id: Uuid,
    ) -> Result<(), WorkforceDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let employer = filter.employer_id().value();

        let department = state
            .iter_mut()
            .find(|department| {
                department.id == department_id
                    && self
                        .companies
                        .lock()
                        .expect("mutex poisoned")
                        .get(&department.company_id.value())
                        .copied()
                        == Some(employer)
                    && !department.audit.is_deleted
            })
            .ok_or(TenancyDomainError::RecordNotFound)?;

        interceptor.soft_delete(&mut department.audit);
        Ok(())
    }
}

/// Employee store plus the department→tenant mapping used to reject
/// cross-tenant department references.
#[derive(Default)]
pub struct FakeEmployeeRepository {
    departments: Mutex<HashMap<Uuid, i64>>,
    state: Mutex<Vec<Employee>>,
}

impl FakeEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_department(&self, department_id: Uuid, employer_id: i64) {
        self.departments
            .lock()
            .expect("mutex poisoned")
            .insert(department_id, employer_id);
    }

    fn department_tenant(&self, department_id: Uuid) -> Option<i64> {
        self.departments
            .lock()
            .expect("mutex poisoned")
            .get(&department_id)
            .copied()
    }
}

#[async_trait]
impl EmployeeRepository for FakeEmployeeRepository {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewEmployeeRecord,
    ) -> Result<Employee, WorkforceDomainError> {
        if let Some(department_id) = record.department_id {
            if self.department_tenant(department_id) != Some(ownership.employer_id().value()) {
                return Err(TenancyDomainError::AccessDenied.into());
            }
        }

        let mut state = self.state.lock().expect("mutex poisoned");
        if state.iter().any(|employee| {
            employee.ownership.employer_id() == ownership.employer_id()
                && !employee.audit.is_deleted
                && (employee.email == record.email
                    || employee.employee_number == record.employee_number)
        }) {
            return Err(TenancyDomainError::DuplicateRecord(
                "employee number or email already in use for this employer".to_string(),
            )
            .into());
        }

        let employee = Employee {
            id: Uuid::now_v7(),
            ownership,
            department_id: record.department_id,
            employee_number: record.employee_number,
            first_name: record.first_name,
            middle_name: record.middle_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            job_title: record.job_title,
            employment_type: record.employment_type,
            employment_status: record.employment_status,
            hire_date: record.hire_date,
            termination_date: None,
            is_active: true,
            row_version: 0,
            audit: interceptor.before_insert(),
        };
        state.push(employee.clone());
        Ok(employee)
    }

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        employee_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<Employee>, WorkforceDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .find(|employee| {
                employee.ownership.employer_id() == filter.employer_id()
                    && employee.id == employee_id
                    && visible(employee.audit.is_deleted, visibility)
            })
            .cloned())
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        criteria: ListEmployeesCriteria,
        visibility: RowVisibility,
    ) -> Result<Vec<Employee>, WorkforceDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .filter(|employee| {
                employee.ownership.employer_id() == filter.employer_id()
                    && criteria
                        .employment_status
                        .is_none_or(|status| employee.employment_status == status)
                    && criteria
                        .department_id
                        .is_none_or(|wanted| employee.department_id == Some(wanted))
                    && visible(employee.audit.is_deleted, visibility)
            })
            .skip(criteria.offset as usize)
            .take(criteria.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        employee_id: Uuid,
        expected_row_version: i64,
        record: EmployeeUpdateRecord,
    ) -> Result<Employee, WorkforceDomainError> {
        if let Some(department_id) = record.department_id {
            if self.department_tenant(department_id) != Some(filter.employer_id().value()) {
                return Err(TenancyDomainError::AccessDenied.into());
            }
        }

        let mut state = self.state.lock().expect("mutex poisoned");
        let employee = state
            .iter_mut()
            .find(|employee| {
                employee.ownership.employer_id() == filter.employer_id()
                    && employee.id == employee_id
                    && !employee.audit.is_deleted
            })
            .ok_or(TenancyDomainError::RecordNotFound)?;

        if employee.row_version != expected_row_version {
            return Err(TenancyDomainError::ConcurrencyConflict.into());
        }

        if let Some(phone) = record.phone {
            employee.phone = Some(phone);
        }
        if let Some(job_title) = record.job_title {
            employee.job_title = Some(job_title);
        }
        if let Some(department_id) = record.department_id {
            employee.department_id = Some(department_id);
        }
        if let Some(status) = record.employment_status {
            employee.employment_status = status;
        }
        if let Some(termination_date) = record.termination_date {
            employee.termination_date = Some(termination_date);
        }
        if let Some(is_active) = record.is_active {
            employee.is_active = is_active;
        }

        interceptor.before_update(&mut employee.audit);
        employee.row_version += 1;
        Ok(employee.clone())
    }

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        employee_id: Uuid,
    ) -> Result<(), WorkforceDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let employee = state
            .iter_mut()
            .find(|employee| {
                employee.ownership.employer_id() == filter.employer_id()
                    && employee.id == employee_id
                    && !employee.audit.is_deleted
            })
            .ok_or(TenancyDomainError::RecordNotFound)?;

        interceptor.soft_delete(&mut employee.audit);
        employee.row_version += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeChangeLogRepository {
    events: Mutex<Vec<RecordChangeAuditedEvent>>,
}

impl FakeChangeLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_events(&self) -> Vec<RecordChangeAuditedEvent> {
        self.events.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl ChangeLogRepository for FakeChangeLogRepository {
    async fn save_event(
        &self,
        event: &RecordChangeAuditedEvent,
    ) -> Result<(), TenancyDomainError> {
        self.events
            .lock()
            .expect("mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}
