use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction, postgres::PgRow};
use uuid::Uuid;

use crate::{
    tenancy::{
        domain::{
            model::{
                entities::audit_metadata::TenantOwnership,
                enums::tenancy_domain_error::TenancyDomainError,
                value_objects::employer_id::EmployerId,
            },
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::{
            row_mapping::{AUDIT_COLUMNS, audit_metadata_from_row},
            scoped_query::{RowVisibility, ScopedQueryBuilder, ScopedUpdateBuilder, TenantFilter},
            store_error::translate_store_error,
        },
    },
    workforce::{
        domain::model::{
            entities::{department::Department, employee::Employee},
            enums::{
                employment_status::EmploymentStatus, employment_type::EmploymentType,
                workforce_domain_error::WorkforceDomainError,
            },
            value_objects::{email_address::EmailAddress, employee_number::EmployeeNumber},
        },
        infrastructure::persistence::repositories::employee_repository::{
            EmployeeRepository, EmployeeUpdateRecord, ListEmployeesCriteria, NewEmployeeRecord,
        },
    },
};

const EMPLOYEE_COLUMNS: &str = "t.id, t.employer_id, t.department_id, t.employee_number, \
     t.first_name, t.middle_name, t.last_name, t.email, t.phone, t.job_title, \
     t.employment_type, t.employment_status, t.hire_date, t.termination_date, \
     t.is_active, t.row_version";

pub struct SqlxEmployeeRepositoryImpl {
    pool: PgPool,
}

impl SqlxEmployeeRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A department attached to an employee must resolve to the same tenant.
    async fn ensure_department_visible(
        tx: &mut Transaction<'_, Postgres>,
        filter: &TenantFilter,
        department_id: Uuid,
    ) -> Result<(), WorkforceDomainError> {
        let mut department_check = ScopedQueryBuilder::tenant_scoped::<Department>(
            "t.id",
            filter,
            RowVisibility::ActiveOnly,
        );
        department_check
            .push(" AND t.id = ")
            .push_bind(department_id);

        let department = department_check
            .build()
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        if department.is_none() {
            return Err(TenancyDomainError::AccessDenied.into());
        }

        Ok(())
    }
}

pub(crate) fn map_employee_row(row: &PgRow) -> Result<Employee, WorkforceDomainError> {
    let employer_id: i64 = row
        .try_get("employer_id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let employee_number: String = row
        .try_get("employee_number")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let employment_type: String = row
        .try_get("employment_type")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let employment_status: String = row
        .try_get("employment_status")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(Employee {
        id: row
            .try_get("id")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        ownership: TenantOwnership::new(EmployerId::new(employer_id)?),
        department_id: row
            .try_get("department_id")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        employee_number: EmployeeNumber::new(employee_number)?,
        first_name: row
            .try_get("first_name")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        middle_name: row
            .try_get("middle_name")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        last_name: row
            .try_get("last_name")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        email: EmailAddress::new(email)?,
        phone: row
            .try_get("phone")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        job_title: row
            .try_get("job_title")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        employment_type: EmploymentType::parse(&employment_type)?,
        employment_status: EmploymentStatus::parse(&employment_status)?,
        hire_date: row
            .try_get("hire_date")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        termination_date: row
            .try_get("termination_date")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        is_active: row
            .try_get("is_active")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        row_version: row
            .try_get("row_version")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        audit: audit_metadata_from_row(row)?,
    })
}

#[async_trait]
impl EmployeeRepository for SqlxEmployeeRepositoryImpl {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewEmployeeRecord,
    ) -> Result<Employee, WorkforceDomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        if let Some(department_id) = record.department_id {
            let filter = TenantFilter::for_employer(ownership.employer_id());
            Self::ensure_department_visible(&mut tx, &filter, department_id).await?;
        }

        let id = Uuid::now_v7();
        let audit = interceptor.before_insert();

        let statement = r#"
            INSERT INTO employees (
                id,
                employer_id,
                department_id,
                employee_number,
                first_name,
                middle_name,
                last_name,
                email,
                phone,
                job_title,
                employment_type,
                employment_status,
                hire_date,
                termination_date,
                is_active,
                row_version,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NULL, TRUE, 0, FALSE, $14, $15, $16, $17)
        "#;

        sqlx::query(statement)
            .bind(id)
            .bind(ownership.employer_id().value())
            .bind(record.department_id)
            .bind(record.employee_number.value())
            .bind(&record.first_name)
            .bind(&record.middle_name)
            .bind(&record.last_name)
            .bind(record.email.value())
            .bind(&record.phone)
            .bind(&record.job_title)
            .bind(record.employment_type.as_str())
            .bind(record.employment_status.as_str())
            .bind(record.hire_date)
            .bind(audit.created_at)
            .bind(audit.created_by.value())
            .bind(audit.modified_at)
            .bind(audit.modified_by.as_ref().map(|actor| actor.value()))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                translate_store_error(e, "employee number or email already in use for this employer")
            })?;

        tx.commit()
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        Ok(Employee {
            id,
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
            audit,
        })
    }

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        employee_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<Employee>, WorkforceDomainError> {
        let select_list = format!("{EMPLOYEE_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<Employee>(&select_list, filter, visibility);
        query.push(" AND t.id = ").push_bind(employee_id);

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| map_employee_row(&r)).transpose()
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        criteria: ListEmployeesCriteria,
        visibility: RowVisibility,
    ) -> Result<Vec<Employee>, WorkforceDomainError> {
        let select_list = format!("{EMPLOYEE_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<Employee>(&select_list, filter, visibility);

        if let Some(status) = criteria.employment_status {
            query
                .push(" AND t.employment_status = ")
                .push_bind(status.as_str());
        }
        if let Some(department_id) = criteria.department_id {
            query
                .push(" AND t.department_id = ")
                .push_bind(department_id);
        }

        query
            .push(" ORDER BY t.last_name, t.first_name LIMIT ")
            .push_bind(criteria.limit)
            .push(" OFFSET ")
            .push_bind(criteria.offset);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(map_employee_row).collect()
    }

    async fn update(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        employee_id: Uuid,
        expected_row_version: i64,
        record: EmployeeUpdateRecord,
    ) -> Result<Employee, WorkforceDomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        if let Some(department_id) = record.department_id {
            Self::ensure_department_visible(&mut tx, filter, department_id).await?;
        }

        let (modified_at, modified_by) = interceptor.update_stamp();

        let mut update =
            ScopedUpdateBuilder::tenant_scoped::<Employee>(filter, RowVisibility::ActiveOnly);
        update
            .push("modified_at = ")
            .push_bind(modified_at)
            .push(", modified_by = ")
            .push_bind(modified_by.value().to_string())
            .push(", row_version = t.row_version + 1");

        if let Some(phone) = &record.phone {
            update.push(", phone = ").push_bind(phone.clone());
        }
        if let Some(job_title) = &record.job_title {
            update.push(", job_title = ").push_bind(job_title.clone());
        }
        if let Some(department_id) = record.department_id {
            update.push(", department_id = ").push_bind(department_id);
        }
        if let Some(status) = record.employment_status {
            update
                .push(", employment_status = ")
                .push_bind(status.as_str());
        }
        if let Some(termination_date) = record.termination_date {
            update
                .push(", termination_date = ")
                .push_bind(termination_date);
        }
        if let Some(is_active) = record.is_active {
            update.push(", is_active = ").push_bind(is_active);
        }

        let mut query = update.into_scoped();
        query
            .push(" AND t.id = ")
            .push_bind(employee_id)
            .push(" AND t.row_version = ")
            .push_bind(expected_row_version);
        query.push(&format!(" RETURNING {EMPLOYEE_COLUMNS}, {AUDIT_COLUMNS}"));

        let row = query
            .build()
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        match row {
            Some(row) => {
                let employee = map_employee_row(&row)?;
                tx.commit()
                    .await
                    .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
                Ok(employee)
            }
            None => {
                // Zero rows is either a stale version or a row this tenant
                // cannot see; the distinction matters to the caller.
                drop(tx);
                match self
                    .find_by_id(filter, employee_id, RowVisibility::ActiveOnly)
                    .await?
                {
                    Some(_) => Err(TenancyDomainError::ConcurrencyConflict.into()),
                    None => Err(TenancyDomainError::RecordNotFound.into()),
                }
            }
        }
    }

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        employee_id: Uuid,
    ) -> Result<(), WorkforceDomainError> {
        let (modified_at, modified_by) = interceptor.update_stamp();

        let mut update =
            ScopedUpdateBuilder::tenant_scoped::<Employee>(filter, RowVisibility::ActiveOnly);
        update
            .push("is_deleted = TRUE, modified_at = ")
            .push_bind(modified_at)
            .push(", modified_by = ")
            .push_bind(modified_by.value().to_string())
            .push(", row_version = t.row_version + 1");

        let mut query = update.into_scoped();
        query.push(" AND t.id = ").push_bind(employee_id);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TenancyDomainError::RecordNotFound.into());
        }

        Ok(())
    }
}
