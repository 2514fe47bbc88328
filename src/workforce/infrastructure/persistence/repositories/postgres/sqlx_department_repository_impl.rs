use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    tenancy::{
        domain::{
            model::{
                enums::tenancy_domain_error::TenancyDomainError,
                value_objects::company_id::CompanyId,
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
            entities::{company::Company, department::Department},
            enums::workforce_domain_error::WorkforceDomainError,
        },
        infrastructure::persistence::repositories::department_repository::{
            DepartmentRepository, NewDepartmentRecord,
        },
    },
};

const DEPARTMENT_COLUMNS: &str = "t.id, t.company_id, t.name, t.description, t.is_active";

pub struct SqlxDepartmentRepositoryImpl {
    pool: PgPool,
}

impl SqlxDepartmentRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn map_department_row(row: &PgRow) -> Result<Department, WorkforceDomainError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let company_id: Uuid = row
        .try_get("company_id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(Department {
        id,
        company_id: CompanyId::from_uuid(company_id),
        name: row
            .try_get("name")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        description: row
            .try_get("description")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        is_active: row
            .try_get("is_active")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        audit: audit_metadata_from_row(row)?,
    })
}

#[async_trait]
impl DepartmentRepository for SqlxDepartmentRepositoryImpl {
    async fn insert(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        record: NewDepartmentRecord,
    ) -> Result<Department, WorkforceDomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        // The parent company must resolve to the caller's tenant; the scoped
        // lookup returns nothing for a foreign or deleted parent.
        let mut parent_check = ScopedQueryBuilder::tenant_scoped::<Company>(
            "t.id",
            filter,
            RowVisibility::ActiveOnly,
        );
        parent_check
            .push(" AND t.id = ")
            .push_bind(record.company_id.value());

        let parent = parent_check
            .build()
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        if parent.is_none() {
            return Err(TenancyDomainError::AccessDenied.into());
        }

        let id = Uuid::now_v7();
        let audit = interceptor.before_insert();

        let statement = r#"
            INSERT INTO departments (
                id,
                company_id,
                name,
                description,
                is_active,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
            )
            VALUES ($1, $2, $3, $4, TRUE, FALSE, $5, $6, $7, $8)
        "#;

        sqlx::query(statement)
            .bind(id)
            .bind(record.company_id.value())
            .bind(&record.name)
            .bind(&record.description)
            .bind(audit.created_at)
            .bind(audit.created_by.value())
            .bind(audit.modified_at)
            .bind(audit.modified_by.as_ref().map(|actor| actor.value()))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                translate_store_error(e, "department name already exists for this company")
            })?;

        tx.commit()
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        Ok(Department {
            id,
            company_id: record.company_id,
            name: record.name,
            description: record.description,
            is_active: true,
            audit,
        })
    }

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        department_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<Department>, WorkforceDomainError> {
        let select_list = format!("{DEPARTMENT_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<Department>(&select_list, filter, visibility);
        query.push(" AND t.id = ").push_bind(department_id);

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| map_department_row(&r)).transpose()
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        company_id: Option<CompanyId>,
        visibility: RowVisibility,
    ) -> Result<Vec<Department>, WorkforceDomainError> {
        let select_list = format!("{DEPARTMENT_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<Department>(&select_list, filter, visibility);
        if let Some(company_id) = company_id {
            query
                .push(" AND t.company_id = ")
                .push_bind(company_id.value());
        }
        query.push(" ORDER BY t.name");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(map_department_row).collect()
    }

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        department_id: Uuid,
    ) -> Result<(), WorkforceDomainError> {
        let (modified_at, modified_by) = interceptor.update_stamp();

        let mut update =
            ScopedUpdateBuilder::tenant_scoped::<Department>(filter, RowVisibility::ActiveOnly);
        update
            .push("is_deleted = TRUE, modified_at = ")
            .push_bind(modified_at)
            .push(", modified_by = ")
            .push_bind(modified_by.value().to_string());

        let mut query = update.into_scoped();
        query.push(" AND t.id = ").push_bind(department_id);

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
