use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    tenancy::{
        domain::{
            model::{
                entities::audit_metadata::TenantOwnership,
                enums::tenancy_domain_error::TenancyDomainError,
                value_objects::{company_id::CompanyId, employer_id::EmployerId},
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
            entities::company::Company, enums::workforce_domain_error::WorkforceDomainError,
        },
        infrastructure::persistence::repositories::company_repository::{
            CompanyRepository, NewCompanyRecord,
        },
    },
};

const COMPANY_COLUMNS: &str = "t.id, t.employer_id, t.name, t.registration_number";

pub struct SqlxCompanyRepositoryImpl {
    pool: PgPool,
}

impl SqlxCompanyRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn map_company_row(row: &PgRow) -> Result<Company, WorkforceDomainError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let employer_id: i64 = row
        .try_get("employer_id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(Company {
        id: CompanyId::from_uuid(id),
        ownership: TenantOwnership::new(EmployerId::new(employer_id)?),
        name: row
            .try_get("name")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        registration_number: row
            .try_get("registration_number")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        audit: audit_metadata_from_row(row)?,
    })
}

#[async_trait]
impl CompanyRepository for SqlxCompanyRepositoryImpl {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewCompanyRecord,
    ) -> Result<Company, WorkforceDomainError> {
        let id = Uuid::now_v7();
        let audit = interceptor.before_insert();

        let statement = r#"
            INSERT INTO companies (
                id,
                employer_id,
                name,
                registration_number,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
            )
            VALUES ($1, $2, $3, $4, FALSE, $5, $6, $7, $8)
        "#;

        sqlx::query(statement)
            .bind(id)
            .bind(ownership.employer_id().value())
            .bind(&record.name)
            .bind(&record.registration_number)
            .bind(audit.created_at)
            .bind(audit.created_by.value())
            .bind(audit.modified_at)
            .bind(audit.modified_by.as_ref().map(|actor| actor.value()))
            .execute(&self.pool)
            .await
            .map_err(|e| translate_store_error(e, "company name already exists for this employer"))?;

        Ok(Company {
            id: CompanyId::from_uuid(id),
            ownership,
            name: record.name,
            registration_number: record.registration_number,
            audit,
        })
    }

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        company_id: CompanyId,
        visibility: RowVisibility,
    ) -> Result<Option<Company>, WorkforceDomainError> {
        let select_list = format!("{COMPANY_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<Company>(&select_list, filter, visibility);
        query.push(" AND t.id = ").push_bind(company_id.value());

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| map_company_row(&r)).transpose()
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Vec<Company>, WorkforceDomainError> {
        let select_list = format!("{COMPANY_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<Company>(&select_list, filter, visibility);
        query.push(" ORDER BY t.name");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(map_company_row).collect()
    }

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        company_id: CompanyId,
    ) -> Result<(), WorkforceDomainError> {
        let (modified_at, modified_by) = interceptor.update_stamp();

        let mut update =
            ScopedUpdateBuilder::tenant_scoped::<Company>(filter, RowVisibility::ActiveOnly);
        update
            .push("is_deleted = TRUE, modified_at = ")
            .push_bind(modified_at)
            .push(", modified_by = ")
            .push_bind(modified_by.value().to_string());

        let mut query = update.into_scoped();
        query.push(" AND t.id = ").push_bind(company_id.value());

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
