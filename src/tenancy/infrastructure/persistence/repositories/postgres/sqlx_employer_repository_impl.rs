use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::tenancy::{
    domain::model::{
        entities::employer::Employer, enums::tenancy_domain_error::TenancyDomainError,
        value_objects::employer_id::EmployerId,
    },
    infrastructure::persistence::{
        repositories::employer_repository::EmployerRepository,
        row_mapping::{AUDIT_COLUMNS, audit_metadata_from_row},
        scoped_query::{RowVisibility, ScopedQueryBuilder, TenantFilter},
    },
};

const EMPLOYER_COLUMNS: &str =
    "t.id, t.legal_name, t.tax_identification_number, t.country, t.subscription_plan, t.is_active, t.row_version";

pub struct SqlxEmployerRepositoryImpl {
    pool: PgPool,
}

impl SqlxEmployerRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn map_employer_row(row: &PgRow) -> Result<Employer, TenancyDomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(Employer {
        id: EmployerId::new(id)?,
        legal_name: row
            .try_get("legal_name")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        tax_identification_number: row
            .try_get("tax_identification_number")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        country: row
            .try_get("country")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        subscription_plan: row
            .try_get("subscription_plan")
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
impl EmployerRepository for SqlxEmployerRepositoryImpl {
    async fn find_current(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Option<Employer>, TenancyDomainError> {
        let select_list = format!("{EMPLOYER_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<Employer>(&select_list, filter, visibility);

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| map_employer_row(&r)).transpose()
    }
}
