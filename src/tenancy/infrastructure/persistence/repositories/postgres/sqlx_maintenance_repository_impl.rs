use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    payroll::domain::model::entities::{
        pay_period::PayPeriod, payroll_transaction::PayrollTransaction,
    },
    settings::domain::model::entities::{
        employer_settings::EmployerSettings, system_setting::SystemSetting,
    },
    tenancy::{
        domain::{
            model::{
                entities::employer::Employer, enums::tenancy_domain_error::TenancyDomainError,
                value_objects::employer_id::EmployerId,
            },
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::{
            repositories::maintenance_repository::{MaintenanceRepository, RegisterEmployerRecord},
            scoped_query::{MaintenanceScope, ScopedQueryBuilder},
            store_error::translate_store_error,
        },
    },
    workforce::domain::model::entities::{
        company::Company, department::Department, employee::Employee,
    },
};

/// The unfiltered persistence surface. Constructed only through
/// [`for_maintenance`](Self::for_maintenance); never handed to controllers.
pub struct SqlxMaintenanceRepositoryImpl {
    pool: PgPool,
    scope: MaintenanceScope,
}

impl SqlxMaintenanceRepositoryImpl {
    pub fn for_maintenance(pool: PgPool) -> Self {
        Self {
            pool,
            scope: MaintenanceScope::for_maintenance(),
        }
    }

    fn validate_identifier(identifier: &str) -> Result<(), TenancyDomainError> {
        if identifier.is_empty()
            || !identifier
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(TenancyDomainError::InfrastructureError(
                "invalid table identifier".to_string(),
            ));
        }
        Ok(())
    }

    async fn execute_statements(&self, statements: &[&str]) -> Result<(), TenancyDomainError> {
        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl MaintenanceRepository for SqlxMaintenanceRepositoryImpl {
    async fn synchronize_schema(&self) -> Result<(), TenancyDomainError> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS employers (
                id BIGSERIAL PRIMARY KEY,
                legal_name TEXT NOT NULL UNIQUE,
                tax_identification_number TEXT NOT NULL,
                country TEXT NOT NULL,
                subscription_plan TEXT NOT NULL DEFAULT 'standard',
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                row_version BIGINT NOT NULL DEFAULT 0,
                is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                created_by TEXT NOT NULL,
                modified_at TIMESTAMPTZ,
                modified_by TEXT
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS companies (
                id UUID PRIMARY KEY,
                employer_id BIGINT NOT NULL REFERENCES employers (id),
                name TEXT NOT NULL,
                registration_number TEXT,
                is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                created_by TEXT NOT NULL,
                modified_at TIMESTAMPTZ,
                modified_by TEXT,
                UNIQUE (employer_id, name)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS departments (
                id UUID PRIMARY KEY,
                company_id UUID NOT NULL REFERENCES companies (id),
                name TEXT NOT NULL,
                description TEXT,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                created_by TEXT NOT NULL,
                modified_at TIMESTAMPTZ,
                modified_by TEXT,
                UNIQUE (company_id, name)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                id UUID PRIMARY KEY,
                employer_id BIGINT NOT NULL REFERENCES employers (id),
                department_id UUID REFERENCES departments (id),
                employee_number TEXT NOT NULL,
                first_name TEXT NOT NULL,
                middle_name TEXT,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                job_title TEXT,
                employment_type TEXT NOT NULL,
                employment_status TEXT NOT NULL,
                hire_date DATE NOT NULL,
                termination_date DATE,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                row_version BIGINT NOT NULL DEFAULT 0,
                is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                created_by TEXT NOT NULL,
                modified_at TIMESTAMPTZ,
                modified_by TEXT,
                UNIQUE (employer_id, employee_number),
                UNIQUE (employer_id, email)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS pay_periods (
                id UUID PRIMARY KEY,
                employer_id BIGINT NOT NULL REFERENCES employers (id),
                period_start DATE NOT NULL,
                period_end DATE NOT NULL,
                pay_date DATE NOT NULL,
                status TEXT NOT NULL,
                is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                created_by TEXT NOT NULL,
                modified_at TIMESTAMPTZ,
                modified_by TEXT,
                UNIQUE (employer_id, period_start, period_end)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS payroll_transactions (
                id UUID PRIMARY KEY,
                employer_id BIGINT NOT NULL REFERENCES employers (id),
                employee_id UUID NOT NULL REFERENCES employees (id),
                pay_period_id UUID NOT NULL REFERENCES pay_periods (id),
                gross_pay_cents BIGINT NOT NULL,
                net_pay_cents BIGINT NOT NULL,
                regular_minutes INTEGER NOT NULL DEFAULT 0,
                overtime_minutes INTEGER NOT NULL DEFAULT 0,
                regular_pay_cents BIGINT NOT NULL DEFAULT 0,
                overtime_pay_cents BIGINT NOT NULL DEFAULT 0,
                total_deductions_cents BIGINT NOT NULL DEFAULT 0,
                total_taxes_cents BIGINT NOT NULL DEFAULT 0,
                payment_method TEXT NOT NULL,
                payment_status TEXT NOT NULL,
                payment_date DATE,
                notes TEXT,
                row_version BIGINT NOT NULL DEFAULT 0,
                is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                created_by TEXT NOT NULL,
                modified_at TIMESTAMPTZ,
                modified_by TEXT,
                UNIQUE (employee_id, pay_period_id)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS employer_settings (
                employer_id BIGINT PRIMARY KEY REFERENCES employers (id),
                default_pay_period_type TEXT NOT NULL,
                default_currency TEXT NOT NULL,
                time_zone TEXT NOT NULL,
                fiscal_year_start_month INTEGER NOT NULL,
                allow_overtime BOOLEAN NOT NULL,
                overtime_multiplier_percent INTEGER NOT NULL,
                enable_timesheets BOOLEAN NOT NULL,
                require_time_approval BOOLEAN NOT NULL,
                is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                created_by TEXT NOT NULL,
                modified_at TIMESTAMPTZ,
                modified_by TEXT
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS system_settings (
                setting_key TEXT PRIMARY KEY,
                setting_value TEXT NOT NULL,
                description TEXT,
                is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                created_by TEXT NOT NULL,
                modified_at TIMESTAMPTZ,
                modified_by TEXT
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS record_change_log (
                id BIGSERIAL PRIMARY KEY,
                employer_id BIGINT,
                entity_name TEXT NOT NULL,
                entity_id TEXT NOT NULL,
                action TEXT NOT NULL,
                actor TEXT NOT NULL,
                success BOOLEAN NOT NULL,
                details TEXT,
                occurred_at TIMESTAMPTZ NOT NULL
            )
            "#,
        ];

        self.execute_statements(&statements).await
    }

    async fn register_employer(
        &self,
        record: RegisterEmployerRecord,
    ) -> Result<Employer, TenancyDomainError> {
        let interceptor = WriteInterceptor::for_system();
        let audit = interceptor.before_insert();

        let statement = r#"
            INSERT INTO employers (
                legal_name,
                tax_identification_number,
                country,
                subscription_plan,
                is_active,
                row_version,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
            )
            VALUES ($1, $2, $3, $4, TRUE, 0, FALSE, $5, $6, $7, $8)
            RETURNING id
        "#;

        let row = sqlx::query(statement)
            .bind(&record.legal_name)
            .bind(&record.tax_identification_number)
            .bind(&record.country)
            .bind(&record.subscription_plan)
            .bind(audit.created_at)
            .bind(audit.created_by.value())
            .bind(audit.modified_at)
            .bind(audit.modified_by.as_ref().map(|actor| actor.value()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate_store_error(e, "employer legal name already registered"))?;

        let id: i64 = sqlx::Row::try_get(&row, "id")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        Ok(Employer {
            id: EmployerId::new(id)?,
            legal_name: record.legal_name,
            tax_identification_number: record.tax_identification_number,
            country: record.country,
            subscription_plan: record.subscription_plan,
            is_active: true,
            row_version: 0,
            audit,
        })
    }

    async fn count_rows_all_tenants(&self, table_name: &str) -> Result<i64, TenancyDomainError> {
        Self::validate_identifier(table_name)?;

        let statement = format!("SELECT COUNT(*) AS total FROM {table_name}");
        let row = sqlx::query(&statement)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        sqlx::Row::try_get(&row, "total")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))
    }

    async fn purge_soft_deleted(&self) -> Result<u64, TenancyDomainError> {
        // Children before parents so purged rows never strand a reference.
        let mut purged = 0u64;
        let mut builders = vec![
            ScopedQueryBuilder::purge_deleted::<PayrollTransaction>(&self.scope),
            ScopedQueryBuilder::purge_deleted::<Employee>(&self.scope),
            ScopedQueryBuilder::purge_deleted::<PayPeriod>(&self.scope),
            ScopedQueryBuilder::purge_deleted::<Department>(&self.scope),
            ScopedQueryBuilder::purge_deleted::<Company>(&self.scope),
            ScopedQueryBuilder::purge_deleted::<EmployerSettings>(&self.scope),
            ScopedQueryBuilder::purge_deleted::<Employer>(&self.scope),
            ScopedQueryBuilder::purge_deleted_global::<SystemSetting>(&self.scope),
        ];

        for builder in &mut builders {
            let result = builder
                .build()
                .execute(&self.pool)
                .await
                .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
            purged += result.rows_affected();
        }

        Ok(purged)
    }
}
