use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction, postgres::PgRow};
use uuid::Uuid;

use crate::{
    payroll::{
        domain::model::{
            entities::{pay_period::PayPeriod, payroll_transaction::PayrollTransaction},
            enums::{
                payment_method::PaymentMethod, payment_status::PaymentStatus,
                payroll_domain_error::PayrollDomainError,
            },
            value_objects::money_cents::MoneyCents,
        },
        infrastructure::persistence::repositories::payroll_transaction_repository::{
            ListPayrollTransactionsCriteria, NewPayrollTransactionRecord,
            PayrollTransactionRepository, PayrollTransactionUpdateRecord,
        },
    },
    tenancy::{
        domain::{
            model::{
                entities::audit_metadata::TenantOwnership,
                enums::tenancy_domain_error::TenancyDomainError,
                scoping::TenantScoped,
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
    workforce::domain::model::entities::employee::Employee,
};

const TRANSACTION_COLUMNS: &str = "t.id, t.employer_id, t.employee_id, t.pay_period_id, \
     t.gross_pay_cents, t.net_pay_cents, t.regular_minutes, t.overtime_minutes, \
     t.regular_pay_cents, t.overtime_pay_cents, t.total_deductions_cents, t.total_taxes_cents, \
     t.payment_method, t.payment_status, t.payment_date, t.notes, t.row_version";

pub struct SqlxPayrollTransactionRepositoryImpl {
    pool: PgPool,
}

impl SqlxPayrollTransactionRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_row_visible<E: TenantScoped>(
        tx: &mut Transaction<'_, Postgres>,
        filter: &TenantFilter,
        id: Uuid,
    ) -> Result<(), PayrollDomainError> {
        let mut check =
            ScopedQueryBuilder::tenant_scoped::<E>("t.id", filter, RowVisibility::ActiveOnly);
        check.push(" AND t.id = ").push_bind(id);

        let row = check
            .build()
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        if row.is_none() {
            return Err(TenancyDomainError::AccessDenied.into());
        }

        Ok(())
    }
}

fn money_from_row(row: &PgRow, column: &str) -> Result<MoneyCents, PayrollDomainError> {
    let cents: i64 = row
        .try_get(column)
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    MoneyCents::new(cents)
}

pub(crate) fn map_transaction_row(row: &PgRow) -> Result<PayrollTransaction, PayrollDomainError> {
    let employer_id: i64 = row
        .try_get("employer_id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let payment_method: String = row
        .try_get("payment_method")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let payment_status: String = row
        .try_get("payment_status")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(PayrollTransaction {
        id: row
            .try_get("id")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        ownership: TenantOwnership::new(EmployerId::new(employer_id)?),
        employee_id: row
            .try_get("employee_id")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        pay_period_id: row
            .try_get("pay_period_id")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        gross_pay: money_from_row(row, "gross_pay_cents")?,
        net_pay: money_from_row(row, "net_pay_cents")?,
        regular_minutes: row
            .try_get("regular_minutes")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        overtime_minutes: row
            .try_get("overtime_minutes")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        regular_pay: money_from_row(row, "regular_pay_cents")?,
        overtime_pay: money_from_row(row, "overtime_pay_cents")?,
        total_deductions: money_from_row(row, "total_deductions_cents")?,
        total_taxes: money_from_row(row, "total_taxes_cents")?,
        payment_method: PaymentMethod::parse(&payment_method)?,
        payment_status: PaymentStatus::parse(&payment_status)?,
        payment_date: row
            .try_get("payment_date")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        notes: row
            .try_get("notes")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        row_version: row
            .try_get("row_version")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        audit: audit_metadata_from_row(row)?,
    })
}

#[async_trait]
impl PayrollTransactionRepository for SqlxPayrollTransactionRepositoryImpl {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewPayrollTransactionRecord,
    ) -> Result<PayrollTransaction, PayrollDomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        let filter = TenantFilter::for_employer(ownership.employer_id());
        Self::ensure_row_visible::<Employee>(&mut tx, &filter, record.employee_id).await?;
        Self::ensure_row_visible::<PayPeriod>(&mut tx, &filter, record.pay_period_id).await?;

        let id = Uuid::now_v7();
        let audit = interceptor.before_insert();

        let statement = r#"
            INSERT INTO payroll_transactions (
                id,
                employer_id,
                employee_id,
                pay_period_id,
                gross_pay_cents,
                net_pay_cents,
                regular_minutes,
                overtime_minutes,
                regular_pay_cents,
                overtime_pay_cents,
                total_deductions_cents,
                total_taxes_cents,
                payment_method,
                payment_status,
                payment_date,
                notes,
                row_version,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, NULL, $15, 0, FALSE, $16, $17, $18, $19)
        "#;

        sqlx::query(statement)
            .bind(id)
            .bind(ownership.employer_id().value())
            .bind(record.employee_id)
            .bind(record.pay_period_id)
            .bind(record.gross_pay.value())
            .bind(record.net_pay.value())
            .bind(record.regular_minutes)
            .bind(record.overtime_minutes)
            .bind(record.regular_pay.value())
            .bind(record.overtime_pay.value())
            .bind(record.total_deductions.value())
            .bind(record.total_taxes.value())
            .bind(record.payment_method.as_str())
            .bind(record.payment_status.as_str())
            .bind(&record.notes)
            .bind(audit.created_at)
            .bind(audit.created_by.value())
            .bind(audit.modified_at)
            .bind(audit.modified_by.as_ref().map(|actor| actor.value()))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                translate_store_error(e, "payroll transaction already exists for this employee and period")
            })?;

        tx.commit()
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        Ok(PayrollTransaction {
            id,
            ownership,
            employee_id: record.employee_id,
            pay_period_id: record.pay_period_id,
            gross_pay: record.gross_pay,
            net_pay: record.net_pay,
            regular_minutes: record.regular_minutes,
            overtime_minutes: record.overtime_minutes,
            regular_pay: record.regular_pay,
            overtime_pay: record.overtime_pay,
            total_deductions: record.total_deductions,
            total_taxes: record.total_taxes,
            payment_method: record.payment_method,
            payment_status: record.payment_status,
            payment_date: None,
            notes: record.notes,
            row_version: 0,
            audit,
        })
    }

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        transaction_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<PayrollTransaction>, PayrollDomainError> {
        let select_list = format!("{TRANSACTION_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query = ScopedQueryBuilder::tenant_scoped::<PayrollTransaction>(
            &select_list,
            filter,
            visibility,
        );
        query.push(" AND t.id = ").push_bind(transaction_id);

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| map_transaction_row(&r)).transpose()
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        criteria: ListPayrollTransactionsCriteria,
        visibility: RowVisibility,
    ) -> Result<Vec<PayrollTransaction>, PayrollDomainError> {
        let select_list = format!("{TRANSACTION_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query = ScopedQueryBuilder::tenant_scoped::<PayrollTransaction>(
            &select_list,
            filter,
            visibility,
        );

        if let Some(pay_period_id) = criteria.pay_period_id {
            query
                .push(" AND t.pay_period_id = ")
                .push_bind(pay_period_id);
        }
        if let Some(employee_id) = criteria.employee_id {
            query.push(" AND t.employee_id = ").push_bind(employee_id);
        }

        query
            .push(" ORDER BY t.created_at DESC LIMIT ")
            .push_bind(criteria.limit)
            .push(" OFFSET ")
            .push_bind(criteria.offset);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(map_transaction_row).collect()
    }

    async fn update(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        transaction_id: Uuid,
        expected_row_version: i64,
        record: PayrollTransactionUpdateRecord,
    ) -> Result<PayrollTransaction, PayrollDomainError> {
        let (modified_at, modified_by) = interceptor.update_stamp();

        let mut update = ScopedUpdateBuilder::tenant_scoped::<PayrollTransaction>(
            filter,
            RowVisibility::ActiveOnly,
        );
        update
            .push("modified_at = ")
            .push_bind(modified_at)
            .push(", modified_by = ")
            .push_bind(modified_by.value().to_string())
            .push(", row_version = t.row_version + 1");

        if let Some(status) = record.payment_status {
            update.push(", payment_status = ").push_bind(status.as_str());
        }
        if let Some(payment_date) = record.payment_date {
            update.push(", payment_date = ").push_bind(payment_date);
        }
        if let Some(notes) = &record.notes {
            update.push(", notes = ").push_bind(notes.clone());
        }

        let mut query = update.into_scoped();
        query
            .push(" AND t.id = ")
            .push_bind(transaction_id)
            .push(" AND t.row_version = ")
            .push_bind(expected_row_version);
        query.push(&format!(" RETURNING {TRANSACTION_COLUMNS}, {AUDIT_COLUMNS}"));

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        match row {
            Some(row) => map_transaction_row(&row),
            None => match self
                .find_by_id(filter, transaction_id, RowVisibility::ActiveOnly)
                .await?
            {
                Some(_) => Err(TenancyDomainError::ConcurrencyConflict.into()),
                None => Err(TenancyDomainError::RecordNotFound.into()),
            },
        }
    }

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        transaction_id: Uuid,
    ) -> Result<(), PayrollDomainError> {
        let (modified_at, modified_by) = interceptor.update_stamp();

        let mut update = ScopedUpdateBuilder::tenant_scoped::<PayrollTransaction>(
            filter,
            RowVisibility::ActiveOnly,
        );
        update
            .push("is_deleted = TRUE, modified_at = ")
            .push_bind(modified_at)
            .push(", modified_by = ")
            .push_bind(modified_by.value().to_string())
            .push(", row_version = t.row_version + 1");

        let mut query = update.into_scoped();
        query.push(" AND t.id = ").push_bind(transaction_id);

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
