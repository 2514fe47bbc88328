use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    payroll::{
        domain::{
            model::{
                entities::{pay_period::PayPeriod, payroll_transaction::PayrollTransaction},
                enums::payroll_domain_error::PayrollDomainError,
                queries::{
                    get_payroll_transaction_query::GetPayrollTransactionQuery,
                    list_pay_periods_query::ListPayPeriodsQuery,
                    list_payroll_transactions_query::ListPayrollTransactionsQuery,
                },
            },
            services::payroll_query_service::PayrollQueryService,
        },
        infrastructure::persistence::repositories::{
            pay_period_repository::PayPeriodRepository,
            payroll_transaction_repository::{
                ListPayrollTransactionsCriteria, PayrollTransactionRepository,
            },
        },
    },
    tenancy::{
        domain::model::enums::tenancy_domain_error::TenancyDomainError,
        infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
    },
};

pub struct PayrollQueryServiceImpl {
    pay_period_repository: Arc<dyn PayPeriodRepository>,
    transaction_repository: Arc<dyn PayrollTransactionRepository>,
}

impl PayrollQueryServiceImpl {
    pub fn new(
        pay_period_repository: Arc<dyn PayPeriodRepository>,
        transaction_repository: Arc<dyn PayrollTransactionRepository>,
    ) -> Self {
        Self {
            pay_period_repository,
            transaction_repository,
        }
    }
}

fn visibility_for(include_deleted: bool) -> RowVisibility {
    if include_deleted {
        RowVisibility::IncludeDeleted
    } else {
        RowVisibility::ActiveOnly
    }
}

#[async_trait]
impl PayrollQueryService for PayrollQueryServiceImpl {
    async fn handle_list_pay_periods(
        &self,
        query: ListPayPeriodsQuery,
    ) -> Result<Vec<PayPeriod>, PayrollDomainError> {
        let filter = TenantFilter::from_context(query.context());
        self.pay_period_repository
            .list(&filter, RowVisibility::ActiveOnly)
            .await
    }

    async fn handle_list_transactions(
        &self,
        query: ListPayrollTransactionsQuery,
    ) -> Result<Vec<PayrollTransaction>, PayrollDomainError> {
        let filter = TenantFilter::from_context(query.context());

        self.transaction_repository
            .list(
                &filter,
                ListPayrollTransactionsCriteria {
                    pay_period_id: query.pay_period_id(),
                    employee_id: query.employee_id(),
                    limit: query.limit(),
                    offset: query.offset(),
                },
                visibility_for(query.include_deleted()),
            )
            .await
    }

    async fn handle_get_transaction(
        &self,
        query: GetPayrollTransactionQuery,
    ) -> Result<PayrollTransaction, PayrollDomainError> {
        let filter = TenantFilter::from_context(query.context());

        self.transaction_repository
            .find_by_id(
                &filter,
                query.transaction_id(),
                visibility_for(query.include_deleted()),
            )
            .await?
            .ok_or_else(|| TenancyDomainError::RecordNotFound.into())
    }
}
