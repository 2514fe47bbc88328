use std::sync::Arc;

use payroll_axum_api::{
    payroll::application::{
        command_services::payroll_command_service_impl::PayrollCommandServiceImpl,
        query_services::payroll_query_service_impl::PayrollQueryServiceImpl,
    },
    tenancy::domain::model::{
        entities::tenant_context::TenantContext,
        value_objects::{actor_id::ActorId, employer_id::EmployerId},
    },
};

use super::fakes::{
    FakeChangeLogRepository, FakePayPeriodRepository, FakePayrollTransactionRepository,
};

pub struct PayrollHarness {
    pub pay_period_repository: Arc<FakePayPeriodRepository>,
    pub transaction_repository: Arc<FakePayrollTransactionRepository>,
    pub change_log: Arc<FakeChangeLogRepository>,
    pub command_service: PayrollCommandServiceImpl,
    pub query_service: PayrollQueryServiceImpl,
}

pub fn context_for(employer: i64, actor: &str) -> TenantContext {
    TenantContext::new(
        EmployerId::new(employer).expect("valid employer id"),
        None,
        ActorId::new(actor.to_string()).expect("valid actor"),
    )
}

pub fn create_payroll_harness() -> PayrollHarness {
    let pay_period_repository = Arc::new(FakePayPeriodRepository::new());
    let transaction_repository = Arc::new(FakePayrollTransactionRepository::new());
    let change_log = Arc::new(FakeChangeLogRepository::new());

    let command_service = PayrollCommandServiceImpl::new(
        pay_period_repository.clone(),
        transaction_repository.clone(),
        change_log.clone(),
    );
    let query_service = PayrollQueryServiceImpl::new(
        pay_period_repository.clone(),
        transaction_repository.clone(),
    );

    PayrollHarness {
        pay_period_repository,
        transaction_repository,
        change_log,
        command_service,
        query_service,
    }
}
