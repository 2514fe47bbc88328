use payroll_axum_api::{
    payroll::domain::{
        model::{
            commands::{
                create_payroll_transaction_command::{
                    CreatePayrollTransactionCommand, CreatePayrollTransactionCommandParts,
                },
                delete_payroll_transaction_command::DeletePayrollTransactionCommand,
            },
            queries::{
                get_payroll_transaction_query::GetPayrollTransactionQuery,
                list_payroll_transactions_query::{
                    ListPayrollTransactionsQuery, ListPayrollTransactionsQueryParts,
                },
            },
        },
        services::{
            payroll_command_service::PayrollCommandService,
            payroll_query_service::PayrollQueryService,
        },
    },
    tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError,
};
use payroll_axum_api::payroll::domain::model::enums::payroll_domain_error::PayrollDomainError;
use uuid::Uuid;

use crate::support::{context_for, create_payroll_harness};

fn seeded_transaction_parts(
    employee_id: Uuid,
    pay_period_id: Uuid,
) -> CreatePayrollTransactionCommandParts {
    CreatePayrollTransactionCommandParts {
        employee_id: employee_id.to_string(),
        pay_period_id: pay_period_id.to_string(),
        gross_pay_cents: 250_000,
        net_pay_cents: 200_000,
        regular_minutes: 4800,
        overtime_minutes: 120,
        regular_pay_cents: 240_000,
        overtime_pay_cents: 10_000,
        total_deductions_cents: 20_000,
        total_taxes_cents: 30_000,
        payment_method: "check".to_string(),
        notes: Some("march run".to_string()),
    }
}

#[tokio::test]
async fn listing_is_scoped_to_the_callers_tenant() {
    let harness = create_payroll_harness();

    let employee_one = Uuid::now_v7();
    let period_one = Uuid::now_v7();
    harness
        .transaction_repository
        .register_employee(employee_one, 1);
    harness
        .transaction_repository
        .register_pay_period(period_one, 1);

    let employee_two = Uuid::now_v7();
    let period_two = Uuid::now_v7();
    harness
        .transaction_repository
        .register_employee(employee_two, 2);
    harness
        .transaction_repository
        .register_pay_period(period_two, 2);

    harness
        .command_service
        .handle_create_transaction(
            CreatePayrollTransactionCommand::new(
                context_for(1, "alice"),
                seeded_transaction_parts(employee_one, period_one),
            )
            .expect("valid command"),
        )
        .await
        .expect("tenant 1 create succeeds");
    harness
        .command_service
        .handle_create_transaction(
            CreatePayrollTransactionCommand::new(
                context_for(2, "eve"),
                seeded_transaction_parts(employee_two, period_two),
            )
            .expect("valid command"),
        )
        .await
        .expect("tenant 2 create succeeds");

    let listed = harness
        .query_service
        .handle_list_transactions(
            ListPayrollTransactionsQuery::new(
                context_for(1, "alice"),
                ListPayrollTransactionsQueryParts {
                    pay_period_id: None,
                    employee_id: None,
                    include_deleted: false,
                    limit: None,
                    offset: None,
                },
            )
            .expect("valid query"),
        )
        .await
        .expect("list succeeds");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].employee_id, employee_one);
}

#[tokio::test]
async fn soft_deleted_transaction_stays_retrievable_on_the_explicit_path() {
    let harness = create_payroll_harness();
    let employee = Uuid::now_v7();
    let period = Uuid::now_v7();
    harness.transaction_repository.register_employee(employee, 1);
    harness.transaction_repository.register_pay_period(period, 1);

    let transaction = harness
        .command_service
        .handle_create_transaction(
            CreatePayrollTransactionCommand::new(
                context_for(1, "alice"),
                seeded_transaction_parts(employee, period),
            )
            .expect("valid command"),
        )
        .await
        .expect("create succeeds");

    harness
        .command_service
        .handle_delete_transaction(
            DeletePayrollTransactionCommand::new(
                context_for(1, "alice"),
                transaction.id.to_string(),
            )
            .expect("valid command"),
        )
        .await
        .expect("delete succeeds");

    let normal = harness
        .query_service
        .handle_get_transaction(
            GetPayrollTransactionQuery::new(
                context_for(1, "alice"),
                transaction.id.to_string(),
                false,
            )
            .expect("valid query"),
        )
        .await;
    assert!(matches!(
        normal,
        Err(PayrollDomainError::Tenancy(
            TenancyDomainError::RecordNotFound
        ))
    ));

    let explicit = harness
        .query_service
        .handle_get_transaction(
            GetPayrollTransactionQuery::new(
                context_for(1, "alice"),
                transaction.id.to_string(),
                true,
            )
            .expect("valid query"),
        )
        .await
        .expect("explicit path returns the row");

    assert!(explicit.audit.is_deleted);
    assert_eq!(explicit.notes.as_deref(), Some("march run"));
    assert_eq!(explicit.audit.created_at, transaction.audit.created_at);
}
