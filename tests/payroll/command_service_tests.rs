use chrono::NaiveDate;
use payroll_axum_api::{
    payroll::domain::{
        model::{
            commands::{
                create_pay_period_command::CreatePayPeriodCommand,
                create_payroll_transaction_command::{
                    CreatePayrollTransactionCommand, CreatePayrollTransactionCommandParts,
                },
                update_payroll_transaction_command::{
                    UpdatePayrollTransactionCommand, UpdatePayrollTransactionCommandParts,
                },
            },
            enums::payroll_domain_error::PayrollDomainError,
        },
        services::payroll_command_service::PayrollCommandService,
    },
    tenancy::domain::model::enums::{
        record_change_action::RecordChangeAction, tenancy_domain_error::TenancyDomainError,
    },
};
use uuid::Uuid;

use crate::support::{context_for, create_payroll_harness};

fn transaction_parts(employee_id: Uuid, pay_period_id: Uuid) -> CreatePayrollTransactionCommandParts {
    CreatePayrollTransactionCommandParts {
        employee_id: employee_id.to_string(),
        pay_period_id: pay_period_id.to_string(),
        gross_pay_cents: 500_000,
        net_pay_cents: 380_000,
        regular_minutes: 9600,
        overtime_minutes: 0,
        regular_pay_cents: 500_000,
        overtime_pay_cents: 0,
        total_deductions_cents: 50_000,
        total_taxes_cents: 70_000,
        payment_method: "direct_deposit".to_string(),
        notes: None,
    }
}

#[tokio::test]
async fn create_transaction_stamps_tenant_and_audits() {
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
                transaction_parts(employee, period),
            )
            .expect("valid command"),
        )
        .await
        .expect("create succeeds");

    assert_eq!(transaction.ownership.employer_id().value(), 1);
    assert_eq!(transaction.audit.created_by.value(), "alice");
    assert_eq!(transaction.gross_pay.value(), 500_000);

    let events = harness.change_log.saved_events();
    assert_eq!(events.len(), 1);
    assert!(events[0].success);
    assert!(matches!(events[0].action, RecordChangeAction::Created));
}

#[tokio::test]
async fn transaction_for_foreign_employee_is_denied() {
    let harness = create_payroll_harness();
    let foreign_employee = Uuid::now_v7();
    let period = Uuid::now_v7();
    harness
        .transaction_repository
        .register_employee(foreign_employee, 2);
    harness.transaction_repository.register_pay_period(period, 1);

    let result = harness
        .command_service
        .handle_create_transaction(
            CreatePayrollTransactionCommand::new(
                context_for(1, "alice"),
                transaction_parts(foreign_employee, period),
            )
            .expect("valid command"),
        )
        .await;

    assert!(matches!(
        result,
        Err(PayrollDomainError::Tenancy(
            TenancyDomainError::AccessDenied
        ))
    ));

    let events = harness.change_log.saved_events();
    assert_eq!(events.len(), 1);
    assert!(!events[0].success);
}

#[tokio::test]
async fn stale_transaction_update_conflicts() {
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
                transaction_parts(employee, period),
            )
            .expect("valid command"),
        )
        .await
        .expect("create succeeds");

    let update_parts = |status: &str| UpdatePayrollTransactionCommandParts {
        transaction_id: transaction.id.to_string(),
        expected_row_version: 0,
        payment_status: Some(status.to_string()),
        payment_date: Some(NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")),
        notes: None,
    };

    harness
        .command_service
        .handle_update_transaction(
            UpdatePayrollTransactionCommand::new(context_for(1, "alice"), update_parts("paid"))
                .expect("valid command"),
        )
        .await
        .expect("first writer wins");

    let second = harness
        .command_service
        .handle_update_transaction(
            UpdatePayrollTransactionCommand::new(context_for(1, "bob"), update_parts("voided"))
                .expect("valid command"),
        )
        .await;

    assert!(matches!(
        second,
        Err(PayrollDomainError::Tenancy(
            TenancyDomainError::ConcurrencyConflict
        ))
    ));
}

#[test]
fn pay_period_end_must_follow_its_start() {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let result = CreatePayPeriodCommand::new(context_for(1, "alice"), start, start, start);

    assert!(matches!(
        result,
        Err(PayrollDomainError::InvalidPayPeriodRange)
    ));
}

#[test]
fn negative_amounts_are_rejected() {
    let mut parts = transaction_parts(Uuid::now_v7(), Uuid::now_v7());
    parts.gross_pay_cents = -1;

    let result = CreatePayrollTransactionCommand::new(context_for(1, "alice"), parts);
    assert!(matches!(result, Err(PayrollDomainError::InvalidAmount)));
}
