use payroll_axum_api::{
    settings::domain::{
        model::{
            commands::{
                upsert_employer_settings_command::{
                    UpsertEmployerSettingsCommand, UpsertEmployerSettingsCommandParts,
                },
                upsert_system_setting_command::UpsertSystemSettingCommand,
            },
            enums::settings_domain_error::SettingsDomainError,
            queries::{
                get_employer_settings_query::GetEmployerSettingsQuery,
                get_system_setting_query::GetSystemSettingQuery,
                list_system_settings_query::ListSystemSettingsQuery,
            },
        },
        services::{
            settings_command_service::SettingsCommandService,
            settings_query_service::SettingsQueryService,
        },
    },
    tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError,
};

use crate::support::{context_for, create_settings_harness};

fn settings_parts(currency: &str) -> UpsertEmployerSettingsCommandParts {
    UpsertEmployerSettingsCommandParts {
        default_pay_period_type: "biweekly".to_string(),
        default_currency: currency.to_string(),
        time_zone: "America/New_York".to_string(),
        fiscal_year_start_month: 1,
        allow_overtime: true,
        overtime_multiplier_percent: 150,
        enable_timesheets: true,
        require_time_approval: false,
    }
}

#[tokio::test]
async fn upserting_settings_twice_preserves_the_creation_pair() {
    let harness = create_settings_harness();

    let first = harness
        .command_service
        .handle_upsert_employer_settings(
            UpsertEmployerSettingsCommand::new(context_for(1, "alice"), settings_parts("usd"))
                .expect("valid command"),
        )
        .await
        .expect("first upsert succeeds");
    assert_eq!(first.default_currency, "USD");
    assert_eq!(first.audit.created_by.value(), "alice");

    let second = harness
        .command_service
        .handle_upsert_employer_settings(
            UpsertEmployerSettingsCommand::new(context_for(1, "bob"), settings_parts("eur"))
                .expect("valid command"),
        )
        .await
        .expect("second upsert succeeds");

    assert_eq!(second.default_currency, "EUR");
    assert_eq!(second.audit.created_by.value(), "alice");
    assert_eq!(second.audit.created_at, first.audit.created_at);
    assert_eq!(
        second
            .audit
            .modified_by
            .as_ref()
            .map(|actor| actor.value()),
        Some("bob")
    );
}

#[tokio::test]
async fn employer_settings_are_invisible_to_other_tenants() {
    let harness = create_settings_harness();

    harness
        .command_service
        .handle_upsert_employer_settings(
            UpsertEmployerSettingsCommand::new(context_for(1, "alice"), settings_parts("usd"))
                .expect("valid command"),
        )
        .await
        .expect("upsert succeeds");

    let other_tenant = harness
        .query_service
        .handle_get_employer_settings(GetEmployerSettingsQuery::new(context_for(2, "eve")))
        .await;

    assert!(matches!(
        other_tenant,
        Err(SettingsDomainError::Tenancy(
            TenancyDomainError::RecordNotFound
        ))
    ));
}

#[tokio::test]
async fn system_settings_are_visible_to_every_tenant() {
    let harness = create_settings_harness();

    harness
        .command_service
        .handle_upsert_system_setting(
            UpsertSystemSettingCommand::new(
                context_for(1, "alice"),
                "platform.maintenance_window".to_string(),
                "sunday 02:00".to_string(),
                Some("weekly window".to_string()),
            )
            .expect("valid command"),
        )
        .await
        .expect("upsert succeeds");

    let from_other_tenant = harness
        .query_service
        .handle_list_system_settings(ListSystemSettingsQuery::new(context_for(2, "eve")))
        .await
        .expect("list succeeds");
    assert_eq!(from_other_tenant.len(), 1);
    assert_eq!(from_other_tenant[0].value, "sunday 02:00");

    let fetched = harness
        .query_service
        .handle_get_system_setting(
            GetSystemSettingQuery::new(
                context_for(2, "eve"),
                "platform.maintenance_window".to_string(),
            )
            .expect("valid query"),
        )
        .await
        .expect("get succeeds");
    assert_eq!(fetched.key.value(), "platform.maintenance_window");
}

#[tokio::test]
async fn system_setting_changes_are_logged_without_a_tenant() {
    let harness = create_settings_harness();

    harness
        .command_service
        .handle_upsert_system_setting(
            UpsertSystemSettingCommand::new(
                context_for(1, "alice"),
                "platform.flag".to_string(),
                "on".to_string(),
                None,
            )
            .expect("valid command"),
        )
        .await
        .expect("upsert succeeds");

    let events = harness.change_log.saved_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].employer_id, None);
    assert_eq!(events[0].entity_name, "system_setting");
}

#[test]
fn setting_keys_are_validated() {
    let bad_key = UpsertSystemSettingCommand::new(
        context_for(1, "alice"),
        "Bad Key!".to_string(),
        "value".to_string(),
        None,
    );
    assert!(matches!(
        bad_key,
        Err(SettingsDomainError::InvalidSettingKey)
    ));
}

#[test]
fn currency_must_be_a_three_letter_code() {
    let result =
        UpsertEmployerSettingsCommand::new(context_for(1, "alice"), settings_parts("dollars"));
    assert!(matches!(result, Err(SettingsDomainError::InvalidCurrency)));
}
