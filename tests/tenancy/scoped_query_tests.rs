use payroll_axum_api::{
    settings::domain::model::entities::system_setting::SystemSetting,
    tenancy::{
        domain::model::{
            entities::{employer::Employer, tenant_context::TenantContext},
            value_objects::{actor_id::ActorId, company_id::CompanyId, employer_id::EmployerId},
        },
        infrastructure::persistence::scoped_query::{
            MaintenanceScope, RowVisibility, ScopedQueryBuilder, ScopedUpdateBuilder, TenantFilter,
        },
    },
    workforce::domain::model::entities::{department::Department, employee::Employee},
};
use uuid::Uuid;

fn filter_for(employer: i64) -> TenantFilter {
    let context = TenantContext::new(
        EmployerId::new(employer).expect("valid employer id"),
        None,
        ActorId::new("alice".to_string()).expect("valid actor"),
    );
    TenantFilter::from_context(&context)
}

fn filter_with_company(employer: i64, company: Uuid) -> TenantFilter {
    let context = TenantContext::new(
        EmployerId::new(employer).expect("valid employer id"),
        Some(CompanyId::from_uuid(company)),
        ActorId::new("alice".to_string()).expect("valid actor"),
    );
    TenantFilter::from_context(&context)
}

#[test]
fn direct_scope_conjoins_tenant_and_soft_delete_predicates() {
    let query = ScopedQueryBuilder::tenant_scoped::<Employee>(
        "t.id",
        &filter_for(1),
        RowVisibility::ActiveOnly,
    );

    assert_eq!(
        query.sql(),
        "SELECT t.id FROM employees AS t WHERE t.employer_id = $1 AND t.is_deleted = FALSE"
    );
}

#[test]
fn include_deleted_relaxes_only_the_soft_delete_predicate() {
    let query = ScopedQueryBuilder::tenant_scoped::<Employee>(
        "t.id",
        &filter_for(1),
        RowVisibility::IncludeDeleted,
    );

    let sql = query.sql();
    assert!(sql.contains("t.employer_id = $1"));
    assert!(!sql.contains("is_deleted = FALSE"));
}

#[test]
fn transitive_scope_resolves_the_root_tenant_through_the_parent() {
    let query = ScopedQueryBuilder::tenant_scoped::<Department>(
        "t.id",
        &filter_for(1),
        RowVisibility::ActiveOnly,
    );

    assert_eq!(
        query.sql(),
        "SELECT t.id FROM departments AS t WHERE EXISTS (SELECT 1 FROM companies AS p \
         WHERE p.id = t.company_id AND p.is_deleted = FALSE AND p.employer_id = $1) \
         AND t.is_deleted = FALSE"
    );
}

#[test]
fn company_sub_scope_narrows_transitive_queries_to_the_parent() {
    let company = Uuid::now_v7();
    let query = ScopedQueryBuilder::tenant_scoped::<Department>(
        "t.id",
        &filter_with_company(1, company),
        RowVisibility::ActiveOnly,
    );

    let sql = query.sql();
    assert!(sql.contains("p.employer_id = $1"));
    assert!(sql.contains("t.company_id = $2"));
}

#[test]
fn employer_rows_are_filtered_to_the_callers_own_id() {
    let query = ScopedQueryBuilder::tenant_scoped::<Employer>(
        "t.id",
        &filter_for(5),
        RowVisibility::ActiveOnly,
    );

    assert_eq!(
        query.sql(),
        "SELECT t.id FROM employers AS t WHERE t.id = $1 AND t.is_deleted = FALSE"
    );
}

#[test]
fn additional_predicates_append_after_the_guard() {
    let mut query = ScopedQueryBuilder::tenant_scoped::<Employee>(
        "t.id",
        &filter_for(1),
        RowVisibility::ActiveOnly,
    );
    query.push(" AND t.email = ").push_bind("john@a.com");

    assert_eq!(
        query.sql(),
        "SELECT t.id FROM employees AS t WHERE t.employer_id = $1 \
         AND t.is_deleted = FALSE AND t.email = $2"
    );
}

#[test]
fn global_records_pass_through_without_a_tenant_predicate() {
    let query =
        ScopedQueryBuilder::global::<SystemSetting>("t.setting_key", RowVisibility::ActiveOnly);

    assert_eq!(
        query.sql(),
        "SELECT t.setting_key FROM system_settings AS t WHERE TRUE AND t.is_deleted = FALSE"
    );
}

#[test]
fn maintenance_scope_matches_all_tenants() {
    let scope = MaintenanceScope::for_maintenance();
    let query = ScopedQueryBuilder::maintenance::<Employee>(
        "t.id",
        &scope,
        RowVisibility::IncludeDeleted,
    );

    assert_eq!(query.sql(), "SELECT t.id FROM employees AS t WHERE TRUE");
}

#[test]
fn scoped_update_seals_the_statement_with_the_tenant_guard() {
    let mut update =
        ScopedUpdateBuilder::tenant_scoped::<Employee>(&filter_for(1), RowVisibility::ActiveOnly);
    update.push("is_deleted = TRUE");

    let mut query = update.into_scoped();
    query.push(" AND t.id = ").push_bind(Uuid::now_v7());

    assert_eq!(
        query.sql(),
        "UPDATE employees AS t SET is_deleted = TRUE WHERE t.employer_id = $1 \
         AND t.is_deleted = FALSE AND t.id = $2"
    );
}

#[test]
fn purge_only_touches_rows_already_soft_deleted() {
    let scope = MaintenanceScope::for_maintenance();
    let query = ScopedQueryBuilder::purge_deleted::<Employee>(&scope);

    assert_eq!(
        query.sql(),
        "DELETE FROM employees AS t WHERE t.is_deleted = TRUE"
    );
}
