use payroll_axum_api::tenancy::domain::model::{
    entities::tenant_context::{TenantContext, TenantContextProvider},
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{actor_id::ActorId, company_id::CompanyId, employer_id::EmployerId},
};
use uuid::Uuid;

fn context_for(employer: i64, actor: &str) -> TenantContext {
    TenantContext::new(
        EmployerId::new(employer).expect("valid employer id"),
        None,
        ActorId::new(actor.to_string()).expect("valid actor"),
    )
}

#[test]
fn resolve_fails_closed_before_establish() {
    let provider = TenantContextProvider::new();

    assert!(matches!(
        provider.resolve(),
        Err(TenancyDomainError::ContextNotSet)
    ));
}

#[test]
fn establish_then_resolve_returns_the_context() {
    let mut provider = TenantContextProvider::new();
    provider
        .establish(context_for(7, "alice"))
        .expect("first establish succeeds");

    let resolved = provider.resolve().expect("context resolved");
    assert_eq!(resolved.employer_id().value(), 7);
    assert_eq!(resolved.actor().value(), "alice");
}

#[test]
fn re_establishing_the_identical_context_is_a_no_op() {
    let mut provider = TenantContextProvider::new();
    provider
        .establish(context_for(7, "alice"))
        .expect("first establish succeeds");

    provider
        .establish(context_for(7, "alice"))
        .expect("identical re-establish is allowed");

    assert_eq!(provider.resolve().expect("resolved").employer_id().value(), 7);
}

#[test]
fn conflicting_re_establish_fails() {
    let mut provider = TenantContextProvider::new();
    provider
        .establish(context_for(7, "alice"))
        .expect("first establish succeeds");

    let result = provider.establish(context_for(8, "alice"));
    assert!(matches!(
        result,
        Err(TenancyDomainError::ContextReassigned)
    ));

    // The original context survives the failed reassignment.
    assert_eq!(provider.resolve().expect("resolved").employer_id().value(), 7);
}

#[test]
fn changing_the_actor_is_also_a_reassignment() {
    let mut provider = TenantContextProvider::new();
    provider
        .establish(context_for(7, "alice"))
        .expect("first establish succeeds");

    assert!(matches!(
        provider.establish(context_for(7, "bob")),
        Err(TenancyDomainError::ContextReassigned)
    ));
}

#[test]
fn providers_are_independent_per_operation() {
    let mut first = TenantContextProvider::new();
    let mut second = TenantContextProvider::new();

    first.establish(context_for(1, "alice")).expect("establish");
    second.establish(context_for(2, "bob")).expect("establish");

    assert_eq!(first.resolve().expect("resolved").employer_id().value(), 1);
    assert_eq!(second.resolve().expect("resolved").employer_id().value(), 2);
}

#[test]
fn sub_scope_is_part_of_the_context_identity() {
    let company = CompanyId::from_uuid(Uuid::now_v7());
    let with_scope = TenantContext::new(
        EmployerId::new(3).expect("valid"),
        Some(company),
        ActorId::new("alice".to_string()).expect("valid"),
    );

    let mut provider = TenantContextProvider::established(with_scope.clone());
    assert!(provider.establish(with_scope).is_ok());
    assert!(matches!(
        provider.establish(context_for(3, "alice")),
        Err(TenancyDomainError::ContextReassigned)
    ));
}

#[test]
fn employer_id_rejects_non_positive_values() {
    assert!(matches!(
        EmployerId::new(0),
        Err(TenancyDomainError::InvalidEmployerId)
    ));
    assert!(matches!(
        EmployerId::new(-4),
        Err(TenancyDomainError::InvalidEmployerId)
    ));
    assert!(EmployerId::new(1).is_ok());
}
