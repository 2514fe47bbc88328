use payroll_axum_api::tenancy::domain::{
    model::{
        entities::tenant_context::{TenantContext, TenantContextProvider},
        enums::tenancy_domain_error::TenancyDomainError,
        value_objects::{actor_id::ActorId, employer_id::EmployerId},
    },
    services::write_interceptor::{WriteInterceptor, resolve_ownership},
};

fn context_for(employer: i64, actor: &str) -> TenantContext {
    TenantContext::new(
        EmployerId::new(employer).expect("valid employer id"),
        None,
        ActorId::new(actor.to_string()).expect("valid actor"),
    )
}

#[test]
fn before_insert_stamps_creation_and_modification_pairs() {
    let interceptor = WriteInterceptor::from_context(&context_for(1, "alice"));
    let audit = interceptor.before_insert();

    assert_eq!(audit.created_by.value(), "alice");
    assert_eq!(
        audit.modified_by.as_ref().map(|actor| actor.value()),
        Some("alice")
    );
    assert_eq!(audit.modified_at, Some(audit.created_at));
    assert!(!audit.is_deleted);
}

#[test]
fn before_update_never_touches_the_creation_pair() {
    let creator = WriteInterceptor::from_context(&context_for(1, "alice"));
    let mut audit = creator.before_insert();
    let created_at = audit.created_at;

    let editor = WriteInterceptor::from_context(&context_for(1, "bob"));
    editor.before_update(&mut audit);
    editor.before_update(&mut audit);

    assert_eq!(audit.created_by.value(), "alice");
    assert_eq!(audit.created_at, created_at);
    assert_eq!(
        audit.modified_by.as_ref().map(|actor| actor.value()),
        Some("bob")
    );
}

#[test]
fn soft_delete_flips_the_flag_and_stamps_the_update_pair() {
    let creator = WriteInterceptor::from_context(&context_for(1, "alice"));
    let mut audit = creator.before_insert();

    let deleter = WriteInterceptor::from_context(&context_for(1, "bob"));
    deleter.soft_delete(&mut audit);

    assert!(audit.is_deleted);
    assert_eq!(audit.created_by.value(), "alice");
    assert_eq!(
        audit.modified_by.as_ref().map(|actor| actor.value()),
        Some("bob")
    );
}

#[test]
fn system_interceptor_is_visible_as_the_system_actor() {
    let interceptor = WriteInterceptor::for_system();
    let audit = interceptor.before_insert();

    assert!(audit.created_by.is_system());
    assert_eq!(audit.created_by.value(), "system");
}

#[test]
fn ownership_is_stamped_from_the_established_context() {
    let provider = TenantContextProvider::established(context_for(9, "alice"));
    let ownership = resolve_ownership(None, &provider).expect("ownership resolved");

    assert_eq!(ownership.employer_id().value(), 9);
}

#[test]
fn preset_matching_the_context_is_accepted() {
    let provider = TenantContextProvider::established(context_for(9, "alice"));
    let preset = EmployerId::new(9).expect("valid");

    let ownership = resolve_ownership(Some(preset), &provider).expect("ownership resolved");
    assert_eq!(ownership.employer_id().value(), 9);
}

#[test]
fn preset_conflicting_with_the_context_is_denied() {
    let provider = TenantContextProvider::established(context_for(9, "alice"));
    let foreign = EmployerId::new(4).expect("valid");

    assert!(matches!(
        resolve_ownership(Some(foreign), &provider),
        Err(TenancyDomainError::AccessDenied)
    ));
}

#[test]
fn seeding_without_a_context_requires_an_explicit_preset() {
    let provider = TenantContextProvider::new();

    let preset = EmployerId::new(2).expect("valid");
    let ownership =
        resolve_ownership(Some(preset), &provider).expect("preset honored without context");
    assert_eq!(ownership.employer_id().value(), 2);

    assert!(matches!(
        resolve_ownership(None, &provider),
        Err(TenancyDomainError::MissingTenant)
    ));
}
