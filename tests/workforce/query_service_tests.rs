use payroll_axum_api::{
    tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError,
    workforce::domain::{
        model::{
            commands::{
                create_company_command::CreateCompanyCommand,
                delete_employee_command::DeleteEmployeeCommand,
            },
            enums::workforce_domain_error::WorkforceDomainError,
            queries::{
                get_company_query::GetCompanyQuery,
                get_employee_query::GetEmployeeQuery,
                list_employees_query::{ListEmployeesQuery, ListEmployeesQueryParts},
            },
        },
        services::{
            workforce_command_service::WorkforceCommandService,
            workforce_query_service::WorkforceQueryService,
        },
    },
};

use crate::support::{context_for, create_employee_command, create_workforce_harness};

fn list_all_parts() -> ListEmployeesQueryParts {
    ListEmployeesQueryParts {
        employment_status: None,
        department_id: None,
        include_deleted: false,
        limit: None,
        offset: None,
    }
}

#[tokio::test]
async fn listing_under_one_tenant_never_returns_another_tenants_rows() {
    let harness = create_workforce_harness();

    harness
        .command_service
        .handle_create_employee(create_employee_command(
            context_for(1, "alice"),
            "EMP-001",
            "john@a.com",
        ))
        .await
        .expect("tenant 1 create succeeds");
    harness
        .command_service
        .handle_create_employee(create_employee_command(
            context_for(2, "eve"),
            "EMP-002",
            "jane@b.com",
        ))
        .await
        .expect("tenant 2 create succeeds");

    let tenant_one = harness
        .query_service
        .handle_list_employees(
            ListEmployeesQuery::new(context_for(1, "alice"), list_all_parts())
                .expect("valid query"),
        )
        .await
        .expect("list succeeds");

    assert_eq!(tenant_one.len(), 1);
    assert_eq!(tenant_one[0].email.value(), "john@a.com");
    assert!(
        tenant_one
            .iter()
            .all(|employee| employee.ownership.employer_id().value() == 1)
    );
}

#[tokio::test]
async fn fetching_another_tenants_employee_by_id_is_not_found() {
    let harness = create_workforce_harness();

    let foreign = harness
        .command_service
        .handle_create_employee(create_employee_command(
            context_for(2, "eve"),
            "EMP-002",
            "jane@b.com",
        ))
        .await
        .expect("tenant 2 create succeeds");

    let result = harness
        .query_service
        .handle_get_employee(
            GetEmployeeQuery::new(context_for(1, "alice"), foreign.id.to_string(), true)
                .expect("valid query"),
        )
        .await;

    // Even the include-deleted path never crosses the tenant boundary.
    assert!(matches!(
        result,
        Err(WorkforceDomainError::Tenancy(
            TenancyDomainError::RecordNotFound
        ))
    ));
}

#[tokio::test]
async fn fetching_another_tenants_company_by_id_is_not_found() {
    let harness = create_workforce_harness();

    let foreign = harness
        .command_service
        .handle_create_company(
            CreateCompanyCommand::new(context_for(2, "eve"), "Foreign Co".to_string(), None)
                .expect("valid command"),
        )
        .await
        .expect("tenant 2 create succeeds");

    let result = harness
        .query_service
        .handle_get_company(
            GetCompanyQuery::new(context_for(1, "alice"), foreign.id.to_string())
                .expect("valid query"),
        )
        .await;

    assert!(matches!(
        result,
        Err(WorkforceDomainError::Tenancy(
            TenancyDomainError::RecordNotFound
        ))
    ));
}

#[tokio::test]
async fn soft_deleted_employee_round_trip() {
    let harness = create_workforce_harness();

    let employee = harness
        .command_service
        .handle_create_employee(create_employee_command(
            context_for(1, "alice"),
            "EMP-001",
            "john@a.com",
        ))
        .await
        .expect("create succeeds");
    let created_at = employee.audit.created_at;

    harness
        .command_service
        .handle_delete_employee(
            DeleteEmployeeCommand::new(context_for(1, "alice"), employee.id.to_string())
                .expect("valid command"),
        )
        .await
        .expect("delete succeeds");

    let visible = harness
        .query_service
        .handle_list_employees(
            ListEmployeesQuery::new(context_for(1, "alice"), list_all_parts())
                .expect("valid query"),
        )
        .await
        .expect("list succeeds");
    assert!(visible.is_empty());

    let including_deleted = harness
        .query_service
        .handle_list_employees(
            ListEmployeesQuery::new(
                context_for(1, "alice"),
                ListEmployeesQueryParts {
                    include_deleted: true,
                    ..list_all_parts()
                },
            )
            .expect("valid query"),
        )
        .await
        .expect("list succeeds");

    assert_eq!(including_deleted.len(), 1);
    assert!(including_deleted[0].audit.is_deleted);
    assert_eq!(including_deleted[0].audit.created_at, created_at);
    assert_eq!(including_deleted[0].email.value(), "john@a.com");
}

#[tokio::test]
async fn status_filter_does_not_widen_the_tenant_boundary() {
    let harness = create_workforce_harness();

    harness
        .command_service
        .handle_create_employee(create_employee_command(
            context_for(2, "eve"),
            "EMP-002",
            "jane@b.com",
        ))
        .await
        .expect("tenant 2 create succeeds");

    let listed = harness
        .query_service
        .handle_list_employees(
            ListEmployeesQuery::new(
                context_for(1, "alice"),
                ListEmployeesQueryParts {
                    employment_status: Some("active".to_string()),
                    ..list_all_parts()
                },
            )
            .expect("valid query"),
        )
        .await
        .expect("list succeeds");

    assert!(listed.is_empty());
}
