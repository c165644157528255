// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vacation_persistence::VacationPersistence;

use crate::tests::helpers::{
    EMPLOYEE_ID, MANAGER_ID, OUTSIDER_ID, create_seeded_persistence, create_test_cause,
    create_test_employee, create_test_hr, create_test_manager, employee_request, period_request,
};
use crate::{
    ApiError, CreateLaborRegimeRequest, CreateLaborRegimeResponse, ListEmployeesResponse,
    ListLaborRegimesResponse, ListVacationPeriodsResponse, OpenVacationPeriodRequest,
    OpenVacationPeriodResponse, RegisterEmployeeRequest, RegisterEmployeeResponse,
    create_labor_regime, list_employees, list_labor_regimes, list_vacation_periods,
    open_vacation_period, register_employee,
};

#[test]
fn test_create_labor_regime_assigns_ids_and_events() {
    let mut persistence: VacationPersistence = VacationPersistence::new_in_memory();

    let response: CreateLaborRegimeResponse = create_labor_regime(
        &mut persistence,
        CreateLaborRegimeRequest {
            name: String::from("Peru general regime"),
            country: String::from("pe"),
            annual_days: 30,
        },
        &create_test_hr(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(response.regime_id, 1);
    assert_eq!(response.event_id, 1);

    let listed: ListLaborRegimesResponse =
        list_labor_regimes(&persistence, &create_test_employee()).unwrap();
    assert_eq!(listed.labor_regimes.len(), 1);
    assert_eq!(listed.labor_regimes[0].country, "PE");
}

#[test]
fn test_create_labor_regime_rejects_bad_country() {
    let mut persistence: VacationPersistence = VacationPersistence::new_in_memory();

    let result: Result<CreateLaborRegimeResponse, ApiError> = create_labor_regime(
        &mut persistence,
        CreateLaborRegimeRequest {
            name: String::from("Nowhere"),
            country: String::from("XYZ"),
            annual_days: 30,
        },
        &create_test_hr(),
        create_test_cause(),
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "country"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_register_employee_rejects_duplicate_email() {
    let mut persistence: VacationPersistence = create_seeded_persistence();

    let result: Result<RegisterEmployeeResponse, ApiError> = register_employee(
        &mut persistence,
        employee_request("Ana Again", "ANA@example.com", None),
        &create_test_hr(),
        create_test_cause(),
    );

    match result {
        Err(ApiError::DomainRuleViolation { rule, .. }) => assert_eq!(rule, "unique_email"),
        other => panic!("expected DomainRuleViolation, got {other:?}"),
    }
}

#[test]
fn test_register_employee_requires_known_regime_and_manager() {
    let mut persistence: VacationPersistence = create_seeded_persistence();

    let mut unknown_regime: RegisterEmployeeRequest =
        employee_request("Eve", "eve@example.com", None);
    unknown_regime.labor_regime_id = 42;
    let result: Result<RegisterEmployeeResponse, ApiError> = register_employee(
        &mut persistence,
        unknown_regime,
        &create_test_hr(),
        create_test_cause(),
    );
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));

    let result: Result<RegisterEmployeeResponse, ApiError> = register_employee(
        &mut persistence,
        employee_request("Eve", "eve@example.com", Some(42)),
        &create_test_hr(),
        create_test_cause(),
    );
    match result {
        Err(ApiError::ResourceNotFound { resource_type, .. }) => {
            assert_eq!(resource_type, "Employee");
        }
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_open_period_defaults_to_regime_allotment() {
    let mut persistence: VacationPersistence = create_seeded_persistence();
    let new_employee: RegisterEmployeeResponse = register_employee(
        &mut persistence,
        employee_request("Eve", "eve@example.com", None),
        &create_test_hr(),
        create_test_cause(),
    )
    .unwrap();

    let response: OpenVacationPeriodResponse = open_vacation_period(
        &mut persistence,
        period_request(new_employee.employee_id),
        &create_test_hr(),
        create_test_cause(),
    )
    .unwrap();
    assert_eq!(response.total_days, 30);

    let mut custom: OpenVacationPeriodRequest = period_request(new_employee.employee_id);
    custom.label = String::from("2026");
    custom.start_date = String::from("2026-01-01");
    custom.end_date = String::from("2026-12-31");
    custom.total_days = Some(20);
    let response: OpenVacationPeriodResponse = open_vacation_period(
        &mut persistence,
        custom,
        &create_test_hr(),
        create_test_cause(),
    )
    .unwrap();
    assert_eq!(response.total_days, 20);
}

#[test]
fn test_open_period_rejects_overlap_with_existing_period() {
    let mut persistence: VacationPersistence = create_seeded_persistence();

    let mut overlapping: OpenVacationPeriodRequest = period_request(EMPLOYEE_ID);
    overlapping.start_date = String::from("2025-07-01");
    overlapping.end_date = String::from("2026-06-30");
    let result: Result<OpenVacationPeriodResponse, ApiError> = open_vacation_period(
        &mut persistence,
        overlapping,
        &create_test_hr(),
        create_test_cause(),
    );

    match result {
        Err(ApiError::DomainRuleViolation { rule, .. }) => assert_eq!(rule, "period_overlap"),
        other => panic!("expected DomainRuleViolation, got {other:?}"),
    }
}

#[test]
fn test_open_period_reports_malformed_dates() {
    let mut persistence: VacationPersistence = create_seeded_persistence();

    let mut malformed: OpenVacationPeriodRequest = period_request(EMPLOYEE_ID);
    malformed.start_date = String::from("01/01/2026");
    let result: Result<OpenVacationPeriodResponse, ApiError> = open_vacation_period(
        &mut persistence,
        malformed,
        &create_test_hr(),
        create_test_cause(),
    );
    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "start_date"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let mut signed: OpenVacationPeriodRequest = period_request(EMPLOYEE_ID);
    signed.end_date = String::from("+2026-12-31");
    let result: Result<OpenVacationPeriodResponse, ApiError> = open_vacation_period(
        &mut persistence,
        signed,
        &create_test_hr(),
        create_test_cause(),
    );
    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "end_date"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let mut reversed: OpenVacationPeriodRequest = period_request(EMPLOYEE_ID);
    reversed.start_date = String::from("2026-12-31");
    reversed.end_date = String::from("2026-01-01");
    let result: Result<OpenVacationPeriodResponse, ApiError> = open_vacation_period(
        &mut persistence,
        reversed,
        &create_test_hr(),
        create_test_cause(),
    );
    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "end_date"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_list_employees_is_scoped_by_role() {
    let persistence: VacationPersistence = create_seeded_persistence();

    let own: ListEmployeesResponse = list_employees(&persistence, &create_test_employee());
    assert_eq!(own.employees.len(), 1);
    assert_eq!(own.employees[0].employee_id, EMPLOYEE_ID);

    let team: ListEmployeesResponse = list_employees(&persistence, &create_test_manager());
    let mut ids: Vec<i64> = team.employees.iter().map(|e| e.employee_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![MANAGER_ID, EMPLOYEE_ID]);

    let everyone: ListEmployeesResponse = list_employees(&persistence, &create_test_hr());
    assert_eq!(everyone.employees.len(), 3);
}

#[test]
fn test_list_vacation_periods_filters_by_employee() {
    let persistence: VacationPersistence = create_seeded_persistence();

    let all: ListVacationPeriodsResponse = list_vacation_periods(&persistence, None, &create_test_hr());
    assert_eq!(all.periods.len(), 3);

    let outsider: ListVacationPeriodsResponse =
        list_vacation_periods(&persistence, Some(OUTSIDER_ID), &create_test_hr());
    assert_eq!(outsider.periods.len(), 1);
    assert_eq!(outsider.periods[0].start_date, "2025-01-01");
    assert_eq!(outsider.periods[0].total_days, 30);

    let hidden: ListVacationPeriodsResponse =
        list_vacation_periods(&persistence, Some(OUTSIDER_ID), &create_test_manager());
    assert!(hidden.periods.is_empty());
}
