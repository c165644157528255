// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use vacation_audit::Cause;
use vacation_persistence::VacationPersistence;

use crate::{
    AuthenticatedActor, CreateLaborRegimeRequest, CreateVacationRequestRequest,
    OpenVacationPeriodRequest, RegisterEmployeeRequest, Role, VacationRequestResponse,
    create_labor_regime, create_vacation_request, open_vacation_period, register_employee,
};

/// Employee 1: manages Ana, owns period 3.
pub const MANAGER_ID: i64 = 1;
/// Employee 2: reports to Maria, owns period 1.
pub const EMPLOYEE_ID: i64 = 2;
/// Employee 3: no manager, owns period 2.
pub const OUTSIDER_ID: i64 = 3;

pub const EMPLOYEE_PERIOD: i64 = 1;
pub const OUTSIDER_PERIOD: i64 = 2;
pub const MANAGER_PERIOD: i64 = 3;

pub fn create_test_hr() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("hr-1"), Role::Hr, None)
}

pub fn create_test_manager() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("maria"), Role::Manager, Some(MANAGER_ID))
}

pub fn create_test_employee() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("ana"), Role::Employee, Some(EMPLOYEE_ID))
}

pub fn create_test_outsider() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("luis"), Role::Employee, Some(OUTSIDER_ID))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn employee_request(name: &str, email: &str, manager_id: Option<i64>) -> RegisterEmployeeRequest {
    RegisterEmployeeRequest {
        name: name.to_string(),
        email: email.to_string(),
        labor_regime_id: 1,
        manager_id,
    }
}

pub fn period_request(employee_id: i64) -> OpenVacationPeriodRequest {
    OpenVacationPeriodRequest {
        employee_id,
        label: String::from("2025"),
        start_date: String::from("2025-01-01"),
        end_date: String::from("2025-12-31"),
        total_days: None,
    }
}

/// One 30-day regime, three employees and one 2025 period each.
pub fn create_seeded_persistence() -> VacationPersistence {
    let mut persistence: VacationPersistence = VacationPersistence::new_in_memory();
    let hr: AuthenticatedActor = create_test_hr();

    create_labor_regime(
        &mut persistence,
        CreateLaborRegimeRequest {
            name: String::from("Peru general regime"),
            country: String::from("pe"),
            annual_days: 30,
        },
        &hr,
        create_test_cause(),
    )
    .unwrap();

    for request in [
        employee_request("Maria Manager", "maria@example.com", None),
        employee_request("Ana Employee", "ana@example.com", Some(MANAGER_ID)),
        employee_request("Luis Outsider", "luis@example.com", None),
    ] {
        register_employee(&mut persistence, request, &hr, create_test_cause()).unwrap();
    }

    for employee_id in [EMPLOYEE_ID, OUTSIDER_ID, MANAGER_ID] {
        open_vacation_period(
            &mut persistence,
            period_request(employee_id),
            &hr,
            create_test_cause(),
        )
        .unwrap();
    }

    persistence
}

pub fn vacation_request(
    period_id: i64,
    start_date: &str,
    end_date: &str,
    submit: bool,
) -> CreateVacationRequestRequest {
    CreateVacationRequestRequest {
        period_id,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        reason: Some(String::from("Family trip")),
        submit,
    }
}

/// Creates a request for the period owner.
pub fn create_request_as(
    persistence: &mut VacationPersistence,
    actor: &AuthenticatedActor,
    request: CreateVacationRequestRequest,
) -> VacationRequestResponse {
    create_vacation_request(persistence, request, actor, create_test_cause()).unwrap()
}
