// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Directory, State, TransitionResult, apply};
use vacation_audit::{Actor, Cause};
use vacation_domain::{CountryCode, DateRange, Employee, LaborRegime, VacationPeriod};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("hr-1"), String::from("hr"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("HR request"))
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).unwrap()
}

/// Regime 1 (PE, 30 days), manager 1, employee 2 reporting to 1.
pub fn create_test_directory() -> Directory {
    let mut directory: Directory = Directory::new();
    directory.labor_regimes.push(LaborRegime::new(
        1,
        String::from("Peru - General"),
        CountryCode::new("PE"),
        30,
    ));
    directory.employees.push(Employee::new(
        1,
        String::from("Maria Lopez"),
        "maria@example.com",
        1,
        None,
    ));
    directory.employees.push(Employee::new(
        2,
        String::from("Ana Diaz"),
        "ana@example.com",
        1,
        Some(1),
    ));
    directory
}

/// Period 1 of employee 2, calendar year 2025, 30 days.
pub fn create_test_period() -> VacationPeriod {
    VacationPeriod::new(
        1,
        2,
        String::from("2025"),
        range("2025-01-01", "2025-12-31"),
        30,
    )
}

pub fn create_test_state() -> State {
    State::new(create_test_period())
}

/// Applies a command with the test actor, panicking on failure.
pub fn apply_ok(state: &State, command: Command) -> State {
    let result: TransitionResult =
        apply(state, command, create_test_actor(), create_test_cause()).unwrap();
    result.new_state
}

/// Creates and approves a request in one go.
pub fn with_approved(state: &State, start: &str, end: &str) -> State {
    let state: State = apply_ok(
        state,
        Command::CreateRequest {
            range: range(start, end),
            reason: None,
            submit: true,
        },
    );
    let request_id: i64 = state.requests.last().unwrap().request_id;
    apply_ok(
        &state,
        Command::ApproveRequest {
            request_id,
            note: None,
        },
    )
}
