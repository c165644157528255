// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::VacationPersistence;
use vacation_audit::{Actor, Cause};
use vacation_core::{
    Command, DirectoryCommand, DirectoryResult, State, TransitionResult, apply, apply_directory,
};
use vacation_domain::DateRange;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("hr-1"), String::from("hr"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

pub fn run_directory(persistence: &mut VacationPersistence, command: DirectoryCommand) -> i64 {
    let result: DirectoryResult = apply_directory(
        &persistence.get_directory(),
        command,
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    persistence.persist_directory(&result).unwrap();
    result.created_id
}

/// Store with regime 1, employee 1 and period 1 (2025, 30 days).
pub fn create_seeded_persistence() -> VacationPersistence {
    let mut persistence: VacationPersistence = VacationPersistence::new_in_memory();
    run_directory(
        &mut persistence,
        DirectoryCommand::CreateLaborRegime {
            name: String::from("Peru - General"),
            country: String::from("PE"),
            annual_days: 30,
        },
    );
    run_directory(
        &mut persistence,
        DirectoryCommand::RegisterEmployee {
            name: String::from("Ana Diaz"),
            email: String::from("ana@example.com"),
            labor_regime_id: 1,
            manager_id: None,
        },
    );
    run_directory(
        &mut persistence,
        DirectoryCommand::OpenVacationPeriod {
            employee_id: 1,
            label: String::from("2025"),
            range: DateRange::parse("2025-01-01", "2025-12-31").unwrap(),
            total_days: None,
        },
    );
    persistence
}

pub fn create_draft(state: &State, start: &str, end: &str) -> TransitionResult {
    apply(
        state,
        Command::CreateRequest {
            range: DateRange::parse(start, end).unwrap(),
            reason: None,
            submit: false,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
}
