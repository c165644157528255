// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use vacation_domain::{DomainError, Employee, VacationPeriod};

pub use apply::{apply, apply_directory, validate_candidate};
pub use command::{Command, DirectoryCommand};
pub use error::CoreError;
pub use state::{Directory, DirectoryResult, State, TransitionResult};

/// Validates that an employee exists in the directory.
///
/// This is a read-only validation that does not create audit events.
///
/// # Errors
///
/// Returns an error if the employee has not been registered.
pub fn validate_employee_exists(
    directory: &Directory,
    employee_id: i64,
) -> Result<&Employee, DomainError> {
    directory
        .employee(employee_id)
        .ok_or(DomainError::EmployeeNotFound(employee_id))
}

/// Validates that a vacation period exists in the directory.
///
/// This is a read-only validation that does not create audit events.
///
/// # Errors
///
/// Returns an error if the period has not been opened.
pub fn validate_period_exists(
    directory: &Directory,
    period_id: i64,
) -> Result<&VacationPeriod, DomainError> {
    directory
        .period(period_id)
        .ok_or(DomainError::PeriodNotFound(period_id))
}
