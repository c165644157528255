// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::DateRange;
use crate::error::DomainError;
use crate::types::{CountryCode, Employee, LaborRegime, VacationPeriod};

/// Upper bound for a labor regime's annual allotment.
const MAX_ANNUAL_DAYS: u32 = 366;

/// Validates that an employee's email is not already taken.
///
/// Comparison is case-insensitive.
///
/// # Arguments
///
/// * `email` - The email to check
/// * `existing_employees` - All employees currently registered
///
/// # Errors
///
/// Returns an error if another employee already uses the email.
pub fn validate_email_unique(
    email: &str,
    existing_employees: &[Employee],
) -> Result<(), DomainError> {
    let normalized: String = email.trim().to_lowercase();
    if existing_employees.iter().any(|e| e.email == normalized) {
        return Err(DomainError::DuplicateEmail(normalized));
    }
    Ok(())
}

/// Validates the fields of an employee.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The email is not of the form `local@domain`
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    if employee.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    match employee.email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(DomainError::InvalidEmail(format!(
            "'{}' is not a valid email address",
            employee.email
        ))),
    }
}

/// Validates a country code: exactly two ASCII letters.
///
/// # Errors
///
/// Returns an error if the code is not two ASCII letters.
pub fn validate_country_code(country: &CountryCode) -> Result<(), DomainError> {
    let value: &str = country.value();
    if value.len() != 2 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidCountryCode(format!(
            "'{value}' must be exactly 2 letters"
        )));
    }
    Ok(())
}

/// Validates the fields of a labor regime.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The country code is not two letters
/// - The annual allotment is 0 or greater than 366
pub fn validate_labor_regime_fields(regime: &LaborRegime) -> Result<(), DomainError> {
    if regime.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Labor regime name cannot be empty",
        )));
    }

    validate_country_code(&regime.country)?;

    if regime.annual_days == 0 || regime.annual_days > MAX_ANNUAL_DAYS {
        return Err(DomainError::InvalidAnnualDays {
            days: regime.annual_days,
        });
    }

    Ok(())
}

/// Validates the fields of a vacation period.
///
/// # Errors
///
/// Returns an error if:
/// - The label is empty
/// - The allotment exceeds the number of days in the period
pub fn validate_period_fields(period: &VacationPeriod) -> Result<(), DomainError> {
    if period.label.trim().is_empty() {
        return Err(DomainError::InvalidPeriodLabel(String::from(
            "Label cannot be empty",
        )));
    }

    let period_length: u32 = period.range.day_count();
    if period.total_days > period_length {
        return Err(DomainError::InvalidPeriodDays {
            total_days: period.total_days,
            period_length,
        });
    }

    Ok(())
}

/// Validates that requested dates fall inside the vacation period.
///
/// # Errors
///
/// Returns an error if any requested day lies outside the period.
pub fn validate_request_within_period(
    range: &DateRange,
    period: &VacationPeriod,
) -> Result<(), DomainError> {
    if !period.range.contains(range) {
        return Err(DomainError::RequestOutsidePeriod {
            start: range.start(),
            end: range.end(),
            period_start: period.range.start(),
            period_end: period.range.end(),
        });
    }
    Ok(())
}
