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

mod balance;
mod calendar;
mod entitlement;
mod error;
mod request;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use balance::{VacationBalance, calculate_vacation_balance};
pub use calendar::{
    CalendarDate, DateRange, Days, count_workdays, days_between, inclusive_day_count,
    includes_weekend, ranges_overlap,
};
pub use entitlement::{
    LONG_BLOCK_MIN_DAYS, PreconditionFault, RuleViolation, ValidationResult,
    WEEKEND_DAYS_PER_WEEK, validate_vacation_request, workday_budget,
};

// Re-export public types
pub use error::DomainError;
pub use request::{
    CandidateRequest, ExistingVacationRequest, RequestStatus, VacationRequest, existing_snapshot,
};
pub use types::{CountryCode, Employee, LaborRegime, VacationPeriod};
pub use validation::{
    validate_country_code, validate_email_unique, validate_employee_fields,
    validate_labor_regime_fields, validate_period_fields, validate_request_within_period,
};
