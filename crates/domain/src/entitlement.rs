// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation entitlement rules.
//!
//! This module decides whether a vacation request may be stored, given the
//! other requests of the same vacation period and the period's allotment.
//! It is a pure, deterministic function with no I/O and no clock reads.
//!
//! ## Rules
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. **Overlap**: the candidate must not share a day with any non-rejected
//!    request of the period.
//! 2. **First block**: until the period holds an approved request of at
//!    least [`LONG_BLOCK_MIN_DAYS`] days, the candidate must itself be that
//!    long and must include a weekend day.
//! 3. **Workday budget**: approved workdays plus the candidate's workdays
//!    must not exceed `total_days - floor(total_days / 7) * 2`.
//!
//! ## Concurrency
//!
//! The verdict is only as fresh as the snapshot it was given. Callers must
//! read the snapshot, validate, and store the result without another writer
//! touching the same period in between.

use crate::calendar::{
    CalendarDate, DateRange, count_workdays, includes_weekend, ranges_overlap,
};
use crate::request::{CandidateRequest, ExistingVacationRequest, RequestStatus};
use serde::Serialize;

/// Minimum length, in calendar days, of the first block of a period.
pub const LONG_BLOCK_MIN_DAYS: u32 = 7;

/// Weekend days reserved for every full week of allotment.
pub const WEEKEND_DAYS_PER_WEEK: u32 = 2;

/// A business rule that rejected a vacation request.
///
/// Violations are expected outcomes, shown to the person who made the
/// request. Each variant has its own message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleViolation {
    /// The candidate shares at least one day with another request.
    DateOverlap {
        /// Dates of the first conflicting request found.
        conflicting_range: DateRange,
    },
    /// The first block of the period is shorter than required.
    FirstBlockTooShort {
        /// Required length in calendar days.
        minimum_days: u32,
    },
    /// The first block of the period does not touch a weekend.
    FirstBlockMissingWeekend,
    /// Approved workdays plus the candidate exceed the period budget.
    WorkdayBudgetExceeded {
        /// Maximum workdays the period allows.
        max_workdays: u32,
        /// Weekends that must be spent on vacation.
        required_weekends: u32,
    },
}

impl RuleViolation {
    /// Stable machine-readable name of the rule.
    #[must_use]
    pub const fn rule_name(&self) -> &'static str {
        match self {
            Self::DateOverlap { .. } => "date_overlap",
            Self::FirstBlockTooShort { .. } => "first_block_too_short",
            Self::FirstBlockMissingWeekend => "first_block_missing_weekend",
            Self::WorkdayBudgetExceeded { .. } => "workday_budget_exceeded",
        }
    }
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOverlap { conflicting_range } => {
                write!(
                    f,
                    "The requested dates overlap an existing vacation request from {} to {}. Pick dates that do not collide with it",
                    conflicting_range.start(),
                    conflicting_range.end()
                )
            }
            Self::FirstBlockTooShort { minimum_days } => {
                write!(
                    f,
                    "The first vacation of the period must last at least {minimum_days} consecutive days. Lengthen this request"
                )
            }
            Self::FirstBlockMissingWeekend => {
                write!(
                    f,
                    "The first vacation of the period must include a Saturday or Sunday. Extend it over a weekend"
                )
            }
            Self::WorkdayBudgetExceeded {
                max_workdays,
                required_weekends,
            } => {
                write!(
                    f,
                    "This request exceeds the period limit of {max_workdays} workdays: at least {required_weekends} weekends must be taken as vacation. Shorten the request or include more weekend days"
                )
            }
        }
    }
}

/// Outcome of validating a candidate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationResult {
    /// The request satisfies every rule.
    Accepted,
    /// The request broke the given rule.
    Rejected(RuleViolation),
}

impl ValidationResult {
    /// Whether the request was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Converts the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the violation if the request was rejected.
    pub const fn into_result(self) -> Result<(), RuleViolation> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected(violation) => Err(violation),
        }
    }
}

/// A caller passed data the engine cannot reason about.
///
/// Faults indicate an upstream bug, not a business rule; they must not be
/// shown with rule-violation copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionFault {
    /// The candidate ends before it starts.
    EndBeforeStart {
        /// Declared first day.
        start_date: CalendarDate,
        /// Declared last day.
        end_date: CalendarDate,
    },
}

impl std::fmt::Display for PreconditionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndBeforeStart {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Malformed vacation request: end date {end_date} is before start date {start_date}"
                )
            }
        }
    }
}

impl std::error::Error for PreconditionFault {}

/// Workday budget for a period: `(max_workdays, min_weekend_days)`.
///
/// `min_weekend_days = floor(total_days / 7) * 2`; small periods therefore
/// reserve no weekend days at all.
#[must_use]
pub const fn workday_budget(period_total_days: u32) -> (u32, u32) {
    let min_weekend_days: u32 = (period_total_days / 7) * WEEKEND_DAYS_PER_WEEK;
    (period_total_days - min_weekend_days, min_weekend_days)
}

/// Validates a candidate vacation request.
///
/// `existing_requests` must contain only requests of the candidate's period;
/// rejected entries are ignored. `total_days` of the candidate is trusted as
/// supplied.
///
/// # Arguments
///
/// * `candidate` - The request being created or edited
/// * `existing_requests` - Snapshot of the period's other requests
/// * `period_total_days` - Allotment of the period
///
/// # Returns
///
/// `Accepted`, or `Rejected` with the first rule that failed.
///
/// # Errors
///
/// Returns a `PreconditionFault` if the candidate ends before it starts.
pub fn validate_vacation_request(
    candidate: &CandidateRequest,
    existing_requests: &[ExistingVacationRequest],
    period_total_days: u32,
) -> Result<ValidationResult, PreconditionFault> {
    if candidate.end_date < candidate.start_date {
        return Err(PreconditionFault::EndBeforeStart {
            start_date: candidate.start_date,
            end_date: candidate.end_date,
        });
    }

    // Step 1: overlap against every request still holding its dates
    if let Some(conflict) = existing_requests.iter().find(|existing| {
        existing.status.blocks_dates()
            && ranges_overlap(
                candidate.start_date,
                candidate.end_date,
                existing.start_date,
                existing.end_date,
            )
    }) {
        return Ok(ValidationResult::Rejected(RuleViolation::DateOverlap {
            conflicting_range: DateRange::from_bounds(conflict.start_date, conflict.end_date),
        }));
    }

    let approved = || {
        existing_requests
            .iter()
            .filter(|existing| existing.status == RequestStatus::Approved)
    };

    // Step 2: the first long block gates everything else
    let has_long_block: bool = approved().any(|e| e.total_days >= LONG_BLOCK_MIN_DAYS);
    if !has_long_block {
        if candidate.total_days < LONG_BLOCK_MIN_DAYS {
            return Ok(ValidationResult::Rejected(
                RuleViolation::FirstBlockTooShort {
                    minimum_days: LONG_BLOCK_MIN_DAYS,
                },
            ));
        }
        if !includes_weekend(candidate.start_date, candidate.end_date) {
            return Ok(ValidationResult::Rejected(
                RuleViolation::FirstBlockMissingWeekend,
            ));
        }
    }

    // Step 3: workday budget
    let previous_workdays: u64 = approved()
        .map(|e| u64::from(count_workdays(e.start_date, e.end_date)))
        .sum();
    let current_workdays: u64 =
        u64::from(count_workdays(candidate.start_date, candidate.end_date));
    let (max_workdays, min_weekend_days) = workday_budget(period_total_days);

    if previous_workdays + current_workdays > u64::from(max_workdays) {
        return Ok(ValidationResult::Rejected(
            RuleViolation::WorkdayBudgetExceeded {
                max_workdays,
                required_weekends: min_weekend_days / WEEKEND_DAYS_PER_WEEK,
            },
        ));
    }

    Ok(ValidationResult::Accepted)
}
