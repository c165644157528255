// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::CalendarDate;
use crate::request::RequestStatus;

/// Errors that can occur during domain validation.
///
/// Entitlement rule failures are not domain errors: they are reported as
/// [`crate::RuleViolation`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A date range ends before it starts.
    InvalidDateRange {
        /// The first day of the range.
        start: CalendarDate,
        /// The last day of the range.
        end: CalendarDate,
    },
    /// Employee name is empty or invalid.
    InvalidName(String),
    /// Employee email is empty or invalid.
    InvalidEmail(String),
    /// Labor regime country code is invalid.
    InvalidCountryCode(String),
    /// Annual allotment of a labor regime is out of range.
    InvalidAnnualDays {
        /// The invalid value.
        days: u32,
    },
    /// Vacation period label is empty.
    InvalidPeriodLabel(String),
    /// Vacation period allotment exceeds the length of the period.
    InvalidPeriodDays {
        /// The requested allotment.
        total_days: u32,
        /// The number of calendar days in the period.
        period_length: u32,
    },
    /// A request status string could not be parsed.
    InvalidRequestStatus(String),
    /// A rejection was attempted without a reason.
    MissingRejectionReason,
    /// Another employee already uses this email.
    DuplicateEmail(String),
    /// Labor regime does not exist.
    LaborRegimeNotFound(i64),
    /// Employee does not exist.
    EmployeeNotFound(i64),
    /// Manager referenced by an employee does not exist.
    ManagerNotFound(i64),
    /// Vacation period does not exist.
    PeriodNotFound(i64),
    /// The employee already has a period covering some of these dates.
    OverlappingPeriod {
        /// The employee the period was opened for.
        employee_id: i64,
        /// The existing period that overlaps.
        period_id: i64,
    },
    /// Vacation request does not exist in the period.
    RequestNotFound {
        /// The period that was searched.
        period_id: i64,
        /// The missing request.
        request_id: i64,
    },
    /// The requested dates fall outside the vacation period.
    RequestOutsidePeriod {
        /// The requested first day.
        start: CalendarDate,
        /// The requested last day.
        end: CalendarDate,
        /// The first day of the period.
        period_start: CalendarDate,
        /// The last day of the period.
        period_end: CalendarDate,
    },
    /// Requested status change is not allowed from the current status.
    InvalidStatusTransition {
        /// The current status.
        from: RequestStatus,
        /// The requested status.
        to: RequestStatus,
    },
    /// The request can no longer be edited.
    RequestNotEditable {
        /// The request identifier.
        request_id: i64,
        /// The current status.
        status: RequestStatus,
    },
}

impl std::fmt::Display for DomainError {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: end date {end} is before start date {start}")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidCountryCode(msg) => write!(f, "Invalid country code: {msg}"),
            Self::InvalidAnnualDays { days } => {
                write!(
                    f,
                    "Invalid annual vacation days: {days}. Must be between 1 and 366"
                )
            }
            Self::InvalidPeriodLabel(msg) => write!(f, "Invalid period label: {msg}"),
            Self::InvalidPeriodDays {
                total_days,
                period_length,
            } => {
                write!(
                    f,
                    "Invalid period allotment: {total_days} days exceeds the {period_length}-day period"
                )
            }
            Self::InvalidRequestStatus(status) => {
                write!(f, "Invalid vacation request status: '{status}'")
            }
            Self::MissingRejectionReason => {
                write!(f, "A reason is required to reject a vacation request")
            }
            Self::DuplicateEmail(email) => {
                write!(f, "An employee with email '{email}' already exists")
            }
            Self::LaborRegimeNotFound(id) => write!(f, "Labor regime {id} not found"),
            Self::EmployeeNotFound(id) => write!(f, "Employee {id} not found"),
            Self::ManagerNotFound(id) => write!(f, "Manager {id} not found"),
            Self::PeriodNotFound(id) => write!(f, "Vacation period {id} not found"),
            Self::OverlappingPeriod {
                employee_id,
                period_id,
            } => {
                write!(
                    f,
                    "Employee {employee_id} already has vacation period {period_id} covering these dates"
                )
            }
            Self::RequestNotFound {
                period_id,
                request_id,
            } => {
                write!(
                    f,
                    "Vacation request {request_id} not found in period {period_id}"
                )
            }
            Self::RequestOutsidePeriod {
                start,
                end,
                period_start,
                period_end,
            } => {
                write!(
                    f,
                    "Requested dates {start}..{end} fall outside the vacation period {period_start}..{period_end}"
                )
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot move a vacation request from {from} to {to}")
            }
            Self::RequestNotEditable { request_id, status } => {
                write!(
                    f,
                    "Vacation request {request_id} cannot be edited in status {status}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
