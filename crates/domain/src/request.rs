// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation requests and their lifecycle.

use crate::calendar::{CalendarDate, DateRange};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Saved by the employee, not yet sent for review.
    #[default]
    Draft,
    /// Submitted and awaiting a manager or HR decision.
    Pending,
    /// Approved. Counts against the workday budget.
    Approved,
    /// Rejected. Ignored by every entitlement rule.
    Rejected,
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RequestStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Pending
    /// - Pending → Approved
    /// - Pending → Rejected
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Pending)
                | (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
        )
    }

    /// Whether the request's dates and reason may still be changed.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Draft | Self::Pending)
    }

    /// Whether the request occupies its dates for overlap purposes.
    #[must_use]
    pub const fn blocks_dates(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// A request already recorded for the period, as seen by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingVacationRequest {
    /// First day of vacation.
    pub start_date: CalendarDate,
    /// Last day of vacation (inclusive).
    pub end_date: CalendarDate,
    /// Calendar days in the range.
    pub total_days: u32,
    /// Current lifecycle status.
    pub status: RequestStatus,
}

/// A request being validated before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRequest {
    /// First day of vacation.
    pub start_date: CalendarDate,
    /// Last day of vacation (inclusive).
    pub end_date: CalendarDate,
    /// Calendar days in the range, as declared by the caller.
    pub total_days: u32,
}

impl CandidateRequest {
    /// Builds a candidate whose day count is derived from the range.
    #[must_use]
    pub fn from_range(range: &DateRange) -> Self {
        Self {
            start_date: range.start(),
            end_date: range.end(),
            total_days: range.day_count(),
        }
    }
}

/// A stored vacation request within a single vacation period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationRequest {
    /// Identifier, unique within the period.
    pub request_id: i64,
    /// Requested dates.
    pub range: DateRange,
    /// Calendar days in `range`.
    pub total_days: u32,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Optional note from the employee.
    pub reason: Option<String>,
    /// Optional note from the reviewer (approval note or rejection reason).
    pub review_note: Option<String>,
}

impl VacationRequest {
    /// Creates a new request with its day count derived from the range.
    #[must_use]
    pub fn new(
        request_id: i64,
        range: DateRange,
        status: RequestStatus,
        reason: Option<String>,
    ) -> Self {
        Self {
            request_id,
            range,
            total_days: range.day_count(),
            status,
            reason,
            review_note: None,
        }
    }

    /// Snapshot of this request for the rule engine.
    #[must_use]
    pub const fn as_existing(&self) -> ExistingVacationRequest {
        ExistingVacationRequest {
            start_date: self.range.start(),
            end_date: self.range.end(),
            total_days: self.total_days,
            status: self.status,
        }
    }

    /// Number of workdays this request consumes.
    #[must_use]
    pub fn workdays(&self) -> u32 {
        self.range.workdays()
    }
}

/// Builds the engine snapshot from stored requests, optionally leaving one out.
///
/// The update workflow excludes the request being edited so it is never
/// compared against itself.
#[must_use]
pub fn existing_snapshot(
    requests: &[VacationRequest],
    exclude_request_id: Option<i64>,
) -> Vec<ExistingVacationRequest> {
    requests
        .iter()
        .filter(|r| Some(r.request_id) != exclude_request_id)
        .map(VacationRequest::as_existing)
        .collect()
}
