// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vacation_domain::DateRange;

/// A change to the directory of labor regimes, employees and periods.
///
/// Directory commands are applied with [`crate::apply_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCommand {
    /// Create a new labor regime.
    CreateLaborRegime {
        /// Display name.
        name: String,
        /// Two-letter country code.
        country: String,
        /// Calendar days of vacation per period.
        annual_days: u32,
    },
    /// Register a new employee.
    RegisterEmployee {
        /// Full name.
        name: String,
        /// Work email.
        email: String,
        /// Labor regime governing the employee.
        labor_regime_id: i64,
        /// Direct manager, if any.
        manager_id: Option<i64>,
    },
    /// Open a vacation period for an employee.
    OpenVacationPeriod {
        /// The employee the period belongs to.
        employee_id: i64,
        /// Human-readable label.
        label: String,
        /// Dates the period covers.
        range: DateRange,
        /// Allotment in calendar days. Defaults to the regime's `annual_days`.
        total_days: Option<u32>,
    },
}

/// A command against the requests of a single vacation period.
///
/// Commands are data only; [`crate::apply`] turns them into transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new request, optionally submitting it right away.
    CreateRequest {
        /// Requested dates.
        range: DateRange,
        /// Optional note from the employee.
        reason: Option<String>,
        /// Store as `Pending` instead of `Draft`.
        submit: bool,
    },
    /// Change the dates or reason of an editable request.
    UpdateRequest {
        /// The request to edit.
        request_id: i64,
        /// New dates.
        range: DateRange,
        /// New note from the employee.
        reason: Option<String>,
    },
    /// Send a draft for review.
    SubmitRequest {
        /// The request to submit.
        request_id: i64,
    },
    /// Approve a pending request.
    ApproveRequest {
        /// The request to approve.
        request_id: i64,
        /// Optional note from the reviewer.
        note: Option<String>,
    },
    /// Reject a pending request.
    RejectRequest {
        /// The request to reject.
        request_id: i64,
        /// Why the request was rejected. Must not be blank.
        reason: String,
    },
}

impl Command {
    /// The name recorded in the audit trail for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateRequest { .. } => "CreateRequest",
            Self::UpdateRequest { .. } => "UpdateRequest",
            Self::SubmitRequest { .. } => "SubmitRequest",
            Self::ApproveRequest { .. } => "ApproveRequest",
            Self::RejectRequest { .. } => "RejectRequest",
        }
    }
}
