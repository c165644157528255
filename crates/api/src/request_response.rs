// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings and are parsed once by
//! the workflows.

use serde::{Deserialize, Serialize};

// ========================================================================
// Directory
// ========================================================================

/// API request to create a labor regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLaborRegimeRequest {
    /// Display name.
    pub name: String,
    /// Two-letter country code.
    pub country: String,
    /// Calendar days of vacation per period (1-366).
    pub annual_days: u32,
}

/// API response for a successful labor regime creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLaborRegimeResponse {
    /// The new regime.
    pub regime_id: i64,
    /// The audit event recording the change.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// Labor regime as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborRegimeInfo {
    /// Identifier.
    pub regime_id: i64,
    /// Display name.
    pub name: String,
    /// Upper-case country code.
    pub country: String,
    /// Calendar days of vacation per period.
    pub annual_days: u32,
}

/// API response listing labor regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLaborRegimesResponse {
    /// All labor regimes.
    pub labor_regimes: Vec<LaborRegimeInfo>,
}

/// API request to register an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterEmployeeRequest {
    /// Full name.
    pub name: String,
    /// Work email.
    pub email: String,
    /// Labor regime governing the employee.
    pub labor_regime_id: i64,
    /// Direct manager, if any.
    #[serde(default)]
    pub manager_id: Option<i64>,
}

/// API response for a successful employee registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterEmployeeResponse {
    /// The new employee.
    pub employee_id: i64,
    /// The audit event recording the change.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// Employee as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// Identifier.
    pub employee_id: i64,
    /// Full name.
    pub name: String,
    /// Work email.
    pub email: String,
    /// Labor regime.
    pub labor_regime_id: i64,
    /// Direct manager, if any.
    pub manager_id: Option<i64>,
}

/// API response listing the employees visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    /// Visible employees.
    pub employees: Vec<EmployeeInfo>,
}

/// API request to open a vacation period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenVacationPeriodRequest {
    /// The employee the period belongs to.
    pub employee_id: i64,
    /// Human-readable label.
    pub label: String,
    /// First day (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last day, inclusive (`YYYY-MM-DD`).
    pub end_date: String,
    /// Allotment in calendar days. Defaults to the regime's annual days.
    #[serde(default)]
    pub total_days: Option<u32>,
}

/// API response for a successfully opened period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenVacationPeriodResponse {
    /// The new period.
    pub period_id: i64,
    /// The allotment that was applied.
    pub total_days: u32,
    /// The audit event recording the change.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// Vacation period as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPeriodInfo {
    /// Identifier.
    pub period_id: i64,
    /// Owner.
    pub employee_id: i64,
    /// Human-readable label.
    pub label: String,
    /// First day.
    pub start_date: String,
    /// Last day, inclusive.
    pub end_date: String,
    /// Allotment in calendar days.
    pub total_days: u32,
}

/// API response listing vacation periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVacationPeriodsResponse {
    /// Visible periods.
    pub periods: Vec<VacationPeriodInfo>,
}

// ========================================================================
// Vacation Requests
// ========================================================================

/// API request to create a vacation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVacationRequestRequest {
    /// The period to request vacation in.
    pub period_id: i64,
    /// First day (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last day, inclusive (`YYYY-MM-DD`).
    pub end_date: String,
    /// Optional note from the employee.
    #[serde(default)]
    pub reason: Option<String>,
    /// Submit for review right away instead of saving a draft.
    #[serde(default)]
    pub submit: bool,
}

/// API request to change the dates of a vacation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVacationRequestRequest {
    /// The period of the request.
    pub period_id: i64,
    /// The request to change.
    pub request_id: i64,
    /// New first day (`YYYY-MM-DD`).
    pub start_date: String,
    /// New last day, inclusive (`YYYY-MM-DD`).
    pub end_date: String,
    /// New note from the employee.
    #[serde(default)]
    pub reason: Option<String>,
}

/// API request to submit, or look up, a single vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequestRef {
    /// The period of the request.
    pub period_id: i64,
    /// The request.
    pub request_id: i64,
}

/// API request to approve a vacation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveVacationRequestRequest {
    /// The period of the request.
    pub period_id: i64,
    /// The request to approve.
    pub request_id: i64,
    /// Optional note from the reviewer.
    #[serde(default)]
    pub note: Option<String>,
}

/// API request to reject a vacation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectVacationRequestRequest {
    /// The period of the request.
    pub period_id: i64,
    /// The request to reject.
    pub request_id: i64,
    /// Why the request is rejected.
    pub reason: String,
}

/// API request for a dry-run validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewVacationRequestRequest {
    /// The period to validate against.
    pub period_id: i64,
    /// First day (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last day, inclusive (`YYYY-MM-DD`).
    pub end_date: String,
    /// Request to leave out of the comparison (when previewing an edit).
    #[serde(default)]
    pub exclude_request_id: Option<i64>,
}

/// API response for a dry-run validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewVacationRequestResponse {
    /// Whether the request would be accepted.
    pub accepted: bool,
    /// The rule that rejected it, if any.
    pub rule: Option<String>,
    /// The rule's message, or a confirmation.
    pub message: String,
    /// Calendar days in the range.
    pub total_days: u32,
    /// Workdays in the range.
    pub workdays: u32,
}

/// Represents whether a specific action is permitted.
///
/// Serializes to JSON as true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(Self::from_bool)
    }
}

/// What the caller may do next with a vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCapabilities {
    /// Change dates or reason.
    pub can_update: Capability,
    /// Send the draft for review.
    pub can_submit: Capability,
    /// Approve the pending request.
    pub can_approve: Capability,
    /// Reject the pending request.
    pub can_reject: Capability,
}

/// Vacation request as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequestInfo {
    /// Identifier within the period.
    pub request_id: i64,
    /// The period of the request.
    pub period_id: i64,
    /// The owner of the period.
    pub employee_id: i64,
    /// First day.
    pub start_date: String,
    /// Last day, inclusive.
    pub end_date: String,
    /// Calendar days.
    pub total_days: u32,
    /// Workdays (Monday to Friday).
    pub workdays: u32,
    /// Lifecycle status.
    pub status: String,
    /// Note from the employee.
    pub reason: Option<String>,
    /// Note from the reviewer.
    pub review_note: Option<String>,
    /// What the caller may do next.
    pub capabilities: RequestCapabilities,
}

/// API response for a successful change to a vacation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequestResponse {
    /// The request after the change.
    pub request: VacationRequestInfo,
    /// The audit event recording the change.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API response listing the requests of one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVacationRequestsResponse {
    /// The period.
    pub period_id: i64,
    /// All requests of the period.
    pub requests: Vec<VacationRequestInfo>,
}

/// API response listing requests awaiting the caller's review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPendingRequestsResponse {
    /// Pending requests, grouped by period.
    pub requests: Vec<VacationRequestInfo>,
}

/// API response with the balance of one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationBalanceResponse {
    /// The period.
    pub period_id: i64,
    /// The owner of the period.
    pub employee_id: i64,
    /// The period's label.
    pub label: String,
    /// Allotment in calendar days.
    pub total_days: u32,
    /// Calendar days of approved requests.
    pub approved_days: u32,
    /// Calendar days of pending requests.
    pub pending_days: u32,
    /// Calendar days of draft requests.
    pub draft_days: u32,
    /// Allotment left after approved requests.
    pub remaining_days: i64,
    /// Workdays of approved requests.
    pub approved_workdays: u32,
    /// Workday budget of the period.
    pub max_workdays: u32,
    /// Workdays left in the budget.
    pub remaining_workdays: i64,
    /// Whether an approved block of at least a week exists.
    pub has_long_block: bool,
}

// ========================================================================
// Audit
// ========================================================================

/// Audit event as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    /// Sequential identifier.
    pub event_id: i64,
    /// Login of the actor.
    pub actor_id: String,
    /// Role of the actor.
    pub actor_type: String,
    /// Identifier of the cause.
    pub cause_id: String,
    /// Description of the cause.
    pub cause_description: String,
    /// Name of the action.
    pub action: String,
    /// Details of the action.
    pub details: Option<String>,
    /// Snapshot before the transition.
    pub before: String,
    /// Snapshot after the transition.
    pub after: String,
    /// The affected period, if any.
    pub period_id: Option<i64>,
}

/// API response with the audit timeline of a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTimelineResponse {
    /// The period.
    pub period_id: i64,
    /// Events, oldest first.
    pub events: Vec<AuditEventInfo>,
}

/// API response with the directory-level audit events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryAuditResponse {
    /// Events, oldest first.
    pub events: Vec<AuditEventInfo>,
}
