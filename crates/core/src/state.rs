// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vacation_audit::{AuditEvent, StateSnapshot};
use vacation_domain::{
    Employee, ExistingVacationRequest, LaborRegime, RequestStatus, VacationPeriod,
    VacationRequest, existing_snapshot,
};

/// Labor regimes, employees and vacation periods known to the system.
///
/// This is separate from the per-period [`State`] and represents global data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directory {
    /// Number of directory changes applied so far.
    pub revision: u64,
    /// All labor regimes.
    pub labor_regimes: Vec<LaborRegime>,
    /// All registered employees.
    pub employees: Vec<Employee>,
    /// All opened vacation periods.
    pub periods: Vec<VacationPeriod>,
}

impl Directory {
    /// Creates an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            revision: 0,
            labor_regimes: Vec::new(),
            employees: Vec::new(),
            periods: Vec::new(),
        }
    }

    /// Looks up a labor regime.
    #[must_use]
    pub fn labor_regime(&self, regime_id: i64) -> Option<&LaborRegime> {
        self.labor_regimes
            .iter()
            .find(|r| r.regime_id == regime_id)
    }

    /// Looks up an employee.
    #[must_use]
    pub fn employee(&self, employee_id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    /// Looks up a vacation period.
    #[must_use]
    pub fn period(&self, period_id: i64) -> Option<&VacationPeriod> {
        self.periods.iter().find(|p| p.period_id == period_id)
    }

    /// All periods of an employee, in the order they were opened.
    #[must_use]
    pub fn periods_of(&self, employee_id: i64) -> Vec<&VacationPeriod> {
        self.periods
            .iter()
            .filter(|p| p.employee_id == employee_id)
            .collect()
    }

    /// Direct reports of a manager.
    #[must_use]
    pub fn reports_of(&self, manager_id: i64) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.reports_to(manager_id))
            .collect()
    }

    pub(crate) fn next_regime_id(&self) -> i64 {
        self.labor_regimes
            .iter()
            .map(|r| r.regime_id)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub(crate) fn next_employee_id(&self) -> i64 {
        self.employees
            .iter()
            .map(|e| e.employee_id)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub(crate) fn next_period_id(&self) -> i64 {
        self.periods
            .iter()
            .map(|p| p.period_id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Converts the directory to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "labor_regimes_count={},employees_count={},periods_count={}",
            self.labor_regimes.len(),
            self.employees.len(),
            self.periods.len()
        ))
    }
}

/// The requests of a single vacation period.
///
/// Every successful transition increments `revision`; persistence refuses a
/// transition computed against an older revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The period this state is scoped to.
    pub period: VacationPeriod,
    /// Number of transitions applied so far.
    pub revision: u64,
    /// All requests of the period.
    pub requests: Vec<VacationRequest>,
}

impl State {
    /// Creates an empty state for a period.
    #[must_use]
    pub const fn new(period: VacationPeriod) -> Self {
        Self {
            period,
            revision: 0,
            requests: Vec::new(),
        }
    }

    /// Looks up a request.
    #[must_use]
    pub fn request(&self, request_id: i64) -> Option<&VacationRequest> {
        self.requests.iter().find(|r| r.request_id == request_id)
    }

    /// Requests awaiting review.
    #[must_use]
    pub fn pending_requests(&self) -> Vec<&VacationRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .collect()
    }

    /// Rule engine view of the period, optionally leaving one request out.
    #[must_use]
    pub fn existing_requests(&self, exclude_request_id: Option<i64>) -> Vec<ExistingVacationRequest> {
        existing_snapshot(&self.requests, exclude_request_id)
    }

    pub(crate) fn next_request_id(&self) -> i64 {
        self.requests
            .iter()
            .map(|r| r.request_id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let count = |status: RequestStatus| -> usize {
            self.requests.iter().filter(|r| r.status == status).count()
        };
        StateSnapshot::new(format!(
            "period_id={},revision={},draft={},pending={},approved={},rejected={}",
            self.period.period_id,
            self.revision,
            count(RequestStatus::Draft),
            count(RequestStatus::Pending),
            count(RequestStatus::Approved),
            count(RequestStatus::Rejected)
        ))
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The request the transition created or changed.
    pub request_id: i64,
}

/// The result of a directory change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryResult {
    /// The new directory after the change.
    pub new_directory: Directory,
    /// The audit event recording this change.
    pub audit_event: AuditEvent,
    /// Identifier of the regime, employee or period that was created.
    pub created_id: i64,
}
