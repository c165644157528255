// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed permission policy and capability computation.
//!
//! Permissions are a `(Resource, Action)` pair looked up per role in a
//! static table. Capabilities derived from the same table tell clients which
//! actions are available without replacing the backend checks.

use vacation_domain::{Employee, RequestStatus, VacationRequest};

use crate::auth::{AuthenticatedActor, AuthorizationService, Role};
use crate::request_response::{Capability, RequestCapabilities};

/// Something an actor can act upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// A country labor regime.
    LaborRegime,
    /// An employee record.
    Employee,
    /// A vacation period of an employee.
    VacationPeriod,
    /// A vacation request within a period.
    VacationRequest,
    /// The audit trail.
    AuditLog,
}

impl Resource {
    /// Converts this resource to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LaborRegime => "labor_regime",
            Self::Employee => "employee",
            Self::VacationPeriod => "vacation_period",
            Self::VacationRequest => "vacation_request",
            Self::AuditLog => "audit_log",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an actor wants to do with a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Read.
    View,
    /// Create a new instance.
    Create,
    /// Change an existing instance.
    Update,
    /// Send a draft for review.
    Submit,
    /// Approve a pending request.
    Approve,
    /// Reject a pending request.
    Reject,
}

impl Action {
    /// Converts this action to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Update => "update",
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// Whether this action is a review decision.
    #[must_use]
    pub const fn is_review(&self) -> bool {
        matches!(self, Self::Approve | Self::Reject)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How far a permission reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// Never permitted.
    Denied,
    /// Permitted on the actor's own records.
    Own,
    /// Permitted on the actor's own records and those of direct reports.
    Team,
    /// Permitted on every record.
    Any,
}

impl Grant {
    /// Explains why an action under this grant was refused.
    #[must_use]
    pub fn denial_reason(self, role: Role) -> String {
        match self {
            Self::Denied => format!("the {role} role may never do this"),
            Self::Own => format!("the {role} role may only do this on their own records"),
            Self::Team | Self::Any => {
                format!("the {role} role may only do this for themselves and direct reports")
            }
        }
    }
}

/// The permission table.
#[must_use]
pub const fn policy(role: Role, resource: Resource, action: Action) -> Grant {
    match (role, resource, action) {
        (Role::Hr, _, _) | (_, Resource::LaborRegime, Action::View) => Grant::Any,
        (
            Role::Employee,
            Resource::Employee
            | Resource::VacationPeriod
            | Resource::VacationRequest
            | Resource::AuditLog,
            Action::View,
        )
        | (
            Role::Employee | Role::Manager,
            Resource::VacationRequest,
            Action::Create | Action::Update | Action::Submit,
        ) => Grant::Own,
        (
            Role::Manager,
            Resource::Employee
            | Resource::VacationPeriod
            | Resource::VacationRequest
            | Resource::AuditLog,
            Action::View,
        )
        | (Role::Manager, Resource::VacationRequest, Action::Approve | Action::Reject) => {
            Grant::Team
        }
        _ => Grant::Denied,
    }
}

/// Computes what an actor may do with one vacation request.
///
/// Combines the policy with the request's lifecycle status.
#[must_use]
pub fn compute_request_capabilities(
    actor: &AuthenticatedActor,
    owner: &Employee,
    request: &VacationRequest,
) -> RequestCapabilities {
    let allowed = |action: Action, status_ok: bool| -> Capability {
        Capability::from_bool(
            status_ok
                && AuthorizationService::is_authorized(
                    actor,
                    Resource::VacationRequest,
                    action,
                    Some(owner),
                ),
        )
    };

    RequestCapabilities {
        can_update: allowed(Action::Update, request.status.is_editable()),
        can_submit: allowed(Action::Submit, request.status == RequestStatus::Draft),
        can_approve: allowed(Action::Approve, request.status == RequestStatus::Pending),
        can_reject: allowed(Action::Reject, request.status == RequestStatus::Pending),
    }
}
