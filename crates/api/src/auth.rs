// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use std::str::FromStr;
use tracing::debug;
use vacation_audit::Actor;
use vacation_core::Directory;
use vacation_domain::Employee;

use crate::capabilities::{Action, Grant, Resource, policy};
use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Requests and tracks their own vacation.
    Employee,
    /// Reviews the requests of direct reports, in addition to their own.
    Manager,
    /// Maintains regimes, employees and periods and may review any request.
    Hr,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
            Self::Hr => "hr",
        }
    }

    /// Whether an actor in this role must be linked to an employee record.
    #[must_use]
    pub const fn requires_employee(&self) -> bool {
        matches!(self, Self::Employee | Self::Manager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            "hr" => Ok(Self::Hr),
            _ => Err(AuthError::AuthenticationFailed {
                reason: format!("unknown role '{s}'"),
            }),
        }
    }
}

/// An authenticated actor with an associated role.
///
/// The actor is passed explicitly to every workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The login of this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
    /// The employee record of this actor, if any.
    pub employee_id: Option<i64>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The login of this actor
    /// * `role` - The role assigned to this actor
    /// * `employee_id` - The employee record of this actor, if any
    #[must_use]
    pub const fn new(id: String, role: Role, employee_id: Option<i64>) -> Self {
        Self {
            id,
            role,
            employee_id,
        }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }

    /// Whether `employee` is this actor.
    #[must_use]
    pub fn is_self(&self, employee: &Employee) -> bool {
        self.employee_id == Some(employee.employee_id)
    }

    /// Whether `employee` is this actor or one of their direct reports.
    #[must_use]
    pub fn is_team_member(&self, employee: &Employee) -> bool {
        self.employee_id
            .is_some_and(|id| employee.employee_id == id || employee.reports_to(id))
    }
}

/// Resolves the caller's credentials into an authenticated actor.
///
/// Session handling is out of scope: the caller's login, role and employee
/// record are trusted once they are consistent with the directory.
///
/// # Arguments
///
/// * `directory` - The current directory
/// * `actor_id` - The caller's login
/// * `role` - The caller's role name
/// * `employee_id` - The caller's employee record, if any
///
/// # Errors
///
/// Returns an error if:
/// - The login is blank
/// - The role is unknown
/// - An employee or manager has no employee record
/// - The employee record does not exist
pub fn authenticate(
    directory: &Directory,
    actor_id: &str,
    role: &str,
    employee_id: Option<i64>,
) -> Result<AuthenticatedActor, AuthError> {
    let actor_id: &str = actor_id.trim();
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("missing actor id"),
        });
    }

    let role: Role = role.parse()?;

    match employee_id {
        None if role.requires_employee() => {
            return Err(AuthError::AuthenticationFailed {
                reason: format!("role '{role}' requires an employee id"),
            });
        }
        Some(id) if directory.employee(id).is_none() => {
            return Err(AuthError::AuthenticationFailed {
                reason: format!("employee {id} is not registered"),
            });
        }
        _ => {}
    }

    Ok(AuthenticatedActor::new(
        actor_id.to_string(),
        role,
        employee_id,
    ))
}

/// Authorization service for enforcing the capability policy.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks whether an actor may perform `action` on `resource`.
    ///
    /// `subject` is the employee the resource belongs to. Resources without
    /// an owner (labor regimes, new directory entries) pass `None` and need an
    /// `Any` grant.
    ///
    /// Nobody may approve or reject their own request.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy denies the action for this subject.
    pub fn authorize(
        actor: &AuthenticatedActor,
        resource: Resource,
        action: Action,
        subject: Option<&Employee>,
    ) -> Result<(), AuthError> {
        let grant: Grant = policy(actor.role, resource, action);
        let permitted: bool = match grant {
            Grant::Denied => false,
            Grant::Any => true,
            Grant::Own => subject.is_some_and(|s| actor.is_self(s)),
            Grant::Team => subject.is_some_and(|s| actor.is_team_member(s)),
        };

        if !permitted {
            debug!(
                actor = %actor.id,
                role = %actor.role,
                %resource,
                %action,
                ?grant,
                "Authorization denied"
            );
            return Err(AuthError::Unauthorized {
                action: format!("{action} {resource}"),
                reason: grant.denial_reason(actor.role),
            });
        }

        if action.is_review() && subject.is_some_and(|s| actor.is_self(s)) {
            return Err(AuthError::SelfReview {
                action: format!("{action} {resource}"),
            });
        }

        Ok(())
    }

    /// Whether [`Self::authorize`] would succeed.
    #[must_use]
    pub fn is_authorized(
        actor: &AuthenticatedActor,
        resource: Resource,
        action: Action,
        subject: Option<&Employee>,
    ) -> bool {
        Self::authorize(actor, resource, action, subject).is_ok()
    }
}
