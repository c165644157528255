// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use vacation_core::CoreError;
use vacation_domain::{DomainError, PreconditionFault, RuleViolation};
use vacation_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The policy does not grant the action.
    #[error("Unauthorized to {action}: {reason}")]
    Unauthorized {
        /// The action that was attempted (e.g., "approve `vacation_request`").
        action: String,
        /// Why the policy refused it.
        reason: String,
    },
    /// An actor tried to review their own request.
    #[error("Unauthorized to {action}: nobody may review their own vacation request")]
    SelfReview {
        /// The action that was attempted.
        action: String,
    },
}

/// Malformed input caught before any domain logic runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// A required field is blank.
    #[error("Field '{field}' is required")]
    MissingField {
        /// The blank field.
        field: &'static str,
    },
    /// A date field is not `YYYY-MM-DD`.
    #[error("Field '{field}' must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate {
        /// The offending field.
        field: &'static str,
        /// The value received.
        value: String,
    },
}

impl InputError {
    /// The field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidDate { field, .. } => *field,
        }
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// Why it was refused.
        reason: String,
    },
    /// A domain or entitlement rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The data changed while the request was being processed.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, reason } => {
                write!(f, "Unauthorized to {action}: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized { action, reason } => Self::Unauthorized { action, reason },
            AuthError::SelfReview { action } => Self::Unauthorized {
                action,
                reason: String::from("nobody may review their own vacation request"),
            },
        }
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

fn invalid_input(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

fn rule_violation(rule: &str, err: &DomainError) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: rule.to_string(),
        message: err.to_string(),
    }
}

fn not_found(resource_type: &str, err: &DomainError) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::DateParseError { .. } => invalid_input("date", &err),
        DomainError::InvalidDateRange { .. } => invalid_input("end_date", &err),
        DomainError::InvalidName(_) => invalid_input("name", &err),
        DomainError::InvalidEmail(_) => invalid_input("email", &err),
        DomainError::InvalidCountryCode(_) => invalid_input("country", &err),
        DomainError::InvalidAnnualDays { .. } => invalid_input("annual_days", &err),
        DomainError::InvalidPeriodLabel(_) => invalid_input("label", &err),
        DomainError::InvalidPeriodDays { .. } => invalid_input("total_days", &err),
        DomainError::InvalidRequestStatus(_) => invalid_input("status", &err),
        DomainError::MissingRejectionReason => invalid_input("reason", &err),
        DomainError::DuplicateEmail(_) => rule_violation("unique_email", &err),
        DomainError::OverlappingPeriod { .. } => rule_violation("period_overlap", &err),
        DomainError::RequestOutsidePeriod { .. } => {
            rule_violation("request_within_period", &err)
        }
        DomainError::InvalidStatusTransition { .. } => rule_violation("status_transition", &err),
        DomainError::RequestNotEditable { .. } => rule_violation("request_editable", &err),
        DomainError::LaborRegimeNotFound(_) => not_found("Labor regime", &err),
        DomainError::EmployeeNotFound(_) | DomainError::ManagerNotFound(_) => {
            not_found("Employee", &err)
        }
        DomainError::PeriodNotFound(_) => not_found("Vacation period", &err),
        DomainError::RequestNotFound { .. } => not_found("Vacation request", &err),
    }
}

/// Translates an entitlement rule violation into an API error.
///
/// Every rule keeps its own name and message.
#[must_use]
pub fn translate_rule_violation(violation: RuleViolation) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: violation.rule_name().to_string(),
        message: violation.to_string(),
    }
}

/// Translates a precondition fault into an API error.
///
/// Faults are programming errors and never reuse rule-violation copy.
#[must_use]
pub fn translate_precondition_fault(fault: PreconditionFault) -> ApiError {
    ApiError::Internal {
        message: fault.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::RuleViolation(violation) => translate_rule_violation(violation),
        CoreError::PreconditionFault(fault) => translate_precondition_fault(fault),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match &err {
        PersistenceError::StaleDirectory { .. } | PersistenceError::StaleState { .. } => {
            ApiError::Conflict {
                message: err.to_string(),
            }
        }
        PersistenceError::PeriodNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Vacation period"),
            message: err.to_string(),
        },
        PersistenceError::EventNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Audit event"),
            message: err.to_string(),
        },
    }
}
