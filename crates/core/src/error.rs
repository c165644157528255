// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vacation_domain::{DomainError, PreconditionFault, RuleViolation};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain invariant was violated (bad input, missing entity, illegal status change).
    DomainViolation(DomainError),
    /// An entitlement rule rejected the request.
    RuleViolation(RuleViolation),
    /// The rule engine was handed malformed data.
    PreconditionFault(PreconditionFault),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::RuleViolation(violation) => write!(f, "Rule violation: {violation}"),
            Self::PreconditionFault(fault) => write!(f, "Precondition fault: {fault}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<RuleViolation> for CoreError {
    fn from(violation: RuleViolation) -> Self {
        Self::RuleViolation(violation)
    }
}

impl From<PreconditionFault> for CoreError {
    fn from(fault: PreconditionFault) -> Self {
        Self::PreconditionFault(fault)
    }
}
