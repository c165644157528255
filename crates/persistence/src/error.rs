// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The directory changed since the result was computed.
    StaleDirectory {
        /// Revision the result expects to follow.
        expected: u64,
        /// Revision currently stored.
        found: u64,
    },
    /// The period's requests changed since the result was computed.
    StaleState {
        /// The period concerned.
        period_id: i64,
        /// Revision the result expects to follow.
        expected: u64,
        /// Revision currently stored.
        found: u64,
    },
    /// No state is stored for the period.
    PeriodNotFound(i64),
    /// The requested event was not found.
    EventNotFound(i64),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StaleDirectory { expected, found } => write!(
                f,
                "Directory was modified concurrently (expected revision {expected}, found {found})"
            ),
            Self::StaleState {
                period_id,
                expected,
                found,
            } => write!(
                f,
                "Vacation period {period_id} was modified concurrently (expected revision {expected}, found {found})"
            ),
            Self::PeriodNotFound(id) => write!(f, "No state stored for vacation period {id}"),
            Self::EventNotFound(id) => write!(f, "Event not found: {id}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
