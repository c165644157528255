// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the vacation entitlement service.
//!
//! The store is in-memory: it keeps the directory, one [`State`] per
//! vacation period and an append-only audit log.
//!
//! ## Revision Checks
//!
//! Every [`Directory`] and [`State`] carries a revision that the core
//! increments on each transition. A result is only accepted if it advances the
//! stored revision by exactly one; anything else was computed against an old
//! snapshot and is refused with a stale error. Callers that hold an exclusive
//! borrow for the whole read-apply-persist sequence never see that error.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use tracing::{debug, info};
use vacation_audit::AuditEvent;
use vacation_core::{Directory, DirectoryResult, State, TransitionResult};
use vacation_domain::VacationPeriod;

pub use error::PersistenceError;

/// In-memory persistence adapter.
#[derive(Debug, Default)]
pub struct VacationPersistence {
    directory: Directory,
    states: BTreeMap<i64, State>,
    audit_log: Vec<AuditEvent>,
}

impl VacationPersistence {
    /// Creates an empty store.
    #[must_use]
    pub fn new_in_memory() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Persists a directory change and its audit event.
    ///
    /// Periods that appear in the new directory get an empty [`State`].
    ///
    /// # Returns
    ///
    /// The event ID assigned to the persisted audit event.
    ///
    /// # Errors
    ///
    /// Returns `StaleDirectory` if the result does not follow the stored revision.
    pub fn persist_directory(&mut self, result: &DirectoryResult) -> Result<i64, PersistenceError> {
        let found: u64 = self.directory.revision;
        if result.new_directory.revision != found + 1 {
            return Err(PersistenceError::StaleDirectory {
                expected: result.new_directory.revision.saturating_sub(1),
                found,
            });
        }

        for period in &result.new_directory.periods {
            if !self.states.contains_key(&period.period_id) {
                self.states
                    .insert(period.period_id, State::new(period.clone()));
                debug!(period_id = period.period_id, "Initialized period state");
            }
        }
        self.directory = result.new_directory.clone();

        let event_id: i64 = self.append_audit_event(&result.audit_event);
        info!(
            event_id,
            action = %result.audit_event.action.name,
            revision = self.directory.revision,
            "Persisted directory change"
        );
        Ok(event_id)
    }

    /// Persists a period transition and its audit event.
    ///
    /// # Returns
    ///
    /// The event ID assigned to the persisted audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No state is stored for the period
    /// - The result does not follow the stored revision
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        let period_id: i64 = result.new_state.period.period_id;
        let stored: &mut State = self
            .states
            .get_mut(&period_id)
            .ok_or(PersistenceError::PeriodNotFound(period_id))?;

        let found: u64 = stored.revision;
        if result.new_state.revision != found + 1 {
            return Err(PersistenceError::StaleState {
                period_id,
                expected: result.new_state.revision.saturating_sub(1),
                found,
            });
        }
        *stored = result.new_state.clone();

        let event_id: i64 = self.append_audit_event(&result.audit_event);
        info!(
            event_id,
            period_id,
            request_id = result.request_id,
            action = %result.audit_event.action.name,
            revision = result.new_state.revision,
            "Persisted transition"
        );
        Ok(event_id)
    }

    fn append_audit_event(&mut self, event: &AuditEvent) -> i64 {
        let event_id: i64 = self
            .audit_log
            .last()
            .and_then(|e| e.event_id)
            .unwrap_or(0)
            + 1;
        self.audit_log.push(event.clone().with_id(event_id));
        debug!(event_id, "Persisted audit event");
        event_id
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns a copy of the current directory.
    #[must_use]
    pub fn get_directory(&self) -> Directory {
        self.directory.clone()
    }

    /// Returns a copy of the current state of a period.
    ///
    /// # Errors
    ///
    /// Returns an error if no state is stored for the period.
    pub fn get_state(&self, period_id: i64) -> Result<State, PersistenceError> {
        self.states
            .get(&period_id)
            .cloned()
            .ok_or(PersistenceError::PeriodNotFound(period_id))
    }

    /// Returns the current states of the given periods, skipping unknown ones.
    #[must_use]
    pub fn get_states<'a, I>(&self, periods: I) -> Vec<State>
    where
        I: IntoIterator<Item = &'a VacationPeriod>,
    {
        periods
            .into_iter()
            .filter_map(|p| self.states.get(&p.period_id).cloned())
            .collect()
    }

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not found.
    pub fn get_audit_event(&self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        self.audit_log
            .iter()
            .find(|e| e.event_id == Some(event_id))
            .cloned()
            .ok_or(PersistenceError::EventNotFound(event_id))
    }

    /// Retrieves the ordered audit timeline of a period.
    ///
    /// # Errors
    ///
    /// Returns an error if no state is stored for the period.
    pub fn get_audit_timeline(&self, period_id: i64) -> Result<Vec<AuditEvent>, PersistenceError> {
        if !self.states.contains_key(&period_id) {
            return Err(PersistenceError::PeriodNotFound(period_id));
        }
        Ok(self
            .audit_log
            .iter()
            .filter(|e| e.is_for_period(period_id))
            .cloned()
            .collect())
    }

    /// Retrieves all directory-level audit events, oldest first.
    #[must_use]
    pub fn get_global_audit_events(&self) -> Vec<AuditEvent> {
        self.audit_log
            .iter()
            .filter(|e| e.period_id.is_none())
            .cloned()
            .collect()
    }
}
