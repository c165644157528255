// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation balance calculation.
//!
//! This module provides read-only aggregation of a period's requests into
//! the balance shown on an employee's dashboard.

use crate::entitlement::{LONG_BLOCK_MIN_DAYS, workday_budget};
use crate::request::{RequestStatus, VacationRequest};
use serde::Serialize;

/// Balance of a single vacation period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationBalance {
    /// Allotment of the period in calendar days.
    pub total_days: u32,
    /// Calendar days covered by approved requests.
    pub approved_days: u32,
    /// Calendar days covered by pending requests.
    pub pending_days: u32,
    /// Calendar days covered by draft requests.
    pub draft_days: u32,
    /// `total_days - approved_days`. Negative if overdrawn.
    pub remaining_days: i64,
    /// Workdays consumed by approved requests.
    pub approved_workdays: u32,
    /// Maximum workdays the period allows.
    pub max_workdays: u32,
    /// `max_workdays - approved_workdays`. Negative if overdrawn.
    pub remaining_workdays: i64,
    /// Whether an approved block of at least a week exists.
    pub has_long_block: bool,
}

/// Calculates the balance of a vacation period.
///
/// Rejected requests are ignored.
///
/// # Arguments
///
/// * `period_total_days` - The allotment of the period
/// * `requests` - All requests of the period
#[must_use]
pub fn calculate_vacation_balance(
    period_total_days: u32,
    requests: &[VacationRequest],
) -> VacationBalance {
    let days_with = |status: RequestStatus| -> u32 {
        requests
            .iter()
            .filter(|r| r.status == status)
            .fold(0_u32, |acc, r| acc.saturating_add(r.total_days))
    };

    let approved_days: u32 = days_with(RequestStatus::Approved);
    let approved_workdays: u32 = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Approved)
        .fold(0_u32, |acc, r| acc.saturating_add(r.workdays()));
    let has_long_block: bool = requests.iter().any(|r| {
        r.status == RequestStatus::Approved && r.total_days >= LONG_BLOCK_MIN_DAYS
    });

    let (max_workdays, _) = workday_budget(period_total_days);

    VacationBalance {
        total_days: period_total_days,
        approved_days,
        pending_days: days_with(RequestStatus::Pending),
        draft_days: days_with(RequestStatus::Draft),
        remaining_days: i64::from(period_total_days) - i64::from(approved_days),
        approved_workdays,
        max_workdays,
        remaining_workdays: i64::from(max_workdays) - i64::from(approved_workdays),
        has_long_block,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calendar::DateRange;

    fn request(id: i64, start: &str, end: &str, status: RequestStatus) -> VacationRequest {
        VacationRequest::new(id, DateRange::parse(start, end).unwrap(), status, None)
    }

    #[test]
    fn test_empty_period_has_full_balance() {
        let balance: VacationBalance = calculate_vacation_balance(30, &[]);

        assert_eq!(balance.total_days, 30);
        assert_eq!(balance.approved_days, 0);
        assert_eq!(balance.remaining_days, 30);
        assert_eq!(balance.max_workdays, 22);
        assert_eq!(balance.remaining_workdays, 22);
        assert!(!balance.has_long_block);
    }

    #[test]
    fn test_statuses_are_counted_separately() {
        let requests: Vec<VacationRequest> = vec![
            request(1, "2025-06-02", "2025-06-08", RequestStatus::Approved),
            request(2, "2025-07-01", "2025-07-03", RequestStatus::Pending),
            request(3, "2025-08-04", "2025-08-05", RequestStatus::Draft),
            request(4, "2025-09-01", "2025-09-10", RequestStatus::Rejected),
        ];

        let balance: VacationBalance = calculate_vacation_balance(30, &requests);

        assert_eq!(balance.approved_days, 7);
        assert_eq!(balance.pending_days, 3);
        assert_eq!(balance.draft_days, 2);
        assert_eq!(balance.remaining_days, 23);
        assert_eq!(balance.approved_workdays, 5);
        assert_eq!(balance.remaining_workdays, 17);
        assert!(balance.has_long_block);
    }

    #[test]
    fn test_overdrawn_balance_goes_negative() {
        let requests: Vec<VacationRequest> = vec![request(
            1,
            "2025-06-02",
            "2025-06-15",
            RequestStatus::Approved,
        )];

        let balance: VacationBalance = calculate_vacation_balance(7, &requests);

        assert_eq!(balance.remaining_days, -7);
        assert_eq!(balance.max_workdays, 5);
        assert_eq!(balance.remaining_workdays, -5);
    }
}
