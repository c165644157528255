// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarDate, DomainError, RequestStatus};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidEmail(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid email: test");

    let err: DomainError = DomainError::EmployeeNotFound(7);
    assert_eq!(format!("{err}"), "Employee 7 not found");

    let err: DomainError = DomainError::PeriodNotFound(3);
    assert_eq!(format!("{err}"), "Vacation period 3 not found");

    let err: DomainError = DomainError::RequestNotFound {
        period_id: 3,
        request_id: 9,
    };
    assert_eq!(format!("{err}"), "Vacation request 9 not found in period 3");

    let err: DomainError = DomainError::DuplicateEmail(String::from("ana@example.com"));
    assert_eq!(
        format!("{err}"),
        "An employee with email 'ana@example.com' already exists"
    );

    let err: DomainError = DomainError::InvalidAnnualDays { days: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid annual vacation days: 0. Must be between 1 and 366"
    );
}

#[test]
fn test_date_errors_display_calendar_dates() {
    let start: CalendarDate = CalendarDate::parse("2025-06-10").unwrap();
    let end: CalendarDate = CalendarDate::parse("2025-06-02").unwrap();

    let err: DomainError = DomainError::InvalidDateRange { start, end };
    assert_eq!(
        format!("{err}"),
        "Invalid date range: end date 2025-06-02 is before start date 2025-06-10"
    );

    let err: DomainError = DomainError::RequestOutsidePeriod {
        start,
        end: start,
        period_start: CalendarDate::parse("2025-01-01").unwrap(),
        period_end: CalendarDate::parse("2025-05-31").unwrap(),
    };
    assert_eq!(
        format!("{err}"),
        "Requested dates 2025-06-10..2025-06-10 fall outside the vacation period 2025-01-01..2025-05-31"
    );
}

#[test]
fn test_status_errors_display() {
    let err: DomainError = DomainError::InvalidStatusTransition {
        from: RequestStatus::Approved,
        to: RequestStatus::Rejected,
    };
    assert_eq!(
        format!("{err}"),
        "Cannot move a vacation request from Approved to Rejected"
    );

    let err: DomainError = DomainError::RequestNotEditable {
        request_id: 4,
        status: RequestStatus::Rejected,
    };
    assert_eq!(
        format!("{err}"),
        "Vacation request 4 cannot be edited in status Rejected"
    );
}
