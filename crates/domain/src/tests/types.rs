// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CountryCode, DateRange, Employee, LaborRegime, RequestStatus, VacationPeriod,
    VacationRequest,
};

#[test]
fn test_country_code_is_normalized_to_uppercase() {
    let country: CountryCode = CountryCode::new(" pe ");
    assert_eq!(country.value(), "PE");
}

#[test]
fn test_employee_email_is_normalized_to_lowercase() {
    let employee: Employee = Employee::new(1, String::from("Ana Diaz"), " Ana@Example.COM ", 1, None);
    assert_eq!(employee.email, "ana@example.com");
}

#[test]
fn test_employee_reports_to_manager() {
    let employee: Employee = Employee::new(2, String::from("Luis"), "luis@example.com", 1, Some(1));
    assert!(employee.reports_to(1));
    assert!(!employee.reports_to(3));

    let top: Employee = Employee::new(1, String::from("Maria"), "maria@example.com", 1, None);
    assert!(!top.reports_to(1));
}

#[test]
fn test_labor_regime_creation() {
    let regime: LaborRegime =
        LaborRegime::new(1, String::from("General"), CountryCode::new("PE"), 30);
    assert_eq!(regime.regime_id, 1);
    assert_eq!(regime.country.value(), "PE");
    assert_eq!(regime.annual_days, 30);
}

#[test]
fn test_vacation_period_creation() {
    let range: DateRange = DateRange::parse("2025-01-01", "2025-12-31").unwrap();
    let period: VacationPeriod = VacationPeriod::new(5, 2, String::from("2025"), range, 30);
    assert_eq!(period.range.day_count(), 365);
    assert_eq!(period.total_days, 30);
}

#[test]
fn test_vacation_request_derives_day_count_and_workdays() {
    let range: DateRange = DateRange::parse("2025-06-02", "2025-06-15").unwrap();
    let request: VacationRequest =
        VacationRequest::new(1, range, RequestStatus::Draft, Some(String::from("Trip")));
    assert_eq!(request.total_days, 14);
    assert_eq!(request.workdays(), 10);
    assert_eq!(request.review_note, None);

    let snapshot = request.as_existing();
    assert_eq!(snapshot.total_days, 14);
    assert_eq!(snapshot.status, RequestStatus::Draft);
}
