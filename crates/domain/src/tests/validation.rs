// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CountryCode, DateRange, DomainError, Employee, LaborRegime, VacationPeriod,
    validate_country_code, validate_email_unique, validate_employee_fields,
    validate_labor_regime_fields, validate_period_fields, validate_request_within_period,
};

fn create_test_employee(name: &str, email: &str) -> Employee {
    Employee::new(1, String::from(name), email, 1, None)
}

fn create_test_regime(name: &str, country: &str, annual_days: u32) -> LaborRegime {
    LaborRegime::new(1, String::from(name), CountryCode::new(country), annual_days)
}

fn create_test_period(label: &str, total_days: u32) -> VacationPeriod {
    VacationPeriod::new(
        1,
        1,
        String::from(label),
        DateRange::parse("2025-01-01", "2025-12-31").unwrap(),
        total_days,
    )
}

#[test]
fn test_validate_employee_fields_accepts_valid_employee() {
    let employee: Employee = create_test_employee("Ana Diaz", "ana@example.com");
    assert!(validate_employee_fields(&employee).is_ok());
}

#[test]
fn test_validate_employee_fields_rejects_empty_name() {
    let employee: Employee = create_test_employee("   ", "ana@example.com");
    let result: Result<(), DomainError> = validate_employee_fields(&employee);
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_employee_fields_rejects_malformed_email() {
    for email in ["", "ana", "@example.com", "ana@", "a@b@c"] {
        let employee: Employee = create_test_employee("Ana", email);
        let result: Result<(), DomainError> = validate_employee_fields(&employee);
        assert!(
            matches!(result, Err(DomainError::InvalidEmail(_))),
            "expected '{email}' to be rejected"
        );
    }
}

#[test]
fn test_validate_email_unique_is_case_insensitive() {
    let existing: Vec<Employee> = vec![create_test_employee("Ana", "ana@example.com")];

    let result: Result<(), DomainError> = validate_email_unique("ANA@example.com", &existing);
    assert!(matches!(result, Err(DomainError::DuplicateEmail(_))));

    assert!(validate_email_unique("luis@example.com", &existing).is_ok());
}

#[test]
fn test_validate_country_code() {
    assert!(validate_country_code(&CountryCode::new("pe")).is_ok());
    assert!(validate_country_code(&CountryCode::new("PER")).is_err());
    assert!(validate_country_code(&CountryCode::new("P1")).is_err());
    assert!(validate_country_code(&CountryCode::new("")).is_err());
}

#[test]
fn test_validate_labor_regime_fields() {
    assert!(validate_labor_regime_fields(&create_test_regime("General", "PE", 30)).is_ok());
    assert!(validate_labor_regime_fields(&create_test_regime("General", "PE", 366)).is_ok());

    let result = validate_labor_regime_fields(&create_test_regime("", "PE", 30));
    assert!(matches!(result, Err(DomainError::InvalidName(_))));

    let result = validate_labor_regime_fields(&create_test_regime("General", "XYZ", 30));
    assert!(matches!(result, Err(DomainError::InvalidCountryCode(_))));

    let result = validate_labor_regime_fields(&create_test_regime("General", "PE", 0));
    assert!(matches!(
        result,
        Err(DomainError::InvalidAnnualDays { days: 0 })
    ));

    let result = validate_labor_regime_fields(&create_test_regime("General", "PE", 367));
    assert!(matches!(
        result,
        Err(DomainError::InvalidAnnualDays { days: 367 })
    ));
}

#[test]
fn test_validate_period_fields() {
    assert!(validate_period_fields(&create_test_period("2025", 30)).is_ok());
    assert!(validate_period_fields(&create_test_period("2025", 0)).is_ok());

    let result = validate_period_fields(&create_test_period(" ", 30));
    assert!(matches!(result, Err(DomainError::InvalidPeriodLabel(_))));

    let result = validate_period_fields(&create_test_period("2025", 400));
    assert!(matches!(
        result,
        Err(DomainError::InvalidPeriodDays {
            total_days: 400,
            period_length: 365
        })
    ));
}

#[test]
fn test_validate_request_within_period() {
    let period: VacationPeriod = create_test_period("2025", 30);

    let inside: DateRange = DateRange::parse("2025-06-02", "2025-06-08").unwrap();
    assert!(validate_request_within_period(&inside, &period).is_ok());

    let whole: DateRange = DateRange::parse("2025-01-01", "2025-12-31").unwrap();
    assert!(validate_request_within_period(&whole, &period).is_ok());

    let straddle: DateRange = DateRange::parse("2025-12-29", "2026-01-04").unwrap();
    let result = validate_request_within_period(&straddle, &period);
    assert!(matches!(
        result,
        Err(DomainError::RequestOutsidePeriod { .. })
    ));
}
