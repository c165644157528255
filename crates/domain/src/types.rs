// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::DateRange;
use serde::Serialize;

/// An ISO 3166-1 alpha-2 country code.
///
/// Codes are normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode {
    /// The code value (two ASCII letters once validated).
    value: String,
}

impl CountryCode {
    /// Creates a new `CountryCode`.
    ///
    /// # Arguments
    ///
    /// * `value` - The country code (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_uppercase(),
        }
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A country-specific labor regime.
///
/// The regime supplies the default vacation allotment of new periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaborRegime {
    /// Canonical identifier.
    pub regime_id: i64,
    /// Display name (e.g., "Peru - General Regime").
    pub name: String,
    /// Country the regime applies to.
    pub country: CountryCode,
    /// Calendar days of vacation granted per entitlement period.
    pub annual_days: u32,
}

impl LaborRegime {
    /// Creates a new `LaborRegime`.
    #[must_use]
    pub const fn new(regime_id: i64, name: String, country: CountryCode, annual_days: u32) -> Self {
        Self {
            regime_id,
            name,
            country,
            annual_days,
        }
    }
}

/// An employee entitled to vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    /// Canonical identifier.
    pub employee_id: i64,
    /// Full name.
    pub name: String,
    /// Work email, unique across employees (case-insensitive).
    pub email: String,
    /// Labor regime governing this employee's vacation.
    pub labor_regime_id: i64,
    /// Direct manager, if any.
    pub manager_id: Option<i64>,
}

impl Employee {
    /// Creates a new `Employee`.
    ///
    /// The email is normalized to lowercase.
    #[must_use]
    pub fn new(
        employee_id: i64,
        name: String,
        email: &str,
        labor_regime_id: i64,
        manager_id: Option<i64>,
    ) -> Self {
        Self {
            employee_id,
            name,
            email: email.trim().to_lowercase(),
            labor_regime_id,
            manager_id,
        }
    }

    /// Whether `other_id` is this employee's direct manager.
    #[must_use]
    pub fn reports_to(&self, other_id: i64) -> bool {
        self.manager_id == Some(other_id)
    }
}

/// An entitlement period during which an employee may spend a fixed
/// allotment of vacation days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationPeriod {
    /// Canonical identifier.
    pub period_id: i64,
    /// Employee this period belongs to.
    pub employee_id: i64,
    /// Human-readable label (e.g., "2025").
    pub label: String,
    /// Dates the period covers.
    pub range: DateRange,
    /// Allotment in calendar days.
    pub total_days: u32,
}

impl VacationPeriod {
    /// Creates a new `VacationPeriod`.
    #[must_use]
    pub const fn new(
        period_id: i64,
        employee_id: i64,
        label: String,
        range: DateRange,
        total_days: u32,
    ) -> Self {
        Self {
            period_id,
            employee_id,
            label,
            range,
            total_days,
        }
    }
}
