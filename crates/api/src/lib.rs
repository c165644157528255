// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the vacation entitlement service.
//!
//! This crate authenticates and authorizes actors, translates request DTOs
//! into core commands, persists the results and translates every lower-level
//! error into [`ApiError`]. It has no knowledge of HTTP.

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

mod auth;
mod capabilities;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate};
pub use capabilities::{Action, Grant, Resource, compute_request_capabilities, policy};
pub use error::{
    ApiError, AuthError, InputError, translate_core_error, translate_domain_error,
    translate_persistence_error, translate_precondition_fault, translate_rule_violation,
};
pub use handlers::{
    approve_vacation_request, authenticate_actor, create_labor_regime, create_vacation_request,
    get_audit_event, get_audit_timeline, get_vacation_balance, list_directory_audit_events,
    list_employees, list_labor_regimes, list_pending_requests, list_vacation_periods,
    list_vacation_requests, open_vacation_period, preview_vacation_request, register_employee,
    reject_vacation_request, submit_vacation_request, update_vacation_request,
};
pub use request_response::{
    ApproveVacationRequestRequest, AuditEventInfo, AuditTimelineResponse, Capability,
    CreateLaborRegimeRequest, CreateLaborRegimeResponse, CreateVacationRequestRequest,
    DirectoryAuditResponse, EmployeeInfo, LaborRegimeInfo, ListEmployeesResponse,
    ListLaborRegimesResponse, ListPendingRequestsResponse, ListVacationPeriodsResponse,
    ListVacationRequestsResponse, OpenVacationPeriodRequest, OpenVacationPeriodResponse,
    PreviewVacationRequestRequest, PreviewVacationRequestResponse, RegisterEmployeeRequest,
    RegisterEmployeeResponse, RejectVacationRequestRequest, RequestCapabilities,
    UpdateVacationRequestRequest, VacationBalanceResponse, VacationPeriodInfo,
    VacationRequestInfo, VacationRequestRef, VacationRequestResponse,
};
