// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API workflows for state-changing and read-only operations.
//!
//! Every write follows the same sequence while holding the exclusive borrow
//! of the store: read the directory, authorize the actor against the owner of
//! the record, apply the core command, persist the result and build the
//! response.

use tracing::info;
use vacation_audit::{AuditEvent, Cause};
use vacation_core::{
    Command, CoreError, Directory, DirectoryCommand, DirectoryResult, State, TransitionResult,
    apply, apply_directory, validate_candidate, validate_employee_exists, validate_period_exists,
};
use vacation_domain::{
    CalendarDate, DateRange, DomainError, Employee, LaborRegime, VacationBalance, VacationPeriod,
    VacationRequest, calculate_vacation_balance,
};
use vacation_persistence::VacationPersistence;

use crate::auth::{AuthenticatedActor, AuthorizationService, authenticate};
use crate::capabilities::{Action, Grant, Resource, compute_request_capabilities, policy};
use crate::error::{
    ApiError, InputError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
use crate::request_response::{
    ApproveVacationRequestRequest, AuditEventInfo, AuditTimelineResponse,
    CreateLaborRegimeRequest, CreateLaborRegimeResponse, CreateVacationRequestRequest,
    DirectoryAuditResponse, EmployeeInfo, LaborRegimeInfo, ListEmployeesResponse,
    ListLaborRegimesResponse, ListPendingRequestsResponse, ListVacationPeriodsResponse,
    ListVacationRequestsResponse, OpenVacationPeriodRequest, OpenVacationPeriodResponse,
    PreviewVacationRequestRequest, PreviewVacationRequestResponse, RegisterEmployeeRequest,
    RegisterEmployeeResponse, RejectVacationRequestRequest, UpdateVacationRequestRequest,
    VacationBalanceResponse, VacationPeriodInfo, VacationRequestInfo, VacationRequestRef,
    VacationRequestResponse,
};

// ========================================================================
// Helpers
// ========================================================================

/// Resolves caller credentials against the current directory.
///
/// # Errors
///
/// Returns an error if the credentials are incomplete or do not match the
/// directory.
pub fn authenticate_actor(
    persistence: &VacationPersistence,
    actor_id: &str,
    role: &str,
    employee_id: Option<i64>,
) -> Result<AuthenticatedActor, ApiError> {
    let directory: Directory = persistence.get_directory();
    Ok(authenticate(&directory, actor_id, role, employee_id)?)
}

fn parse_date(field: &'static str, value: &str) -> Result<CalendarDate, InputError> {
    if value.trim().is_empty() {
        return Err(InputError::MissingField { field });
    }
    CalendarDate::parse(value).map_err(|_| InputError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn parse_range(start_date: &str, end_date: &str) -> Result<DateRange, ApiError> {
    let start: CalendarDate = parse_date("start_date", start_date)?;
    let end: CalendarDate = parse_date("end_date", end_date)?;
    DateRange::new(start, end).map_err(translate_domain_error)
}

fn find_period(directory: &Directory, period_id: i64) -> Result<&VacationPeriod, ApiError> {
    validate_period_exists(directory, period_id).map_err(translate_domain_error)
}

fn find_owner<'a>(
    directory: &'a Directory,
    period: &VacationPeriod,
) -> Result<&'a Employee, ApiError> {
    validate_employee_exists(directory, period.employee_id).map_err(translate_domain_error)
}

fn load_state(persistence: &VacationPersistence, period_id: i64) -> Result<State, ApiError> {
    persistence
        .get_state(period_id)
        .map_err(translate_persistence_error)
}

fn request_info(
    actor: &AuthenticatedActor,
    owner: &Employee,
    period_id: i64,
    request: &VacationRequest,
) -> VacationRequestInfo {
    VacationRequestInfo {
        request_id: request.request_id,
        period_id,
        employee_id: owner.employee_id,
        start_date: request.range.start().to_string(),
        end_date: request.range.end().to_string(),
        total_days: request.total_days,
        workdays: request.workdays(),
        status: request.status.as_str().to_string(),
        reason: request.reason.clone(),
        review_note: request.review_note.clone(),
        capabilities: compute_request_capabilities(actor, owner, request),
    }
}

fn period_info(period: &VacationPeriod) -> VacationPeriodInfo {
    VacationPeriodInfo {
        period_id: period.period_id,
        employee_id: period.employee_id,
        label: period.label.clone(),
        start_date: period.range.start().to_string(),
        end_date: period.range.end().to_string(),
        total_days: period.total_days,
    }
}

fn audit_event_info(event: &AuditEvent) -> AuditEventInfo {
    AuditEventInfo {
        event_id: event.event_id.unwrap_or_default(),
        actor_id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
        cause_id: event.cause.id.clone(),
        cause_description: event.cause.description.clone(),
        action: event.action.name.clone(),
        details: event.action.details.clone(),
        before: event.before.data.clone(),
        after: event.after.data.clone(),
        period_id: event.period_id,
    }
}

/// Dry-run counterpart of the create and update commands.
///
/// An excluded request must still be editable, since the matching update
/// would refuse it before any entitlement rule runs.
fn preview_candidate(
    state: &State,
    range: &DateRange,
    exclude_request_id: Option<i64>,
) -> Result<(), CoreError> {
    let excluded: Option<&VacationRequest> = exclude_request_id.and_then(|id| state.request(id));
    if let Some(current) = excluded.filter(|r| !r.status.is_editable()) {
        return Err(DomainError::RequestNotEditable {
            request_id: current.request_id,
            status: current.status,
        }
        .into());
    }
    validate_candidate(state, range, exclude_request_id)
}

fn commit_directory(
    persistence: &mut VacationPersistence,
    command: DirectoryCommand,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<(DirectoryResult, i64), ApiError> {
    let directory: Directory = persistence.get_directory();
    let result: DirectoryResult =
        apply_directory(&directory, command, actor.to_audit_actor(), cause)
            .map_err(translate_core_error)?;
    let event_id: i64 = persistence
        .persist_directory(&result)
        .map_err(translate_persistence_error)?;
    Ok((result, event_id))
}

/// Authorizes, applies and persists a command against one period.
///
/// `actions` lists every permission the command needs on the period owner.
fn run_request_command(
    persistence: &mut VacationPersistence,
    period_id: i64,
    actions: &[Action],
    command: Command,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<VacationRequestResponse, ApiError> {
    let directory: Directory = persistence.get_directory();
    let period: &VacationPeriod = find_period(&directory, period_id)?;
    let owner: &Employee = find_owner(&directory, period)?;
    for action in actions {
        AuthorizationService::authorize(actor, Resource::VacationRequest, *action, Some(owner))?;
    }

    let name: &'static str = command.name();
    let state: State = load_state(persistence, period_id)?;
    let result: TransitionResult =
        apply(&state, command, actor.to_audit_actor(), cause).map_err(translate_core_error)?;
    let event_id: i64 = persistence
        .persist_transition(&result)
        .map_err(translate_persistence_error)?;

    let stored: &VacationRequest =
        result
            .new_state
            .request(result.request_id)
            .ok_or_else(|| ApiError::Internal {
                message: format!(
                    "request {} missing from period {period_id} after {name}",
                    result.request_id
                ),
            })?;

    info!(
        actor = %actor.id,
        period_id,
        request_id = stored.request_id,
        status = %stored.status,
        event_id,
        "{name} completed"
    );

    Ok(VacationRequestResponse {
        request: request_info(actor, owner, period_id, stored),
        event_id,
        message: format!(
            "Vacation request {} is now {}",
            stored.request_id, stored.status
        ),
    })
}

// ========================================================================
// Directory
// ========================================================================

/// Creates a labor regime.
///
/// # Errors
///
/// Returns an error if the actor is not HR or the regime fails validation.
pub fn create_labor_regime(
    persistence: &mut VacationPersistence,
    request: CreateLaborRegimeRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<CreateLaborRegimeResponse, ApiError> {
    AuthorizationService::authorize(actor, Resource::LaborRegime, Action::Create, None)?;

    let command: DirectoryCommand = DirectoryCommand::CreateLaborRegime {
        name: request.name,
        country: request.country,
        annual_days: request.annual_days,
    };
    let (result, event_id): (DirectoryResult, i64) =
        commit_directory(persistence, command, actor, cause)?;

    Ok(CreateLaborRegimeResponse {
        regime_id: result.created_id,
        event_id,
        message: format!("Created labor regime {}", result.created_id),
    })
}

/// Lists every labor regime.
///
/// # Errors
///
/// Returns an error if the actor may not view labor regimes.
pub fn list_labor_regimes(
    persistence: &VacationPersistence,
    actor: &AuthenticatedActor,
) -> Result<ListLaborRegimesResponse, ApiError> {
    AuthorizationService::authorize(actor, Resource::LaborRegime, Action::View, None)?;

    let labor_regimes: Vec<LaborRegimeInfo> = persistence
        .get_directory()
        .labor_regimes
        .iter()
        .map(|r: &LaborRegime| LaborRegimeInfo {
            regime_id: r.regime_id,
            name: r.name.clone(),
            country: r.country.value().to_string(),
            annual_days: r.annual_days,
        })
        .collect();

    Ok(ListLaborRegimesResponse { labor_regimes })
}

/// Registers an employee.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not HR
/// - The regime or manager does not exist
/// - The fields fail validation or the email is taken
pub fn register_employee(
    persistence: &mut VacationPersistence,
    request: RegisterEmployeeRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<RegisterEmployeeResponse, ApiError> {
    AuthorizationService::authorize(actor, Resource::Employee, Action::Create, None)?;

    let command: DirectoryCommand = DirectoryCommand::RegisterEmployee {
        name: request.name,
        email: request.email,
        labor_regime_id: request.labor_regime_id,
        manager_id: request.manager_id,
    };
    let (result, event_id): (DirectoryResult, i64) =
        commit_directory(persistence, command, actor, cause)?;

    Ok(RegisterEmployeeResponse {
        employee_id: result.created_id,
        event_id,
        message: format!("Registered employee {}", result.created_id),
    })
}

/// Lists the employees the actor may view.
#[must_use]
pub fn list_employees(
    persistence: &VacationPersistence,
    actor: &AuthenticatedActor,
) -> ListEmployeesResponse {
    let employees: Vec<EmployeeInfo> = persistence
        .get_directory()
        .employees
        .iter()
        .filter(|e| {
            AuthorizationService::is_authorized(actor, Resource::Employee, Action::View, Some(*e))
        })
        .map(|e| EmployeeInfo {
            employee_id: e.employee_id,
            name: e.name.clone(),
            email: e.email.clone(),
            labor_regime_id: e.labor_regime_id,
            manager_id: e.manager_id,
        })
        .collect();

    ListEmployeesResponse { employees }
}

/// Opens a vacation period for an employee.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not HR
/// - The dates are malformed
/// - The employee does not exist
/// - The period overlaps another period of the employee
pub fn open_vacation_period(
    persistence: &mut VacationPersistence,
    request: OpenVacationPeriodRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<OpenVacationPeriodResponse, ApiError> {
    AuthorizationService::authorize(actor, Resource::VacationPeriod, Action::Create, None)?;

    let range: DateRange = parse_range(&request.start_date, &request.end_date)?;
    let command: DirectoryCommand = DirectoryCommand::OpenVacationPeriod {
        employee_id: request.employee_id,
        label: request.label,
        range,
        total_days: request.total_days,
    };
    let (result, event_id): (DirectoryResult, i64) =
        commit_directory(persistence, command, actor, cause)?;

    let total_days: u32 = result
        .new_directory
        .period(result.created_id)
        .map_or(0, |p| p.total_days);

    Ok(OpenVacationPeriodResponse {
        period_id: result.created_id,
        total_days,
        event_id,
        message: format!(
            "Opened vacation period {} with {total_days} days",
            result.created_id
        ),
    })
}

/// Lists the periods the actor may view, optionally for one employee.
#[must_use]
pub fn list_vacation_periods(
    persistence: &VacationPersistence,
    employee_id: Option<i64>,
    actor: &AuthenticatedActor,
) -> ListVacationPeriodsResponse {
    let directory: Directory = persistence.get_directory();
    let periods: Vec<VacationPeriodInfo> = directory
        .periods
        .iter()
        .filter(|p| employee_id.is_none_or(|id| p.employee_id == id))
        .filter(|p| {
            directory.employee(p.employee_id).is_some_and(|owner| {
                AuthorizationService::is_authorized(
                    actor,
                    Resource::VacationPeriod,
                    Action::View,
                    Some(owner),
                )
            })
        })
        .map(period_info)
        .collect();

    ListVacationPeriodsResponse { periods }
}

// ========================================================================
// Vacation Requests
// ========================================================================

/// Creates a vacation request, as a draft or directly submitted.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not request vacation for the period owner
/// - The dates are malformed or fall outside the period
/// - An entitlement rule rejects the dates
pub fn create_vacation_request(
    persistence: &mut VacationPersistence,
    request: CreateVacationRequestRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<VacationRequestResponse, ApiError> {
    let range: DateRange = parse_range(&request.start_date, &request.end_date)?;
    let actions: &[Action] = if request.submit {
        &[Action::Create, Action::Submit]
    } else {
        &[Action::Create]
    };

    let command: Command = Command::CreateRequest {
        range,
        reason: request.reason,
        submit: request.submit,
    };
    run_request_command(
        persistence,
        request.period_id,
        actions,
        command,
        actor,
        cause,
    )
}

/// Changes the dates and reason of a draft or pending request.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not update the request
/// - The request is not editable
/// - The new dates break a rule
pub fn update_vacation_request(
    persistence: &mut VacationPersistence,
    request: UpdateVacationRequestRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<VacationRequestResponse, ApiError> {
    let range: DateRange = parse_range(&request.start_date, &request.end_date)?;
    let command: Command = Command::UpdateRequest {
        request_id: request.request_id,
        range,
        reason: request.reason,
    };
    run_request_command(
        persistence,
        request.period_id,
        &[Action::Update],
        command,
        actor,
        cause,
    )
}

/// Sends a draft for review.
///
/// # Errors
///
/// Returns an error if the actor may not submit the request, the request is
/// not a draft, or its dates no longer satisfy the rules.
pub fn submit_vacation_request(
    persistence: &mut VacationPersistence,
    request: VacationRequestRef,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<VacationRequestResponse, ApiError> {
    let command: Command = Command::SubmitRequest {
        request_id: request.request_id,
    };
    run_request_command(
        persistence,
        request.period_id,
        &[Action::Submit],
        command,
        actor,
        cause,
    )
}

/// Approves a pending request.
///
/// # Errors
///
/// Returns an error if the actor may not review the request, the request is
/// not pending, or approving it would break a rule.
pub fn approve_vacation_request(
    persistence: &mut VacationPersistence,
    request: ApproveVacationRequestRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<VacationRequestResponse, ApiError> {
    let command: Command = Command::ApproveRequest {
        request_id: request.request_id,
        note: request.note,
    };
    run_request_command(
        persistence,
        request.period_id,
        &[Action::Approve],
        command,
        actor,
        cause,
    )
}

/// Rejects a pending request.
///
/// # Errors
///
/// Returns an error if the actor may not review the request, the request is
/// not pending, or no reason is given.
pub fn reject_vacation_request(
    persistence: &mut VacationPersistence,
    request: RejectVacationRequestRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<VacationRequestResponse, ApiError> {
    let command: Command = Command::RejectRequest {
        request_id: request.request_id,
        reason: request.reason,
    };
    run_request_command(
        persistence,
        request.period_id,
        &[Action::Reject],
        command,
        actor,
        cause,
    )
}

/// Runs the entitlement rules without storing anything.
///
/// A rule rejection is a successful preview with `accepted = false`.
///
/// # Errors
///
/// Returns an error if the actor may not request vacation for the period
/// owner, the period does not exist, or the dates are malformed.
pub fn preview_vacation_request(
    persistence: &VacationPersistence,
    request: &PreviewVacationRequestRequest,
    actor: &AuthenticatedActor,
) -> Result<PreviewVacationRequestResponse, ApiError> {
    let directory: Directory = persistence.get_directory();
    let period: &VacationPeriod = find_period(&directory, request.period_id)?;
    let owner: &Employee = find_owner(&directory, period)?;
    let action: Action = if request.exclude_request_id.is_some() {
        Action::Update
    } else {
        Action::Create
    };
    AuthorizationService::authorize(actor, Resource::VacationRequest, action, Some(owner))?;

    let range: DateRange = parse_range(&request.start_date, &request.end_date)?;
    let state: State = load_state(persistence, request.period_id)?;

    let missing: Option<i64> = request
        .exclude_request_id
        .filter(|id| state.request(*id).is_none());
    if let Some(request_id) = missing {
        return Err(translate_domain_error(DomainError::RequestNotFound {
            period_id: request.period_id,
            request_id,
        }));
    }

    let (accepted, rule, message): (bool, Option<String>, String) =
        match preview_candidate(&state, &range, request.exclude_request_id) {
            Ok(()) => (
                true,
                None,
                String::from("The request satisfies every entitlement rule"),
            ),
            Err(err) => match translate_core_error(err) {
                ApiError::DomainRuleViolation { rule, message } => (false, Some(rule), message),
                other => return Err(other),
            },
        };

    Ok(PreviewVacationRequestResponse {
        accepted,
        rule,
        message,
        total_days: range.day_count(),
        workdays: range.workdays(),
    })
}

/// Lists every request of a period.
///
/// # Errors
///
/// Returns an error if the period does not exist or the actor may not view it.
pub fn list_vacation_requests(
    persistence: &VacationPersistence,
    period_id: i64,
    actor: &AuthenticatedActor,
) -> Result<ListVacationRequestsResponse, ApiError> {
    let directory: Directory = persistence.get_directory();
    let period: &VacationPeriod = find_period(&directory, period_id)?;
    let owner: &Employee = find_owner(&directory, period)?;
    AuthorizationService::authorize(actor, Resource::VacationRequest, Action::View, Some(owner))?;

    let state: State = load_state(persistence, period_id)?;
    let requests: Vec<VacationRequestInfo> = state
        .requests
        .iter()
        .map(|r| request_info(actor, owner, period_id, r))
        .collect();

    Ok(ListVacationRequestsResponse {
        period_id,
        requests,
    })
}

/// Lists the pending requests the actor may review.
///
/// Managers see their direct reports, HR sees everyone. Nobody sees their
/// own requests here.
///
/// # Errors
///
/// Returns an error if the actor's role may never review requests.
pub fn list_pending_requests(
    persistence: &VacationPersistence,
    actor: &AuthenticatedActor,
) -> Result<ListPendingRequestsResponse, ApiError> {
    if policy(actor.role, Resource::VacationRequest, Action::Approve) == Grant::Denied {
        AuthorizationService::authorize(actor, Resource::VacationRequest, Action::Approve, None)?;
    }

    let directory: Directory = persistence.get_directory();
    let mut requests: Vec<VacationRequestInfo> = Vec::new();
    for period in &directory.periods {
        let Some(owner) = directory.employee(period.employee_id) else {
            continue;
        };
        if !AuthorizationService::is_authorized(
            actor,
            Resource::VacationRequest,
            Action::Approve,
            Some(owner),
        ) {
            continue;
        }
        let state: State = load_state(persistence, period.period_id)?;
        requests.extend(
            state
                .pending_requests()
                .into_iter()
                .map(|r| request_info(actor, owner, period.period_id, r)),
        );
    }

    Ok(ListPendingRequestsResponse { requests })
}

/// Computes the balance of a period.
///
/// # Errors
///
/// Returns an error if the period does not exist or the actor may not view it.
pub fn get_vacation_balance(
    persistence: &VacationPersistence,
    period_id: i64,
    actor: &AuthenticatedActor,
) -> Result<VacationBalanceResponse, ApiError> {
    let directory: Directory = persistence.get_directory();
    let period: &VacationPeriod = find_period(&directory, period_id)?;
    let owner: &Employee = find_owner(&directory, period)?;
    AuthorizationService::authorize(actor, Resource::VacationPeriod, Action::View, Some(owner))?;

    let state: State = load_state(persistence, period_id)?;
    let balance: VacationBalance = calculate_vacation_balance(period.total_days, &state.requests);

    Ok(VacationBalanceResponse {
        period_id,
        employee_id: owner.employee_id,
        label: period.label.clone(),
        total_days: balance.total_days,
        approved_days: balance.approved_days,
        pending_days: balance.pending_days,
        draft_days: balance.draft_days,
        remaining_days: balance.remaining_days,
        approved_workdays: balance.approved_workdays,
        max_workdays: balance.max_workdays,
        remaining_workdays: balance.remaining_workdays,
        has_long_block: balance.has_long_block,
    })
}

// ========================================================================
// Audit
// ========================================================================

/// Returns the audit timeline of a period, oldest first.
///
/// # Errors
///
/// Returns an error if the period does not exist or the actor may not view
/// its audit trail.
pub fn get_audit_timeline(
    persistence: &VacationPersistence,
    period_id: i64,
    actor: &AuthenticatedActor,
) -> Result<AuditTimelineResponse, ApiError> {
    let directory: Directory = persistence.get_directory();
    let period: &VacationPeriod = find_period(&directory, period_id)?;
    let owner: &Employee = find_owner(&directory, period)?;
    AuthorizationService::authorize(actor, Resource::AuditLog, Action::View, Some(owner))?;

    let events: Vec<AuditEventInfo> = persistence
        .get_audit_timeline(period_id)
        .map_err(translate_persistence_error)?
        .iter()
        .map(audit_event_info)
        .collect();

    Ok(AuditTimelineResponse { period_id, events })
}

/// Returns a single audit event.
///
/// Directory events have no owner and are visible to HR only.
///
/// # Errors
///
/// Returns an error if the event does not exist or the actor may not view it.
pub fn get_audit_event(
    persistence: &VacationPersistence,
    event_id: i64,
    actor: &AuthenticatedActor,
) -> Result<AuditEventInfo, ApiError> {
    let event: AuditEvent = persistence
        .get_audit_event(event_id)
        .map_err(translate_persistence_error)?;

    let directory: Directory = persistence.get_directory();
    let owner: Option<&Employee> = match event.period_id {
        Some(period_id) => {
            let period: &VacationPeriod = find_period(&directory, period_id)?;
            Some(find_owner(&directory, period)?)
        }
        None => None,
    };
    AuthorizationService::authorize(actor, Resource::AuditLog, Action::View, owner)?;

    Ok(audit_event_info(&event))
}

/// Returns every directory-level audit event, oldest first.
///
/// # Errors
///
/// Returns an error if the actor is not HR.
pub fn list_directory_audit_events(
    persistence: &VacationPersistence,
    actor: &AuthenticatedActor,
) -> Result<DirectoryAuditResponse, ApiError> {
    AuthorizationService::authorize(actor, Resource::AuditLog, Action::View, None)?;

    let events: Vec<AuditEventInfo> = persistence
        .get_global_audit_events()
        .iter()
        .map(audit_event_info)
        .collect();

    Ok(DirectoryAuditResponse { events })
}
