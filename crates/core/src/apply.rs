// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, DirectoryCommand};
use crate::error::CoreError;
use crate::state::{Directory, DirectoryResult, State, TransitionResult};
use vacation_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use vacation_domain::{
    CandidateRequest, CountryCode, DateRange, DomainError, Employee, LaborRegime, RequestStatus,
    VacationPeriod, VacationRequest, validate_email_unique, validate_employee_fields,
    validate_labor_regime_fields, validate_period_fields, validate_request_within_period,
    validate_vacation_request,
};

/// Applies a directory command, producing a new directory and audit event.
///
/// # Arguments
///
/// * `directory` - The current directory (immutable)
/// * `command` - The directory command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - A field fails validation
/// - A referenced regime, employee or manager does not exist
/// - The email is already taken
/// - The new period overlaps another period of the same employee
#[allow(clippy::too_many_lines)]
pub fn apply_directory(
    directory: &Directory,
    command: DirectoryCommand,
    actor: Actor,
    cause: Cause,
) -> Result<DirectoryResult, CoreError> {
    let before: StateSnapshot = directory.to_snapshot();
    let mut new_directory: Directory = directory.clone();

    let (created_id, action): (i64, Action) = match command {
        DirectoryCommand::CreateLaborRegime {
            name,
            country,
            annual_days,
        } => {
            let regime_id: i64 = directory.next_regime_id();
            let regime: LaborRegime = LaborRegime::new(
                regime_id,
                name.trim().to_string(),
                CountryCode::new(&country),
                annual_days,
            );
            validate_labor_regime_fields(&regime)?;

            let action: Action = Action::new(
                String::from("CreateLaborRegime"),
                Some(format!(
                    "Created labor regime '{}' ({}, {} days)",
                    regime.name,
                    regime.country.value(),
                    regime.annual_days
                )),
            );
            new_directory.labor_regimes.push(regime);
            (regime_id, action)
        }
        DirectoryCommand::RegisterEmployee {
            name,
            email,
            labor_regime_id,
            manager_id,
        } => {
            if directory.labor_regime(labor_regime_id).is_none() {
                return Err(DomainError::LaborRegimeNotFound(labor_regime_id).into());
            }
            if let Some(manager_id) = manager_id
                && directory.employee(manager_id).is_none()
            {
                return Err(DomainError::ManagerNotFound(manager_id).into());
            }

            let employee_id: i64 = directory.next_employee_id();
            let employee: Employee = Employee::new(
                employee_id,
                name.trim().to_string(),
                &email,
                labor_regime_id,
                manager_id,
            );
            validate_employee_fields(&employee)?;
            validate_email_unique(&employee.email, &directory.employees)?;

            let action: Action = Action::new(
                String::from("RegisterEmployee"),
                Some(format!(
                    "Registered employee {employee_id} '{}' <{}>",
                    employee.name, employee.email
                )),
            );
            new_directory.employees.push(employee);
            (employee_id, action)
        }
        DirectoryCommand::OpenVacationPeriod {
            employee_id,
            label,
            range,
            total_days,
        } => {
            let employee: &Employee = directory
                .employee(employee_id)
                .ok_or(DomainError::EmployeeNotFound(employee_id))?;
            let regime: &LaborRegime = directory
                .labor_regime(employee.labor_regime_id)
                .ok_or(DomainError::LaborRegimeNotFound(employee.labor_regime_id))?;

            let period_id: i64 = directory.next_period_id();
            let period: VacationPeriod = VacationPeriod::new(
                period_id,
                employee_id,
                label.trim().to_string(),
                range,
                total_days.unwrap_or(regime.annual_days),
            );
            validate_period_fields(&period)?;

            if let Some(existing) = directory
                .periods_of(employee_id)
                .into_iter()
                .find(|p| p.range.overlaps(&range))
            {
                return Err(DomainError::OverlappingPeriod {
                    employee_id,
                    period_id: existing.period_id,
                }
                .into());
            }

            let action: Action = Action::new(
                String::from("OpenVacationPeriod"),
                Some(format!(
                    "Opened period {period_id} '{}' ({}) with {} days for employee {employee_id}",
                    period.label, period.range, period.total_days
                )),
            );
            new_directory.periods.push(period);
            (period_id, action)
        }
    };

    new_directory.revision = directory.revision + 1;
    let after: StateSnapshot = new_directory.to_snapshot();
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after, None);

    Ok(DirectoryResult {
        new_directory,
        audit_event,
        created_id,
    })
}

/// Runs the entitlement rules for a candidate range against the period.
///
/// The candidate must fall inside the period and pass every rule. Passing
/// `exclude_request_id` leaves that request out of the comparison so an edit
/// or a status change is never checked against itself.
///
/// # Errors
///
/// Returns an error if the range lies outside the period, a rule rejects
/// the request, or the engine reports a precondition fault.
pub fn validate_candidate(
    state: &State,
    range: &DateRange,
    exclude_request_id: Option<i64>,
) -> Result<(), CoreError> {
    validate_request_within_period(range, &state.period)?;

    let candidate: CandidateRequest = CandidateRequest::from_range(range);
    validate_vacation_request(
        &candidate,
        &state.existing_requests(exclude_request_id),
        state.period.total_days,
    )?
    .into_result()?;

    Ok(())
}

fn find_request(state: &State, request_id: i64) -> Result<usize, CoreError> {
    state
        .requests
        .iter()
        .position(|r| r.request_id == request_id)
        .ok_or_else(|| {
            CoreError::DomainViolation(DomainError::RequestNotFound {
                period_id: state.period.period_id,
                request_id,
            })
        })
}

fn ensure_transition(request: &VacationRequest, to: RequestStatus) -> Result<(), CoreError> {
    if !request.status.can_transition_to(to) {
        return Err(DomainError::InvalidStatusTransition {
            from: request.status,
            to,
        }
        .into());
    }
    Ok(())
}

/// Blank notes are stored as absent.
fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Applies a command to a period's state, producing a new state and audit event.
///
/// # Arguments
///
/// * `state` - The current state of the period (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The request does not exist or cannot make the requested status change
/// - The dates fall outside the period
/// - An entitlement rule rejects the dates
/// - A rejection carries no reason
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let before: StateSnapshot = state.to_snapshot();
    let name: &'static str = command.name();
    let mut requests: Vec<VacationRequest> = state.requests.clone();

    let (request_id, details): (i64, String) = match command {
        Command::CreateRequest {
            range,
            reason,
            submit,
        } => {
            validate_candidate(state, &range, None)?;

            let request_id: i64 = state.next_request_id();
            let status: RequestStatus = if submit {
                RequestStatus::Pending
            } else {
                RequestStatus::Draft
            };
            requests.push(VacationRequest::new(
                request_id,
                range,
                status,
                normalize_note(reason),
            ));
            (
                request_id,
                format!("Created request {request_id} for {range} as {status}"),
            )
        }
        Command::UpdateRequest {
            request_id,
            range,
            reason,
        } => {
            let index: usize = find_request(state, request_id)?;
            let current: &VacationRequest = &requests[index];
            if !current.status.is_editable() {
                return Err(DomainError::RequestNotEditable {
                    request_id,
                    status: current.status,
                }
                .into());
            }

            validate_candidate(state, &range, Some(request_id))?;

            let previous: DateRange = current.range;
            let mut updated: VacationRequest =
                VacationRequest::new(request_id, range, current.status, normalize_note(reason));
            updated.review_note.clone_from(&current.review_note);
            requests[index] = updated;
            (
                request_id,
                format!("Moved request {request_id} from {previous} to {range}"),
            )
        }
        Command::SubmitRequest { request_id } => {
            let index: usize = find_request(state, request_id)?;
            ensure_transition(&requests[index], RequestStatus::Pending)?;
            validate_candidate(state, &requests[index].range, Some(request_id))?;

            requests[index].status = RequestStatus::Pending;
            (request_id, format!("Submitted request {request_id}"))
        }
        Command::ApproveRequest { request_id, note } => {
            let index: usize = find_request(state, request_id)?;
            ensure_transition(&requests[index], RequestStatus::Approved)?;
            validate_candidate(state, &requests[index].range, Some(request_id))?;

            requests[index].status = RequestStatus::Approved;
            requests[index].review_note = normalize_note(note);
            (request_id, format!("Approved request {request_id}"))
        }
        Command::RejectRequest { request_id, reason } => {
            let index: usize = find_request(state, request_id)?;
            ensure_transition(&requests[index], RequestStatus::Rejected)?;
            let reason: String =
                normalize_note(Some(reason)).ok_or(DomainError::MissingRejectionReason)?;

            requests[index].status = RequestStatus::Rejected;
            let details: String = format!("Rejected request {request_id}: {reason}");
            requests[index].review_note = Some(reason);
            (request_id, details)
        }
    };

    let new_state: State = State {
        period: state.period.clone(),
        revision: state.revision + 1,
        requests,
    };
    let after: StateSnapshot = new_state.to_snapshot();

    let action: Action = Action::new(String::from(name), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        before,
        after,
        Some(state.period.period_id),
    );

    Ok(TransitionResult {
        new_state,
        audit_event,
        request_id,
    })
}
