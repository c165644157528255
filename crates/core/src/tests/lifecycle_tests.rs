// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    apply_ok, create_test_actor, create_test_cause, create_test_state, range, with_approved,
};
use crate::{Command, CoreError, State, TransitionResult, apply};
use vacation_domain::{DomainError, RequestStatus, RuleViolation};

fn run(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    apply(state, command, create_test_actor(), create_test_cause())
}

fn with_request(state: &State, start: &str, end: &str, submit: bool) -> State {
    apply_ok(
        state,
        Command::CreateRequest {
            range: range(start, end),
            reason: None,
            submit,
        },
    )
}

#[test]
fn test_submit_moves_draft_to_pending() {
    let state: State = with_request(&create_test_state(), "2025-06-02", "2025-06-08", false);

    let result: TransitionResult = run(&state, Command::SubmitRequest { request_id: 1 }).unwrap();

    assert_eq!(result.new_state.requests[0].status, RequestStatus::Pending);
    assert_eq!(result.audit_event.action.name, "SubmitRequest");
    assert_eq!(result.new_state.pending_requests().len(), 1);
}

#[test]
fn test_submit_twice_is_an_invalid_transition() {
    let state: State = with_request(&create_test_state(), "2025-06-02", "2025-06-08", true);

    let result = run(&state, Command::SubmitRequest { request_id: 1 });

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidStatusTransition {
            from: RequestStatus::Pending,
            to: RequestStatus::Pending
        })
    );
}

#[test]
fn test_submit_revalidates_against_newer_approvals() {
    let state: State = with_approved(&create_test_state(), "2025-06-02", "2025-06-08");
    // Draft of two weeks (10 workdays): 5 + 10 fits the 22-day budget.
    let state: State = with_request(&state, "2025-07-21", "2025-08-03", false);
    // Another two weeks gets approved in the meantime: 5 + 10 still fits.
    let state: State = with_request(&state, "2025-07-07", "2025-07-20", true);
    let state: State = apply_ok(
        &state,
        Command::ApproveRequest {
            request_id: 3,
            note: None,
        },
    );

    // Submitting the draft now needs 25 workdays.
    let result = run(&state, Command::SubmitRequest { request_id: 2 });

    assert!(matches!(
        result,
        Err(CoreError::RuleViolation(
            RuleViolation::WorkdayBudgetExceeded { .. }
        ))
    ));
}

#[test]
fn test_approve_records_note() {
    let state: State = with_request(&create_test_state(), "2025-06-02", "2025-06-08", true);

    let result: TransitionResult = run(
        &state,
        Command::ApproveRequest {
            request_id: 1,
            note: Some(String::from("Enjoy")),
        },
    )
    .unwrap();

    let request = &result.new_state.requests[0];
    assert_eq!(request.status, RequestStatus::Approved);
    assert_eq!(request.review_note.as_deref(), Some("Enjoy"));
}

#[test]
fn test_approve_draft_is_an_invalid_transition() {
    let state: State = with_request(&create_test_state(), "2025-06-02", "2025-06-08", false);

    let result = run(
        &state,
        Command::ApproveRequest {
            request_id: 1,
            note: None,
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidStatusTransition {
            from: RequestStatus::Draft,
            to: RequestStatus::Approved
        })
    );
}

#[test]
fn test_pending_requests_cannot_all_be_approved_past_the_budget() {
    let state: State = with_approved(&create_test_state(), "2025-06-02", "2025-06-08");
    // Two pending fortnights, each fine on its own.
    let state: State = with_request(&state, "2025-07-07", "2025-07-20", true);
    let state: State = with_request(&state, "2025-07-21", "2025-08-03", true);

    let state: State = apply_ok(
        &state,
        Command::ApproveRequest {
            request_id: 2,
            note: None,
        },
    );
    let result = run(
        &state,
        Command::ApproveRequest {
            request_id: 3,
            note: None,
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::RuleViolation(RuleViolation::WorkdayBudgetExceeded {
            max_workdays: 22,
            required_weekends: 4
        })
    );
}

#[test]
fn test_reject_requires_reason() {
    let state: State = with_request(&create_test_state(), "2025-06-02", "2025-06-08", true);

    let result = run(
        &state,
        Command::RejectRequest {
            request_id: 1,
            reason: String::from("   "),
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::MissingRejectionReason)
    );
}

#[test]
fn test_reject_frees_the_dates() {
    let state: State = with_request(&create_test_state(), "2025-06-02", "2025-06-08", true);

    let result: TransitionResult = run(
        &state,
        Command::RejectRequest {
            request_id: 1,
            reason: String::from("Team offsite that week"),
        },
    )
    .unwrap();
    let rejected = &result.new_state.requests[0];
    assert_eq!(rejected.status, RequestStatus::Rejected);
    assert_eq!(rejected.review_note.as_deref(), Some("Team offsite that week"));

    let state: State = with_request(&result.new_state, "2025-06-02", "2025-06-08", true);
    assert_eq!(state.requests.len(), 2);
    assert_eq!(state.requests[1].request_id, 2);
}

#[test]
fn test_rejected_request_is_final() {
    let state: State = with_request(&create_test_state(), "2025-06-02", "2025-06-08", true);
    let state: State = apply_ok(
        &state,
        Command::RejectRequest {
            request_id: 1,
            reason: String::from("No"),
        },
    );

    let approve = run(
        &state,
        Command::ApproveRequest {
            request_id: 1,
            note: None,
        },
    );
    let update = run(
        &state,
        Command::UpdateRequest {
            request_id: 1,
            range: range("2025-06-09", "2025-06-15"),
            reason: None,
        },
    );

    assert!(matches!(
        approve,
        Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition { .. }
        ))
    ));
    assert!(matches!(
        update,
        Err(CoreError::DomainViolation(
            DomainError::RequestNotEditable { .. }
        ))
    ));
}

#[test]
fn test_each_transition_bumps_revision_once() {
    let state: State = create_test_state();
    let state: State = with_request(&state, "2025-06-02", "2025-06-08", false);
    let state: State = apply_ok(&state, Command::SubmitRequest { request_id: 1 });
    let state: State = apply_ok(
        &state,
        Command::ApproveRequest {
            request_id: 1,
            note: None,
        },
    );

    assert_eq!(state.revision, 3);
}
