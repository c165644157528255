// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod actor;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use vacation_api::{
    ApiError, ApproveVacationRequestRequest, AuditEventInfo, AuditTimelineResponse,
    CreateLaborRegimeRequest, CreateLaborRegimeResponse, CreateVacationRequestRequest,
    DirectoryAuditResponse, ListEmployeesResponse, ListLaborRegimesResponse,
    ListPendingRequestsResponse, ListVacationPeriodsResponse, ListVacationRequestsResponse,
    OpenVacationPeriodRequest, OpenVacationPeriodResponse, PreviewVacationRequestRequest,
    PreviewVacationRequestResponse, RegisterEmployeeRequest, RegisterEmployeeResponse,
    RejectVacationRequestRequest, UpdateVacationRequestRequest, VacationBalanceResponse,
    VacationRequestRef, VacationRequestResponse, approve_vacation_request, create_labor_regime,
    create_vacation_request, get_audit_event, get_audit_timeline, get_vacation_balance,
    list_directory_audit_events, list_employees, list_labor_regimes, list_pending_requests,
    list_vacation_periods, list_vacation_requests, open_vacation_period, preview_vacation_request,
    register_employee, reject_vacation_request, submit_vacation_request, update_vacation_request,
};
use vacation_persistence::VacationPersistence;

use crate::actor::RequestActor;

/// Vacation Server - HTTP server for the vacation entitlement service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The lock is held for the whole read-validate-write sequence of a request,
/// so two writers can never validate against the same snapshot.
#[derive(Clone)]
struct AppState {
    /// The in-memory store.
    persistence: Arc<Mutex<VacationPersistence>>,
}

/// Query selecting a single period.
#[derive(Debug, Deserialize)]
struct PeriodQuery {
    /// The period.
    period_id: i64,
}

/// Optional employee filter.
#[derive(Debug, Deserialize)]
struct EmployeeFilterQuery {
    /// Only periods of this employee.
    employee_id: Option<i64>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_client_error() {
            warn!(status = status.as_u16(), error = %err, "Request refused");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ========================================================================
// Directory
// ========================================================================

/// Handler for POST `/labor_regimes` endpoint.
async fn handle_create_labor_regime(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, cause): RequestActor,
    Json(req): Json<CreateLaborRegimeRequest>,
) -> Result<Json<CreateLaborRegimeResponse>, HttpError> {
    info!(actor = %actor.id, country = %req.country, "Handling create_labor_regime request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateLaborRegimeResponse =
        create_labor_regime(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    info!(regime_id = response.regime_id, "Created labor regime");
    Ok(Json(response))
}

/// Handler for GET `/labor_regimes` endpoint.
async fn handle_list_labor_regimes(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
) -> Result<Json<ListLaborRegimesResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: ListLaborRegimesResponse = list_labor_regimes(&persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/employees` endpoint.
async fn handle_register_employee(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, cause): RequestActor,
    Json(req): Json<RegisterEmployeeRequest>,
) -> Result<Json<RegisterEmployeeResponse>, HttpError> {
    info!(actor = %actor.id, email = %req.email, "Handling register_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterEmployeeResponse =
        register_employee(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    info!(employee_id = response.employee_id, "Registered employee");
    Ok(Json(response))
}

/// Handler for GET `/employees` endpoint.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
) -> Json<ListEmployeesResponse> {
    let persistence = app_state.persistence.lock().await;
    let response: ListEmployeesResponse = list_employees(&persistence, &actor);
    drop(persistence);

    Json(response)
}

/// Handler for POST `/periods` endpoint.
async fn handle_open_vacation_period(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, cause): RequestActor,
    Json(req): Json<OpenVacationPeriodRequest>,
) -> Result<Json<OpenVacationPeriodResponse>, HttpError> {
    info!(
        actor = %actor.id,
        employee_id = req.employee_id,
        label = %req.label,
        "Handling open_vacation_period request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: OpenVacationPeriodResponse =
        open_vacation_period(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    info!(period_id = response.period_id, "Opened vacation period");
    Ok(Json(response))
}

/// Handler for GET `/periods` endpoint.
async fn handle_list_vacation_periods(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
    Query(params): Query<EmployeeFilterQuery>,
) -> Json<ListVacationPeriodsResponse> {
    let persistence = app_state.persistence.lock().await;
    let response: ListVacationPeriodsResponse =
        list_vacation_periods(&persistence, params.employee_id, &actor);
    drop(persistence);

    Json(response)
}

// ========================================================================
// Vacation Requests
// ========================================================================

/// Handler for POST `/requests` endpoint.
///
/// Creates a draft, or a pending request when `submit` is set.
async fn handle_create_vacation_request(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, cause): RequestActor,
    Json(req): Json<CreateVacationRequestRequest>,
) -> Result<Json<VacationRequestResponse>, HttpError> {
    info!(
        actor = %actor.id,
        period_id = req.period_id,
        start_date = %req.start_date,
        end_date = %req.end_date,
        submit = req.submit,
        "Handling create_vacation_request request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: VacationRequestResponse =
        create_vacation_request(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/requests/update` endpoint.
async fn handle_update_vacation_request(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, cause): RequestActor,
    Json(req): Json<UpdateVacationRequestRequest>,
) -> Result<Json<VacationRequestResponse>, HttpError> {
    info!(
        actor = %actor.id,
        period_id = req.period_id,
        request_id = req.request_id,
        "Handling update_vacation_request request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: VacationRequestResponse =
        update_vacation_request(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/requests/submit` endpoint.
async fn handle_submit_vacation_request(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, cause): RequestActor,
    Json(req): Json<VacationRequestRef>,
) -> Result<Json<VacationRequestResponse>, HttpError> {
    info!(
        actor = %actor.id,
        period_id = req.period_id,
        request_id = req.request_id,
        "Handling submit_vacation_request request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: VacationRequestResponse =
        submit_vacation_request(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/requests/approve` endpoint.
async fn handle_approve_vacation_request(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, cause): RequestActor,
    Json(req): Json<ApproveVacationRequestRequest>,
) -> Result<Json<VacationRequestResponse>, HttpError> {
    info!(
        actor = %actor.id,
        period_id = req.period_id,
        request_id = req.request_id,
        "Handling approve_vacation_request request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: VacationRequestResponse =
        approve_vacation_request(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/requests/reject` endpoint.
async fn handle_reject_vacation_request(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, cause): RequestActor,
    Json(req): Json<RejectVacationRequestRequest>,
) -> Result<Json<VacationRequestResponse>, HttpError> {
    info!(
        actor = %actor.id,
        period_id = req.period_id,
        request_id = req.request_id,
        "Handling reject_vacation_request request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: VacationRequestResponse =
        reject_vacation_request(&mut persistence, req, &actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/requests/validate` endpoint.
///
/// Dry run: nothing is stored and no audit event is written.
async fn handle_preview_vacation_request(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
    Json(req): Json<PreviewVacationRequestRequest>,
) -> Result<Json<PreviewVacationRequestResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: PreviewVacationRequestResponse =
        preview_vacation_request(&persistence, &req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/requests` endpoint.
async fn handle_list_vacation_requests(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<ListVacationRequestsResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: ListVacationRequestsResponse =
        list_vacation_requests(&persistence, params.period_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/requests/pending` endpoint.
async fn handle_list_pending_requests(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
) -> Result<Json<ListPendingRequestsResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: ListPendingRequestsResponse = list_pending_requests(&persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/balance` endpoint.
async fn handle_get_vacation_balance(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<VacationBalanceResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: VacationBalanceResponse =
        get_vacation_balance(&persistence, params.period_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

// ========================================================================
// Audit
// ========================================================================

/// Handler for GET `/audit/timeline` endpoint.
///
/// Returns the ordered audit event timeline of a period.
async fn handle_get_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<AuditTimelineResponse>, HttpError> {
    info!(period_id = params.period_id, "Handling get_audit_timeline request");

    let persistence = app_state.persistence.lock().await;
    let response: AuditTimelineResponse =
        get_audit_timeline(&persistence, params.period_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/audit/directory` endpoint.
async fn handle_list_directory_audit_events(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
) -> Result<Json<DirectoryAuditResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: DirectoryAuditResponse = list_directory_audit_events(&persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/audit/event/{event_id}` endpoint.
///
/// Returns a specific audit event by its ID.
async fn handle_get_audit_event(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor, _): RequestActor,
    Path(event_id): Path<i64>,
) -> Result<Json<AuditEventInfo>, HttpError> {
    info!(event_id = event_id, "Handling get_audit_event request");

    let persistence = app_state.persistence.lock().await;
    let response: AuditEventInfo = get_audit_event(&persistence, event_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/labor_regimes",
            post(handle_create_labor_regime).get(handle_list_labor_regimes),
        )
        .route(
            "/employees",
            post(handle_register_employee).get(handle_list_employees),
        )
        .route(
            "/periods",
            post(handle_open_vacation_period).get(handle_list_vacation_periods),
        )
        .route(
            "/requests",
            post(handle_create_vacation_request).get(handle_list_vacation_requests),
        )
        .route("/requests/update", post(handle_update_vacation_request))
        .route("/requests/submit", post(handle_submit_vacation_request))
        .route("/requests/approve", post(handle_approve_vacation_request))
        .route("/requests/reject", post(handle_reject_vacation_request))
        .route("/requests/validate", post(handle_preview_vacation_request))
        .route("/requests/pending", get(handle_list_pending_requests))
        .route("/balance", get(handle_get_vacation_balance))
        .route("/audit/timeline", get(handle_get_audit_timeline))
        .route("/audit/directory", get(handle_list_directory_audit_events))
        .route("/audit/event/{event_id}", get(handle_get_audit_event))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Vacation Server");

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(VacationPersistence::new_in_memory())),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
