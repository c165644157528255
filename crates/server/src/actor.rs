// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor extraction for the server boundary.
//!
//! Callers identify themselves with the `x-actor-id`, `x-actor-role` and
//! (for employees and managers) `x-employee-id` headers. An optional
//! `x-request-id` becomes the audit cause.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use vacation_api::{AuthenticatedActor, authenticate_actor};
use vacation_audit::Cause;

use crate::{AppState, ErrorResponse};

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";
pub const EMPLOYEE_ID_HEADER: &str = "x-employee-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The authenticated caller and the audit cause of the request.
pub struct RequestActor(pub AuthenticatedActor, pub Cause);

fn header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<Option<&'a str>, ActorError> {
    headers
        .get(name)
        .map(|value| {
            value.to_str().map_err(|_| {
                warn!(header = name, "Invalid header encoding");
                ActorError::InvalidHeader(name)
            })
        })
        .transpose()
}

impl FromRequestParts<AppState> for RequestActor {
    type Rejection = ActorError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor_id: &str = header(&parts.headers, ACTOR_ID_HEADER)?.ok_or_else(|| {
            debug!("Missing actor id header");
            ActorError::MissingHeader(ACTOR_ID_HEADER)
        })?;
        let role: &str = header(&parts.headers, ACTOR_ROLE_HEADER)?
            .ok_or(ActorError::MissingHeader(ACTOR_ROLE_HEADER))?;
        let employee_id: Option<i64> = header(&parts.headers, EMPLOYEE_ID_HEADER)?
            .map(|value| {
                value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ActorError::InvalidHeader(EMPLOYEE_ID_HEADER))
            })
            .transpose()?;

        let persistence = state.persistence.lock().await;
        let actor: AuthenticatedActor = authenticate_actor(&persistence, actor_id, role, employee_id)
            .map_err(|e| {
                warn!(actor_id, error = %e, "Authentication failed");
                ActorError::Rejected(e.to_string())
            })?;
        drop(persistence);

        let cause_id: String = header(&parts.headers, REQUEST_ID_HEADER)?
            .map_or_else(|| String::from("http-request"), str::to_string);
        let cause: Cause = Cause::new(cause_id, format!("{} {}", parts.method, parts.uri.path()));

        debug!(actor = %actor.id, role = %actor.role, "Actor authenticated");

        Ok(Self(actor, cause))
    }
}

#[derive(Debug)]
pub enum ActorError {
    MissingHeader(&'static str),
    InvalidHeader(&'static str),
    Rejected(String),
}

impl IntoResponse for ActorError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingHeader(name) => format!("Missing '{name}' header"),
            Self::InvalidHeader(name) => format!("Invalid '{name}' header"),
            Self::Rejected(reason) => reason,
        };
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message,
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
