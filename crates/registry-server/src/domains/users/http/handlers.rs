use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::app::AppState;
use crate::domains::errors::ServiceError;
use crate::domains::users::service;

use super::types::{CreateUserRequest, ErrorResponse};

fn map_service_error(state: &AppState, error: ServiceError) -> Response {
    let status = match error {
        ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ErrorResponse {
        error: error.public_message(state.config.errors.expose_details),
    };
    (status, Json(body)).into_response()
}

fn map_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!(event = "request_body_rejected", error = %rejection.body_text());
    (
        rejection.status(),
        Json(ErrorResponse {
            error: rejection.body_text(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return map_rejection(rejection),
    };
    match service::create_user(&state, payload.into()).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(err) => map_service_error(&state, err),
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn list_users(State(state): State<AppState>) -> Response {
    match service::list_users(&state).await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(err) => map_service_error(&state, err),
    }
}
