use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::status::{CreateStatusRequest, StatusResponse, validate_create_status};
use crate::repository;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Statuses",
    operation_id = "createStatus",
    summary = "Create a status",
    request_body = CreateStatusRequest,
    responses(
        (status = 201, description = "Status created", body = StatusResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(value = %payload.value))]
pub async fn create_status(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_status(&payload)?;

    let model = repository::status::insert(&state.db, &payload).await?;

    Ok((StatusCode::CREATED, Json(StatusResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Statuses",
    operation_id = "listStatuses",
    summary = "List all statuses",
    responses(
        (status = 200, description = "All statuses ordered by id", body = Vec<StatusResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_statuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusResponse>>, AppError> {
    let models = repository::status::find_all(&state.db).await?;
    Ok(Json(models.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Statuses",
    operation_id = "getStatus",
    summary = "Get a status by ID",
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 200, description = "Status details", body = StatusResponse),
        (status = 404, description = "Status not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<StatusResponse>, AppError> {
    let model = repository::status::find(&state.db, id).await?;
    Ok(Json(model.into()))
}
