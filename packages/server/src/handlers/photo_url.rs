use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::photo_url::{CreatePhotoUrlRequest, PhotoUrlResponse, validate_create_photo_url};
use crate::repository;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/photourl",
    tag = "Photo URLs",
    operation_id = "createPhotoUrl",
    summary = "Register a photo URL for a pet",
    description = "The URL is the record identity; registering the same URL twice returns 409 CONFLICT.",
    request_body = CreatePhotoUrlRequest,
    responses(
        (status = 201, description = "Photo URL created", body = PhotoUrlResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "URL already registered (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(url = %payload.url, pet_id = payload.pet_id))]
pub async fn create_photo_url(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePhotoUrlRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_photo_url(&payload)?;

    let model = repository::photo_url::insert(&state.db, &payload).await?;

    Ok((StatusCode::CREATED, Json(PhotoUrlResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/photourl",
    tag = "Photo URLs",
    operation_id = "listPhotoUrls",
    summary = "List all photo URLs",
    responses(
        (status = 200, description = "All photo URLs ordered by URL", body = Vec<PhotoUrlResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_photo_urls(
    State(state): State<AppState>,
) -> Result<Json<Vec<PhotoUrlResponse>>, AppError> {
    let models = repository::photo_url::find_all(&state.db).await?;
    Ok(Json(models.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/photourl/{id}",
    tag = "Photo URLs",
    operation_id = "getPhotoUrl",
    summary = "Get a photo URL",
    params(("id" = String, Path, description = "The photo URL itself, percent-encoded")),
    responses(
        (status = 200, description = "Photo URL details", body = PhotoUrlResponse),
        (status = 404, description = "Photo URL not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_photo_url(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<PhotoUrlResponse>, AppError> {
    let model = repository::photo_url::find(&state.db, &id).await?;
    Ok(Json(model.into()))
}
