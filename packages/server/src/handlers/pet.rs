use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::pet::{PetRequest, PetResponse, validate_pet};
use crate::repository;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Pets",
    operation_id = "createPet",
    summary = "Create a pet",
    description = "Creates a pet. `category_id` and `status_id` are stored as given and are not checked against existing rows.",
    request_body = PetRequest,
    responses(
        (status = 201, description = "Pet created", body = PetResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(pet_name = %payload.pet_name))]
pub async fn create_pet(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PetRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_pet(&payload)?;

    let model = repository::pet::insert(&state.db, &payload).await?;

    Ok((StatusCode::CREATED, Json(PetResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Pets",
    operation_id = "listPets",
    summary = "List all pets",
    responses(
        (status = 200, description = "All pets ordered by id", body = Vec<PetResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<PetResponse>>, AppError> {
    let models = repository::pet::find_all(&state.db).await?;
    Ok(Json(models.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Pets",
    operation_id = "getPet",
    summary = "Get a pet by ID",
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet details", body = PetResponse),
        (status = 404, description = "Pet not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_pet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PetResponse>, AppError> {
    let model = repository::pet::find(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Pets",
    operation_id = "updatePet",
    summary = "Replace a pet",
    description = "Overwrites every field of the pet (full replace, not a partial patch).",
    params(("id" = i32, Path, description = "Pet ID")),
    request_body = PetRequest,
    responses(
        (status = 200, description = "Pet updated", body = PetResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Pet not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(pet_name = %payload.pet_name))]
pub async fn update_pet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<PetRequest>,
) -> Result<Json<PetResponse>, AppError> {
    validate_pet(&payload)?;

    let txn = state.db.begin().await?;
    let model = repository::pet::replace(&txn, id, &payload).await?;
    txn.commit().await?;

    Ok(Json(model.into()))
}
