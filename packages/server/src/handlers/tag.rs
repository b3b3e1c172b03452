use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::pet::PetResponse;
use crate::models::tag::{CreateTagRequest, TagPetRequest, TagResponse, validate_create_tag};
use crate::repository;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Tags",
    operation_id = "createTag",
    summary = "Create a tag",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(tag_name = %payload.tag_name))]
pub async fn create_tag(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateTagRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_tag(&payload)?;

    let model = repository::tag::insert(&state.db, &payload).await?;

    Ok((StatusCode::CREATED, Json(TagResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Tags",
    operation_id = "listTags",
    summary = "List all tags",
    responses(
        (status = 200, description = "All tags ordered by id", body = Vec<TagResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<TagResponse>>, AppError> {
    let models = repository::tag::find_all(&state.db).await?;
    Ok(Json(models.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Tags",
    operation_id = "getTag",
    summary = "Get a tag by ID",
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag details", body = TagResponse),
        (status = 404, description = "Tag not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_tag(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<TagResponse>, AppError> {
    let model = repository::tag::find(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    post,
    path = "/tag_pet",
    tag = "Tags",
    operation_id = "addTagToPet",
    summary = "Attach a tag to a pet",
    description = "Links the tag to the pet (idempotent) and returns every pet carrying the tag, ordered by id.",
    request_body = TagPetRequest,
    responses(
        (status = 200, description = "Pets linked to the tag", body = Vec<PetResponse>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Pet or tag not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(pet_id = payload.pet_id, tag_id = payload.tag_id))]
pub async fn add_tag_to_pet(
    State(state): State<AppState>,
    AppJson(payload): AppJson<TagPetRequest>,
) -> Result<Json<Vec<PetResponse>>, AppError> {
    let txn = state.db.begin().await?;

    let pet = repository::pet::find(&txn, payload.pet_id).await?;
    let tag = repository::tag::find(&txn, payload.tag_id).await?;

    repository::tag::link_pet(&txn, tag.id, pet.id).await?;
    let pets = repository::tag::pets_for_tag(&txn, tag.id).await?;

    txn.commit().await?;

    Ok(Json(pets.into_iter().map(Into::into).collect()))
}
