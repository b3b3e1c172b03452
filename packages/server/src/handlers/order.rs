use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::order::{CreateOrderRequest, OrderResponse, validate_create_order};
use crate::repository;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Orders",
    operation_id = "createOrder",
    summary = "Place an order",
    description = "`shipdate` must be formatted as `YYYY-MM-DD HH:MM:SS`; any other shape is a VALIDATION_ERROR.",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(pet_id = payload.pet_id, quantity = payload.quantity))]
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let shipdate = validate_create_order(&payload)?;

    let model = repository::order::insert(&state.db, &payload, shipdate).await?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Orders",
    operation_id = "listOrders",
    summary = "List all orders",
    responses(
        (status = 200, description = "All orders ordered by id", body = Vec<OrderResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let models = repository::order::find_all(&state.db).await?;
    Ok(Json(models.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Orders",
    operation_id = "getOrder",
    summary = "Get an order by ID",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 404, description = "Order not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<OrderResponse>, AppError> {
    let model = repository::order::find(&state.db, id).await?;
    Ok(Json(model.into()))
}
