use chrono::NaiveDateTime;
use sea_orm::*;

use crate::entity::order;
use crate::error::AppError;
use crate::models::order::CreateOrderRequest;

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    req: &CreateOrderRequest,
    shipdate: NaiveDateTime,
) -> Result<order::Model, AppError> {
    let new_order = order::ActiveModel {
        pet_id: Set(req.pet_id),
        quantity: Set(req.quantity),
        shipdate: Set(shipdate),
        complete: Set(req.complete),
        status_id: Set(req.status_id),
        ..Default::default()
    };
    Ok(new_order.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<order::Model, AppError> {
    order::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<order::Model>, AppError> {
    Ok(order::Entity::find()
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?)
}
