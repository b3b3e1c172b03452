use sea_orm::*;

use crate::entity::status;
use crate::error::AppError;
use crate::models::status::CreateStatusRequest;

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    req: &CreateStatusRequest,
) -> Result<status::Model, AppError> {
    let new_status = status::ActiveModel {
        dis: Set(req.dis.trim().to_string()),
        value: Set(req.value.trim().to_string()),
        ..Default::default()
    };
    Ok(new_status.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<status::Model, AppError> {
    status::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Status not found".into()))
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<status::Model>, AppError> {
    Ok(status::Entity::find()
        .order_by_asc(status::Column::Id)
        .all(db)
        .await?)
}
