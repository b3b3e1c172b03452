use sea_orm::*;

use super::conflict_on_unique;
use crate::entity::category;
use crate::error::AppError;
use crate::models::category::CreateCategoryRequest;

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    req: &CreateCategoryRequest,
) -> Result<category::Model, AppError> {
    let new_category = category::ActiveModel {
        cat_name: Set(req.cat_name.trim().to_string()),
        ..Default::default()
    };
    new_category
        .insert(db)
        .await
        .map_err(|e| conflict_on_unique(e, "Category name already exists"))
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<category::Model, AppError> {
    category::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".into()))
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<category::Model>, AppError> {
    Ok(category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?)
}
