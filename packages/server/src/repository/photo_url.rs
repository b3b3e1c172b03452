use sea_orm::*;

use super::conflict_on_unique;
use crate::entity::photo_url;
use crate::error::AppError;
use crate::models::photo_url::CreatePhotoUrlRequest;

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    req: &CreatePhotoUrlRequest,
) -> Result<photo_url::Model, AppError> {
    let new_url = photo_url::ActiveModel {
        url: Set(req.url.trim().to_string()),
        pet_id: Set(req.pet_id),
    };
    new_url
        .insert(db)
        .await
        .map_err(|e| conflict_on_unique(e, "Photo URL already exists"))
}

pub async fn find<C: ConnectionTrait>(db: &C, url: &str) -> Result<photo_url::Model, AppError> {
    photo_url::Entity::find_by_id(url.to_string())
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Photo URL not found".into()))
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<photo_url::Model>, AppError> {
    Ok(photo_url::Entity::find()
        .order_by_asc(photo_url::Column::Url)
        .all(db)
        .await?)
}
