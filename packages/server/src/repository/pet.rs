use sea_orm::*;

use crate::entity::pet;
use crate::error::AppError;
use crate::models::pet::PetRequest;

pub async fn insert<C: ConnectionTrait>(db: &C, req: &PetRequest) -> Result<pet::Model, AppError> {
    let new_pet = pet::ActiveModel {
        pet_name: Set(req.pet_name.trim().to_string()),
        category_id: Set(req.category_id),
        status_id: Set(req.status_id),
        ..Default::default()
    };
    Ok(new_pet.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<pet::Model, AppError> {
    pet::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".into()))
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<pet::Model>, AppError> {
    Ok(pet::Entity::find()
        .order_by_asc(pet::Column::Id)
        .all(db)
        .await?)
}

/// Overwrite every mutable column of an existing pet.
pub async fn replace<C: ConnectionTrait>(
    db: &C,
    id: i32,
    req: &PetRequest,
) -> Result<pet::Model, AppError> {
    let existing = find(db, id).await?;

    let mut active: pet::ActiveModel = existing.into();
    active.pet_name = Set(req.pet_name.trim().to_string());
    active.category_id = Set(req.category_id);
    active.status_id = Set(req.status_id);

    Ok(active.update(db).await?)
}
