use sea_orm::sea_query::{OnConflict, Query as SeaQuery};
use sea_orm::*;

use crate::entity::{pet, pet_tag, tag};
use crate::error::AppError;
use crate::models::tag::CreateTagRequest;

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    req: &CreateTagRequest,
) -> Result<tag::Model, AppError> {
    let new_tag = tag::ActiveModel {
        tag_name: Set(req.tag_name.trim().to_string()),
        ..Default::default()
    };
    Ok(new_tag.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<tag::Model, AppError> {
    tag::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Tag not found".into()))
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<tag::Model>, AppError> {
    Ok(tag::Entity::find()
        .order_by_asc(tag::Column::Id)
        .all(db)
        .await?)
}

/// Record the (tag, pet) association. Linking an already linked pair is a no-op.
pub async fn link_pet<C: ConnectionTrait>(db: &C, tag_id: i32, pet_id: i32) -> Result<(), AppError> {
    let link = pet_tag::ActiveModel {
        tag_id: Set(tag_id),
        pet_id: Set(pet_id),
    };

    let result = pet_tag::Entity::insert(link)
        .on_conflict(
            OnConflict::columns([pet_tag::Column::TagId, pet_tag::Column::PetId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await;

    match result {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// All pets linked to a tag, ordered by pet id.
pub async fn pets_for_tag<C: ConnectionTrait>(
    db: &C,
    tag_id: i32,
) -> Result<Vec<pet::Model>, AppError> {
    Ok(pet::Entity::find()
        .filter(
            pet::Column::Id.in_subquery(
                SeaQuery::select()
                    .column(pet_tag::Column::PetId)
                    .from(pet_tag::Entity)
                    .and_where(pet_tag::Column::TagId.eq(tag_id))
                    .to_owned(),
            ),
        )
        .order_by_asc(pet::Column::Id)
        .all(db)
        .await?)
}
