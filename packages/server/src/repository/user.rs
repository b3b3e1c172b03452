use sea_orm::*;

use super::conflict_on_unique;
use crate::entity::user;
use crate::error::AppError;
use crate::models::user::UserRequest;

const USERNAME_TAKEN: &str = "Username is already taken";

/// Insert a user. `password_hash` must already be hashed.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    req: &UserRequest,
    password_hash: String,
) -> Result<user::Model, AppError> {
    let new_user = user::ActiveModel {
        username: Set(req.username.trim().to_string()),
        firstname: Set(req.firstname.clone()),
        lastname: Set(req.lastname.clone()),
        email: Set(req.email.clone()),
        password: Set(password_hash),
        phone: Set(req.phone.clone()),
        userstatus: Set(req.userstatus),
        ..Default::default()
    };
    new_user
        .insert(db)
        .await
        .map_err(|e| conflict_on_unique(e, USERNAME_TAKEN))
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<user::Model, AppError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<user::Model>, AppError> {
    Ok(user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?)
}

/// Overwrite every mutable column of an existing user.
pub async fn replace<C: ConnectionTrait>(
    db: &C,
    id: i32,
    req: &UserRequest,
    password_hash: String,
) -> Result<user::Model, AppError> {
    let existing = find(db, id).await?;

    let mut active: user::ActiveModel = existing.into();
    active.username = Set(req.username.trim().to_string());
    active.firstname = Set(req.firstname.clone());
    active.lastname = Set(req.lastname.clone());
    active.email = Set(req.email.clone());
    active.password = Set(password_hash);
    active.phone = Set(req.phone.clone());
    active.userstatus = Set(req.userstatus);

    active
        .update(db)
        .await
        .map_err(|e| conflict_on_unique(e, USERNAME_TAKEN))
}

/// Delete a user and hand back the row as it was.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<user::Model, AppError> {
    let existing = find(db, id).await?;
    user::Entity::delete_by_id(existing.id).exec(db).await?;
    Ok(existing)
}
