use serde::{Deserialize, Serialize};

use super::shared::{validate_max_len, validate_required};
use crate::error::AppError;

/// Request body for creating or fully replacing a user.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct UserRequest {
    /// Unique username (1-15 characters).
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Alice")]
    pub firstname: String,
    #[schema(example = "Liddell")]
    pub lastname: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Plaintext password; stored only as an argon2 hash.
    #[schema(example = "s3cure_P@ss!")]
    pub password: String,
    #[schema(example = "5550100")]
    pub phone: String,
    #[schema(example = 1)]
    pub userstatus: i32,
}

pub fn validate_user(req: &UserRequest) -> Result<(), AppError> {
    validate_required("username", &req.username, 15)?;
    validate_max_len("firstname", &req.firstname, 20)?;
    validate_max_len("lastname", &req.lastname, 20)?;
    validate_max_len("email", &req.email, 40)?;
    validate_max_len("phone", &req.phone, 10)?;
    if req.password.is_empty() || req.password.chars().count() > 128 {
        return Err(AppError::Validation(
            "password must be 1-128 characters".into(),
        ));
    }
    Ok(())
}

/// User projection; never carries the password hash.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Alice")]
    pub firstname: String,
    #[schema(example = "Liddell")]
    pub lastname: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "5550100")]
    pub phone: String,
    #[schema(example = 1)]
    pub userstatus: i32,
}

impl From<crate::entity::user::Model> for UserResponse {
    fn from(m: crate::entity::user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            firstname: m.firstname,
            lastname: m.lastname,
            email: m.email,
            phone: m.phone,
            userstatus: m.userstatus,
        }
    }
}
