use serde::{Deserialize, Serialize};

use super::shared::validate_required;
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateTagRequest {
    #[schema(example = "fluffy")]
    pub tag_name: String,
}

pub fn validate_create_tag(req: &CreateTagRequest) -> Result<(), AppError> {
    validate_required("tag_name", &req.tag_name, 100)
}

/// Request body for linking a tag to a pet.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct TagPetRequest {
    #[schema(example = 1)]
    pub pet_id: i32,
    #[schema(example = 1)]
    pub tag_id: i32,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TagResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "fluffy")]
    pub tag_name: String,
}

impl From<crate::entity::tag::Model> for TagResponse {
    fn from(m: crate::entity::tag::Model) -> Self {
        Self {
            id: m.id,
            tag_name: m.tag_name,
        }
    }
}
