use serde::{Deserialize, Serialize};

use super::shared::validate_required;
use crate::error::AppError;

/// Request body for creating or fully replacing a pet.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct PetRequest {
    /// Pet name (1-20 characters).
    #[schema(example = "Rex")]
    pub pet_name: String,
    #[schema(example = 1)]
    pub category_id: i32,
    #[schema(example = 1)]
    pub status_id: i32,
}

pub fn validate_pet(req: &PetRequest) -> Result<(), AppError> {
    validate_required("pet_name", &req.pet_name, 20)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PetResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Rex")]
    pub pet_name: String,
    #[schema(example = 1)]
    pub category_id: i32,
    #[schema(example = 1)]
    pub status_id: i32,
}

impl From<crate::entity::pet::Model> for PetResponse {
    fn from(m: crate::entity::pet::Model) -> Self {
        Self {
            id: m.id,
            pet_name: m.pet_name,
            category_id: m.category_id,
            status_id: m.status_id,
        }
    }
}
