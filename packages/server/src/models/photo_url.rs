use serde::{Deserialize, Serialize};

use super::shared::validate_required;
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreatePhotoUrlRequest {
    /// Photo URL; doubles as the record identity.
    #[schema(example = "https://cdn.example/rex.jpg")]
    pub url: String,
    #[schema(example = 1)]
    pub pet_id: i32,
}

pub fn validate_create_photo_url(req: &CreatePhotoUrlRequest) -> Result<(), AppError> {
    validate_required("url", &req.url, 255)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PhotoUrlResponse {
    #[schema(example = "https://cdn.example/rex.jpg")]
    pub url: String,
    #[schema(example = 1)]
    pub pet_id: i32,
}

impl From<crate::entity::photo_url::Model> for PhotoUrlResponse {
    fn from(m: crate::entity::photo_url::Model) -> Self {
        Self {
            url: m.url,
            pet_id: m.pet_id,
        }
    }
}
