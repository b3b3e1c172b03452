use serde::{Deserialize, Serialize};

use super::shared::validate_required;
use crate::error::AppError;

/// Request body for creating a status.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateStatusRequest {
    /// Human-readable description.
    #[schema(example = "Available for adoption")]
    pub dis: String,
    /// Short status code (1-10 characters).
    #[schema(example = "available")]
    pub value: String,
}

pub fn validate_create_status(req: &CreateStatusRequest) -> Result<(), AppError> {
    validate_required("dis", &req.dis, 255)?;
    validate_required("value", &req.value, 10)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StatusResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Available for adoption")]
    pub dis: String,
    #[schema(example = "available")]
    pub value: String,
}

impl From<crate::entity::status::Model> for StatusResponse {
    fn from(m: crate::entity::status::Model) -> Self {
        Self {
            id: m.id,
            dis: m.dis,
            value: m.value,
        }
    }
}
