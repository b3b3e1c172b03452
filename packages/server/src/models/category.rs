use serde::{Deserialize, Serialize};

use super::shared::validate_required;
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCategoryRequest {
    /// Unique category name (1-100 characters).
    #[schema(example = "Dogs")]
    pub cat_name: String,
}

pub fn validate_create_category(req: &CreateCategoryRequest) -> Result<(), AppError> {
    validate_required("cat_name", &req.cat_name, 100)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Dogs")]
    pub cat_name: String,
}

impl From<crate::entity::category::Model> for CategoryResponse {
    fn from(m: crate::entity::category::Model) -> Self {
        Self {
            id: m.id,
            cat_name: m.cat_name,
        }
    }
}
