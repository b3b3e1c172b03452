use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Textual format accepted for `shipdate`.
pub const SHIPDATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = 1)]
    pub pet_id: i32,
    #[schema(example = 2)]
    pub quantity: i32,
    /// Ship date as `YYYY-MM-DD HH:MM:SS`.
    #[schema(example = "2024-05-01 10:30:00")]
    pub shipdate: String,
    #[schema(example = false)]
    pub complete: bool,
    #[schema(example = 1)]
    pub status_id: i32,
}

/// Validate the request and return the parsed ship date.
pub fn validate_create_order(req: &CreateOrderRequest) -> Result<NaiveDateTime, AppError> {
    if req.quantity < 0 {
        return Err(AppError::Validation("quantity must be >= 0".into()));
    }
    parse_shipdate(&req.shipdate)
}

pub fn parse_shipdate(raw: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(raw, SHIPDATE_FORMAT).map_err(|_| {
        AppError::Validation(format!(
            "shipdate '{raw}' does not match YYYY-MM-DD HH:MM:SS"
        ))
    })
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct OrderResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub pet_id: i32,
    #[schema(example = 2)]
    pub quantity: i32,
    #[schema(value_type = String, example = "2024-05-01T10:30:00")]
    pub shipdate: NaiveDateTime,
    #[schema(example = false)]
    pub complete: bool,
    #[schema(example = 1)]
    pub status_id: i32,
}

impl From<crate::entity::order::Model> for OrderResponse {
    fn from(m: crate::entity::order::Model) -> Self {
        Self {
            id: m.id,
            pet_id: m.pet_id,
            quantity: m.quantity,
            shipdate: m.shipdate,
            complete: m.complete,
            status_id: m.status_id,
        }
    }
}
