//! Storage access for every resource.
//!
//! Functions are generic over [`sea_orm::ConnectionTrait`] so handlers can run
//! them on the pool or inside a transaction. Lookup misses come back as
//! [`AppError::NotFound`] and unique-constraint violations as
//! [`AppError::Conflict`].

pub mod category;
pub mod order;
pub mod pet;
pub mod photo_url;
pub mod status;
pub mod tag;
pub mod user;

use sea_orm::{DbErr, SqlErr};

use crate::error::AppError;

/// Map a unique-constraint violation to `Conflict`, anything else to `Internal`.
pub(crate) fn conflict_on_unique(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Unique constraint violated");
            AppError::Conflict(message.to_string())
        }
        _ => AppError::from(err),
    }
}
