pub mod category;
pub mod health;
pub mod order;
pub mod pet;
pub mod photo_url;
pub mod status;
pub mod tag;
pub mod user;
