pub mod category;
pub mod order;
pub mod pet;
pub mod photo_url;
pub mod shared;
pub mod status;
pub mod tag;
pub mod user;
