pub mod category;
pub mod order;
pub mod pet;
pub mod pet_tag;
pub mod photo_url;
pub mod status;
pub mod tag;
pub mod user;
