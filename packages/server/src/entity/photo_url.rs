use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photo_url")]
pub struct Model {
    /// The URL is the row identity.
    #[sea_orm(primary_key, auto_increment = false)]
    pub url: String,

    pub pet_id: i32,
}

impl ActiveModelBehavior for ActiveModel {}
