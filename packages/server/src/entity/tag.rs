use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub tag_name: String,

    #[sea_orm(has_many, via = "pet_tag")]
    pub pets: HasMany<super::pet::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
