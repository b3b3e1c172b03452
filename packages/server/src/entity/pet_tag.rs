use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Association row linking a tag to a pet.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub pet_id: i32,
    #[sea_orm(belongs_to, from = "tag_id", to = "id", on_delete = "Cascade")]
    pub tag: BelongsTo<super::tag::Entity>,
    #[sea_orm(belongs_to, from = "pet_id", to = "id", on_delete = "Cascade")]
    pub pet: BelongsTo<super::pet::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
