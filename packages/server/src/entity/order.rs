use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub pet_id: i32,
    pub quantity: i32,
    pub shipdate: DateTime,
    pub complete: bool,
    pub status_id: i32,
}

impl ActiveModelBehavior for ActiveModel {}
