//! Character-Starship many-to-many link table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "character_starships")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub character_external_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub starship_external_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::characters::Entity",
        from = "Column::CharacterExternalId",
        to = "super::characters::Column::ExternalId"
    )]
    Character,
    #[sea_orm(
        belongs_to = "super::starships::Entity",
        from = "Column::StarshipExternalId",
        to = "super::starships::Column::ExternalId"
    )]
    Starship,
}

impl Related<super::characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::starships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
