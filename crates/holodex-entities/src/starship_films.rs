//! Starship-Film many-to-many link table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "starship_films")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub starship_external_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_external_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::starships::Entity",
        from = "Column::StarshipExternalId",
        to = "super::starships::Column::ExternalId"
    )]
    Starship,
    #[sea_orm(
        belongs_to = "super::films::Entity",
        from = "Column::FilmExternalId",
        to = "super::films::Column::ExternalId"
    )]
    Film,
}

impl Related<super::starships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl Related<super::films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
