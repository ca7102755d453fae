//! Character-Film many-to-many link table.
//!
//! Link rows are keyed by the upstream identifiers of both sides, not the
//! local primary keys, because a record can reference entities that have
//! not been imported yet.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "character_films")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub character_external_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_external_id: i32,
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
        belongs_to = "super::films::Entity",
        from = "Column::FilmExternalId",
        to = "super::films::Column::ExternalId"
    )]
    Film,
}

impl Related<super::characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
