use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "films")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identifier assigned by the upstream catalog (unique per table)
    pub external_id: i32,
    /// The film title (the upstream payload calls this `title`)
    pub name: String,
    pub episode_id: Option<String>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
    #[schema(value_type = String)]
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character_films::Entity")]
    CharacterFilms,
    #[sea_orm(has_many = "super::starship_films::Entity")]
    StarshipFilms,
}

impl Related<super::character_films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFilms.def()
    }
}

impl Related<super::starship_films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarshipFilms.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(chrono::Utc::now());
        }

        Ok(self)
    }
}
