//! Query service over the mirrored catalog

use holodex_entities::{characters, films, starships};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use tracing::debug;

use super::{CatalogServiceError, CatalogServiceResult};

/// Upper bound on a single listing page.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Name matches grouped per category
#[derive(Debug, Default)]
pub struct SearchResults {
    pub characters: Vec<characters::Model>,
    pub films: Vec<films::Model>,
    pub starships: Vec<starships::Model>,
}

/// Read-only query service over the local store
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
}

impl CatalogService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn page(offset: Option<u64>, limit: Option<u64>) -> (u64, u64) {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(MAX_PAGE_SIZE).min(MAX_PAGE_SIZE);
        (offset, limit)
    }

    pub async fn list_characters(
        &self,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> CatalogServiceResult<Vec<characters::Model>> {
        let (offset, limit) = Self::page(offset, limit);
        Ok(characters::Entity::find()
            .order_by_asc(characters::Column::Name)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await?)
    }

    pub async fn get_character(&self, id: i32) -> CatalogServiceResult<characters::Model> {
        characters::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(CatalogServiceError::NotFound {
                resource: format!("character {}", id),
            })
    }

    pub async fn list_films(
        &self,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> CatalogServiceResult<Vec<films::Model>> {
        let (offset, limit) = Self::page(offset, limit);
        Ok(films::Entity::find()
            .order_by_asc(films::Column::Name)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await?)
    }

    pub async fn get_film(&self, id: i32) -> CatalogServiceResult<films::Model> {
        films::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(CatalogServiceError::NotFound {
                resource: format!("film {}", id),
            })
    }

    pub async fn list_starships(
        &self,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> CatalogServiceResult<Vec<starships::Model>> {
        let (offset, limit) = Self::page(offset, limit);
        Ok(starships::Entity::find()
            .order_by_asc(starships::Column::Name)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await?)
    }

    pub async fn get_starship(&self, id: i32) -> CatalogServiceResult<starships::Model> {
        starships::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(CatalogServiceError::NotFound {
                resource: format!("starship {}", id),
            })
    }

    /// Find every record whose name contains `term`, grouped per
    /// category. Matching is a plain substring match, case-insensitive
    /// for ASCII under SQLite's LIKE semantics.
    pub async fn search(&self, term: &str) -> CatalogServiceResult<SearchResults> {
        debug!("Searching catalog for term: {}", term);

        let characters = characters::Entity::find()
            .filter(characters::Column::Name.contains(term))
            .order_by_asc(characters::Column::Name)
            .all(self.db.as_ref())
            .await?;

        let films = films::Entity::find()
            .filter(films::Column::Name.contains(term))
            .order_by_asc(films::Column::Name)
            .all(self.db.as_ref())
            .await?;

        let starships = starships::Entity::find()
            .filter(starships::Column::Name.contains(term))
            .order_by_asc(starships::Column::Name)
            .all(self.db.as_ref())
            .await?;

        Ok(SearchResults {
            characters,
            films,
            starships,
        })
    }
}
