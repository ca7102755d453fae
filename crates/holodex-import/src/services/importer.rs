//! Import orchestrator service
//!
//! Drains the record stream for each category, maps records to local
//! entities, and upserts them keyed on the upstream identifier. The
//! existence check is backed by the unique index on `external_id`, so a
//! racing concurrent import degrades into a skip instead of a duplicate
//! row.

use futures::StreamExt;
use holodex_entities::{character_films, character_starships, characters, films, starship_films, starships};
use holodex_swapi::{CatalogSource, Category, ExternalRecord};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;

use super::{ImportServiceError, ImportServiceResult};
use crate::mapping;

/// Outcome of one category import
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryImportReport {
    pub category: Category,
    /// Records persisted for the first time during this run
    pub created: u64,
    /// Records whose identity already existed locally
    pub skipped: u64,
}

/// A category whose import did not complete
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FailedCategory {
    pub category: Category,
    pub error: String,
}

/// Outcome of an import run across categories
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImportSummary {
    pub reports: Vec<CategoryImportReport>,
    pub failed: Vec<FailedCategory>,
}

enum UpsertOutcome {
    Created,
    Skipped,
}

/// Import orchestrator coordinating source, mapping and storage
pub struct ImportService {
    db: Arc<DatabaseConnection>,
    source: Arc<dyn CatalogSource>,
}

impl ImportService {
    /// Create a new import service. Both the storage handle and the
    /// record source are injected; the service holds no other state.
    pub fn new(db: Arc<DatabaseConnection>, source: Arc<dyn CatalogSource>) -> Self {
        Self { db, source }
    }

    /// Import every category. A category whose fetch fails is reported
    /// in the summary and does not abort the remaining categories.
    pub async fn import_all(&self) -> ImportSummary {
        let mut summary = ImportSummary {
            reports: Vec::new(),
            failed: Vec::new(),
        };

        for category in Category::all() {
            match self.import_category(category).await {
                Ok(report) => summary.reports.push(report),
                Err(e) => {
                    warn!("Import of {} failed: {}", category, e);
                    summary.failed.push(FailedCategory {
                        category,
                        error: e.to_string(),
                    });
                }
            }
        }

        summary
    }

    /// Import one category, upserting records in the order the source
    /// yields them.
    pub async fn import_category(
        &self,
        category: Category,
    ) -> ImportServiceResult<CategoryImportReport> {
        info!("Importing category: {}", category);

        let mut created = 0u64;
        let mut skipped = 0u64;

        let mut records = self.source.records(category);
        while let Some(item) = records.next().await {
            let record = item.map_err(|source| ImportServiceError::SourceFetch {
                category,
                source,
            })?;

            // A record without a derivable identity is a data issue in the
            // source, not a reason to abort the category.
            let external_id = match mapping::external_id(&record) {
                Ok(id) => id,
                Err(e) => {
                    warn!("Skipping malformed {} record: {}", category, e);
                    continue;
                }
            };

            let outcome = match category {
                Category::People => self.upsert_character(external_id, &record).await?,
                Category::Films => self.upsert_film(external_id, &record).await?,
                Category::Starships => self.upsert_starship(external_id, &record).await?,
            };

            match outcome {
                UpsertOutcome::Created => created += 1,
                UpsertOutcome::Skipped => skipped += 1,
            }
        }

        info!(
            "Imported {}: {} created, {} skipped",
            category, created, skipped
        );

        Ok(CategoryImportReport {
            category,
            created,
            skipped,
        })
    }

    async fn upsert_character(
        &self,
        external_id: i32,
        record: &ExternalRecord,
    ) -> ImportServiceResult<UpsertOutcome> {
        let existing = characters::Entity::find()
            .filter(characters::Column::ExternalId.eq(external_id))
            .one(self.db.as_ref())
            .await?;
        if existing.is_some() {
            return Ok(UpsertOutcome::Skipped);
        }

        match characters::Entity::insert(mapping::character(external_id, record))
            .on_conflict(
                OnConflict::column(characters::Column::ExternalId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await
        {
            Ok(_) => {}
            // A racing import created the row between our check and the
            // insert; identical to "already exists".
            Err(DbErr::RecordNotInserted) => return Ok(UpsertOutcome::Skipped),
            Err(e) => return Err(e.into()),
        }

        let film_links: Vec<character_films::ActiveModel> =
            mapping::referenced_ids(record, "films")
                .into_iter()
                .map(|film_id| character_films::ActiveModel {
                    character_external_id: Set(external_id),
                    film_external_id: Set(film_id),
                })
                .collect();
        insert_ignoring_conflicts(
            self.db.as_ref(),
            film_links,
            OnConflict::columns([
                character_films::Column::CharacterExternalId,
                character_films::Column::FilmExternalId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .await?;

        let starship_links: Vec<character_starships::ActiveModel> =
            mapping::referenced_ids(record, "starships")
                .into_iter()
                .map(|starship_id| character_starships::ActiveModel {
                    character_external_id: Set(external_id),
                    starship_external_id: Set(starship_id),
                })
                .collect();
        insert_ignoring_conflicts(
            self.db.as_ref(),
            starship_links,
            OnConflict::columns([
                character_starships::Column::CharacterExternalId,
                character_starships::Column::StarshipExternalId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .await?;

        Ok(UpsertOutcome::Created)
    }

    async fn upsert_film(
        &self,
        external_id: i32,
        record: &ExternalRecord,
    ) -> ImportServiceResult<UpsertOutcome> {
        let existing = films::Entity::find()
            .filter(films::Column::ExternalId.eq(external_id))
            .one(self.db.as_ref())
            .await?;
        if existing.is_some() {
            return Ok(UpsertOutcome::Skipped);
        }

        match films::Entity::insert(mapping::film(external_id, record))
            .on_conflict(
                OnConflict::column(films::Column::ExternalId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await
        {
            Ok(_) => {}
            Err(DbErr::RecordNotInserted) => return Ok(UpsertOutcome::Skipped),
            Err(e) => return Err(e.into()),
        }

        let character_links: Vec<character_films::ActiveModel> =
            mapping::referenced_ids(record, "characters")
                .into_iter()
                .map(|character_id| character_films::ActiveModel {
                    character_external_id: Set(character_id),
                    film_external_id: Set(external_id),
                })
                .collect();
        insert_ignoring_conflicts(
            self.db.as_ref(),
            character_links,
            OnConflict::columns([
                character_films::Column::CharacterExternalId,
                character_films::Column::FilmExternalId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .await?;

        let starship_links: Vec<starship_films::ActiveModel> =
            mapping::referenced_ids(record, "starships")
                .into_iter()
                .map(|starship_id| starship_films::ActiveModel {
                    starship_external_id: Set(starship_id),
                    film_external_id: Set(external_id),
                })
                .collect();
        insert_ignoring_conflicts(
            self.db.as_ref(),
            starship_links,
            OnConflict::columns([
                starship_films::Column::StarshipExternalId,
                starship_films::Column::FilmExternalId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .await?;

        Ok(UpsertOutcome::Created)
    }

    async fn upsert_starship(
        &self,
        external_id: i32,
        record: &ExternalRecord,
    ) -> ImportServiceResult<UpsertOutcome> {
        let existing = starships::Entity::find()
            .filter(starships::Column::ExternalId.eq(external_id))
            .one(self.db.as_ref())
            .await?;
        if existing.is_some() {
            return Ok(UpsertOutcome::Skipped);
        }

        match starships::Entity::insert(mapping::starship(external_id, record))
            .on_conflict(
                OnConflict::column(starships::Column::ExternalId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await
        {
            Ok(_) => {}
            Err(DbErr::RecordNotInserted) => return Ok(UpsertOutcome::Skipped),
            Err(e) => return Err(e.into()),
        }

        let film_links: Vec<starship_films::ActiveModel> =
            mapping::referenced_ids(record, "films")
                .into_iter()
                .map(|film_id| starship_films::ActiveModel {
                    starship_external_id: Set(external_id),
                    film_external_id: Set(film_id),
                })
                .collect();
        insert_ignoring_conflicts(
            self.db.as_ref(),
            film_links,
            OnConflict::columns([
                starship_films::Column::StarshipExternalId,
                starship_films::Column::FilmExternalId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .await?;

        Ok(UpsertOutcome::Created)
    }
}

/// Insert link rows, ignoring the ones that already exist.
async fn insert_ignoring_conflicts<A>(
    db: &DatabaseConnection,
    models: Vec<A>,
    conflict: OnConflict,
) -> Result<(), DbErr>
where
    A: ActiveModelTrait + Send,
{
    if models.is_empty() {
        return Ok(());
    }

    match <A::Entity as EntityTrait>::insert_many(models)
        .on_conflict(conflict)
        .exec(db)
        .await
    {
        Ok(_) => Ok(()),
        // Every row already existed
        Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(e),
    }
}
