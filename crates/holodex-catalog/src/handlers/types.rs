use crate::services::{CatalogService, SearchResults};
use holodex_entities::{characters, films, starships};
use sea_orm::prelude::DateTimeUtc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Application state for catalog handlers
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
}

/// Pagination parameters for listing endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Parameters for the name search endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuery {
    pub term: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CharacterResponse {
    pub id: i32,
    pub external_id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    #[schema(value_type = String)]
    pub created_at: DateTimeUtc,
}

impl From<characters::Model> for CharacterResponse {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
            skin_color: model.skin_color,
            eye_color: model.eye_color,
            birth_year: model.birth_year,
            gender: model.gender,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilmResponse {
    pub id: i32,
    pub external_id: i32,
    pub name: String,
    pub episode_id: Option<String>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
    #[schema(value_type = String)]
    pub created_at: DateTimeUtc,
}

impl From<films::Model> for FilmResponse {
    fn from(model: films::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id,
            name: model.name,
            episode_id: model.episode_id,
            opening_crawl: model.opening_crawl,
            director: model.director,
            producer: model.producer,
            release_date: model.release_date,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StarshipResponse {
    pub id: i32,
    pub external_id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub hyperdrive_rating: Option<String>,
    pub mglt: Option<String>,
    pub starship_class: Option<String>,
    #[schema(value_type = String)]
    pub created_at: DateTimeUtc,
}

impl From<starships::Model> for StarshipResponse {
    fn from(model: starships::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id,
            name: model.name,
            model: model.model,
            manufacturer: model.manufacturer,
            cost_in_credits: model.cost_in_credits,
            length: model.length,
            max_atmosphering_speed: model.max_atmosphering_speed,
            crew: model.crew,
            passengers: model.passengers,
            cargo_capacity: model.cargo_capacity,
            consumables: model.consumables,
            hyperdrive_rating: model.hyperdrive_rating,
            mglt: model.mglt,
            starship_class: model.starship_class,
            created_at: model.created_at,
        }
    }
}

/// Name matches grouped per category
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub characters: Vec<CharacterResponse>,
    pub films: Vec<FilmResponse>,
    pub starships: Vec<StarshipResponse>,
}

impl From<SearchResults> for SearchResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            characters: results.characters.into_iter().map(Into::into).collect(),
            films: results.films.into_iter().map(Into::into).collect(),
            starships: results.starships.into_iter().map(Into::into).collect(),
        }
    }
}
