//! Static field mapping from upstream payloads to local entities
//!
//! One mapper per category, each declaring every persisted column and
//! where it comes from in the source payload. All attributes are text;
//! a missing or null source key defaults to the upstream's own `n/a`
//! placeholder. Only the identifier derivation can fail.

use holodex_entities::{characters, films, starships};
use sea_orm::ActiveValue::{self, NotSet, Set};
use serde_json::Value;
use thiserror::Error;

/// Placeholder the upstream catalog uses for unknown values; missing
/// attribute keys default to it as well.
pub const NA: &str = "n/a";

/// A record that cannot be mapped to a local identity
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("record has no url field to derive an identifier from")]
    MissingUrl,

    #[error("cannot parse an identifier from url: {0}")]
    UnparseableId(String),
}

/// Derive the category-scoped identifier from the record's canonical URL.
/// The identifier is the last non-empty path segment and must be numeric.
pub fn external_id(record: &Value) -> Result<i32, MappingError> {
    let url = record
        .get("url")
        .and_then(Value::as_str)
        .ok_or(MappingError::MissingUrl)?;

    parse_id(url).ok_or_else(|| MappingError::UnparseableId(url.to_string()))
}

fn parse_id(url: &str) -> Option<i32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Identifiers referenced by a record's URL array under `key`.
/// Entries without a parseable identifier are ignored.
pub fn referenced_ids(record: &Value, key: &str) -> Vec<i32> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|urls| {
            urls.iter()
                .filter_map(Value::as_str)
                .filter_map(parse_id)
                .collect()
        })
        .unwrap_or_default()
}

fn text_or_na(record: &Value, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => NA.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn attr(record: &Value, key: &str) -> ActiveValue<Option<String>> {
    Set(Some(text_or_na(record, key)))
}

/// Mapping table for the `people` category.
pub fn character(external_id: i32, record: &Value) -> characters::ActiveModel {
    characters::ActiveModel {
        id: NotSet,
        external_id: Set(external_id),
        name: Set(text_or_na(record, "name")),
        height: attr(record, "height"),
        mass: attr(record, "mass"),
        hair_color: attr(record, "hair_color"),
        skin_color: attr(record, "skin_color"),
        eye_color: attr(record, "eye_color"),
        birth_year: attr(record, "birth_year"),
        gender: attr(record, "gender"),
        created_at: NotSet,
    }
}

/// Mapping table for the `films` category. The local `name` comes from
/// the upstream `title` key.
pub fn film(external_id: i32, record: &Value) -> films::ActiveModel {
    films::ActiveModel {
        id: NotSet,
        external_id: Set(external_id),
        name: Set(text_or_na(record, "title")),
        episode_id: attr(record, "episode_id"),
        opening_crawl: attr(record, "opening_crawl"),
        director: attr(record, "director"),
        producer: attr(record, "producer"),
        release_date: attr(record, "release_date"),
        created_at: NotSet,
    }
}

/// Mapping table for the `starships` category.
pub fn starship(external_id: i32, record: &Value) -> starships::ActiveModel {
    starships::ActiveModel {
        id: NotSet,
        external_id: Set(external_id),
        name: Set(text_or_na(record, "name")),
        model: attr(record, "model"),
        manufacturer: attr(record, "manufacturer"),
        cost_in_credits: attr(record, "cost_in_credits"),
        length: attr(record, "length"),
        max_atmosphering_speed: attr(record, "max_atmosphering_speed"),
        crew: attr(record, "crew"),
        passengers: attr(record, "passengers"),
        cargo_capacity: attr(record, "cargo_capacity"),
        consumables: attr(record, "consumables"),
        hyperdrive_rating: attr(record, "hyperdrive_rating"),
        mglt: attr(record, "MGLT"),
        starship_class: attr(record, "starship_class"),
        created_at: NotSet,
    }
}
