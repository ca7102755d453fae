//! Database entities for the Holodex catalog mirror
//!
//! One table per catalog category (`characters`, `films`, `starships`)
//! plus the many-to-many link tables between them. Every category row
//! carries the identifier assigned by the upstream catalog
//! (`external_id`, unique per table) alongside the locally assigned
//! primary key.

pub mod character_films;
pub mod character_starships;
pub mod characters;
pub mod films;
pub mod starship_films;
pub mod starships;
