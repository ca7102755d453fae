//! Holodex Catalog Read API
//!
//! Query endpoints over the mirrored catalog: paginated listings per
//! category, lookup by local identifier, and a name search spanning all
//! categories. Everything here reads the local store only; nothing in
//! this crate talks to the upstream source.
//!
//! # Architecture
//!
//! - **Handlers**: HTTP read endpoints and response shapes
//! - **Services**: query logic over the local store

pub mod handlers;
pub mod services;

pub use services::{CatalogService, CatalogServiceError, SearchResults};
