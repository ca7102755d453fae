//! Source client for the upstream Star Wars catalog (SWAPI)
//!
//! This crate owns everything about talking to the external catalog:
//! the fixed set of categories, page-following record streams, and
//! transient-failure retries. Consumers go through the [`CatalogSource`]
//! trait so the import path can be tested against scripted sources.

mod category;
mod client;
mod source;

pub use category::{Category, UnknownCategory};
pub use client::{RetryPolicy, SwapiClient, SwapiError, DEFAULT_BASE_URL};
pub use source::{CatalogSource, ExternalRecord, RecordStream};
