//! Holodex Import Orchestrator
//!
//! This crate drives the mirror: it drains the record stream for each
//! catalog category from the source client, maps every record to a local
//! entity through a statically declared field mapping, and upserts it
//! keyed on the upstream identifier. Re-running an import is always safe;
//! existing rows are skipped, never refreshed.
//!
//! # Architecture
//!
//! - **Handlers**: HTTP trigger endpoints for import operations
//! - **Services**: orchestration and upsert logic
//! - **Mapping**: upstream payload to local entity translation

pub mod handlers;
pub mod mapping;
pub mod services;

pub use services::{
    CategoryImportReport, FailedCategory, ImportService, ImportServiceError, ImportSummary,
};
