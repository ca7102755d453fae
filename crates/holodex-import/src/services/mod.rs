//! Import orchestration services

mod importer;

pub use importer::{CategoryImportReport, FailedCategory, ImportService, ImportSummary};

use axum::http::StatusCode;
use holodex_core::problemdetails::{self, Problem};
use holodex_swapi::{Category, SwapiError, UnknownCategory};
use thiserror::Error;

/// Import service errors
#[derive(Error, Debug)]
pub enum ImportServiceError {
    #[error("source fetch failed for {category}: {source}")]
    SourceFetch {
        category: Category,
        #[source]
        source: SwapiError,
    },

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
}

/// Result type for import services
pub type ImportServiceResult<T> = Result<T, ImportServiceError>;

impl From<ImportServiceError> for Problem {
    fn from(error: ImportServiceError) -> Self {
        match error {
            ImportServiceError::SourceFetch { .. } => problemdetails::new(StatusCode::BAD_GATEWAY)
                .with_title("Source Fetch Failed")
                .with_detail(error.to_string()),
            ImportServiceError::Database(e) => {
                problemdetails::new(StatusCode::INTERNAL_SERVER_ERROR)
                    .with_title("Database Error")
                    .with_detail(e.to_string())
            }
            ImportServiceError::UnknownCategory(e) => problemdetails::new(StatusCode::BAD_REQUEST)
                .with_title("Unknown Category")
                .with_detail(e.to_string()),
        }
    }
}
