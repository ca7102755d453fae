//! Catalog query services

mod catalog;

pub use catalog::{CatalogService, SearchResults, MAX_PAGE_SIZE};

use axum::http::StatusCode;
use holodex_core::problemdetails::{self, Problem};
use thiserror::Error;

/// Catalog service errors
#[derive(Error, Debug)]
pub enum CatalogServiceError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Result type for catalog services
pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

impl From<CatalogServiceError> for Problem {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::NotFound { .. } => problemdetails::new(StatusCode::NOT_FOUND)
                .with_title("Not Found")
                .with_detail(error.to_string()),
            CatalogServiceError::Database(e) => {
                problemdetails::new(StatusCode::INTERNAL_SERVER_ERROR)
                    .with_title("Database Error")
                    .with_detail(e.to_string())
            }
        }
    }
}
