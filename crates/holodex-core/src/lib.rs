//! Core utilities and types shared across all Holodex crates

pub mod error;
pub mod problemdetails;

pub use error::{ServiceError, ServiceResult};
pub use problemdetails::Problem;

// Re-export external dependencies
pub use anyhow;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tracing;
