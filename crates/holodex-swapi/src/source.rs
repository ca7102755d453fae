//! The seam between the source client and the import path

use futures::stream::BoxStream;

use crate::category::Category;
use crate::client::SwapiError;

/// A raw record exactly as the upstream catalog returned it. Never
/// persisted as-is; the import path maps it to a local entity.
pub type ExternalRecord = serde_json::Value;

/// Lazy, ordered sequence of records for one category.
pub type RecordStream<'a> = BoxStream<'a, Result<ExternalRecord, SwapiError>>;

/// Trait for record sources the import orchestrator can drain.
pub trait CatalogSource: Send + Sync {
    /// Produce the full record stream for a category, page order then
    /// in-page order. Every call re-fetches from the start; nothing is
    /// cached between invocations. A page-level fetch failure surfaces
    /// as an `Err` item and terminates the stream rather than silently
    /// truncating it.
    fn records(&self, category: Category) -> RecordStream<'_>;
}
