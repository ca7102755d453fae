//! HTTP trigger endpoints for import operations

mod types;

pub use types::AppState;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use holodex_core::problemdetails::{self, Problem};
use holodex_swapi::Category;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::services::{CategoryImportReport, FailedCategory, ImportSummary};

#[derive(OpenApi)]
#[openapi(
    paths(import_all, import_category),
    components(schemas(ImportSummary, CategoryImportReport, FailedCategory, Category)),
    info(
        title = "Import API",
        description = "API endpoints for triggering catalog imports. \
        Imports are idempotent; records already mirrored locally are skipped.",
        version = "1.0.0"
    )
)]
pub struct ImportApiDoc;

pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/import", post(import_all))
        .route("/import/{category}", post(import_category))
}

/// Import every catalog category
#[utoipa::path(
    tag = "Import",
    post,
    path = "import",
    responses(
        (status = 200, description = "Import summary with per-category counts", body = ImportSummary),
        (status = 502, description = "No category could be imported"),
        (status = 500, description = "Internal server error")
    )
)]
async fn import_all(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Problem> {
    let summary = app_state.import_service.import_all().await;

    if summary.reports.is_empty() && !summary.failed.is_empty() {
        let detail = summary
            .failed
            .iter()
            .map(|f| f.error.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(problemdetails::new(StatusCode::BAD_GATEWAY)
            .with_title("Import Failed")
            .with_detail(detail));
    }

    Ok(Json(summary))
}

/// Import a single catalog category
#[utoipa::path(
    tag = "Import",
    post,
    path = "import/{category}",
    params(
        ("category", Path, description = "Catalog category (people, films or starships)")
    ),
    responses(
        (status = 200, description = "Import report for the category", body = CategoryImportReport),
        (status = 400, description = "Unknown category"),
        (status = 502, description = "Source fetch failed"),
        (status = 500, description = "Internal server error")
    )
)]
async fn import_category(
    State(app_state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, Problem> {
    let category: Category = category
        .parse()
        .map_err(crate::services::ImportServiceError::from)?;

    let report = app_state.import_service.import_category(category).await?;
    Ok(Json(report))
}
