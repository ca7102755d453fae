use crate::services::ImportService;
use std::sync::Arc;

/// Application state for import handlers
pub struct AppState {
    pub import_service: Arc<ImportService>,
}
