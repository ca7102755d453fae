use axum::Router;
use clap::Args;
use holodex_catalog::CatalogService;
use holodex_import::ImportService;
use holodex_swapi::{SwapiClient, DEFAULT_BASE_URL};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:3000", env = "HOLODEX_ADDRESS")]
    pub address: String,

    /// Database connection URL
    #[arg(
        long,
        default_value = "sqlite://holodex.db?mode=rwc",
        env = "HOLODEX_DATABASE_URL"
    )]
    pub database_url: String,

    /// Base URL of the upstream catalog API
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "HOLODEX_SWAPI_URL")]
    pub swapi_url: String,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run())
    }

    async fn run(self) -> anyhow::Result<()> {
        debug!("Initializing database connection...");
        let db = holodex_database::establish_connection(&self.database_url).await?;

        let source = Arc::new(SwapiClient::new(self.swapi_url.clone()));
        let import_state = Arc::new(holodex_import::handlers::AppState {
            import_service: Arc::new(ImportService::new(db.clone(), source)),
        });
        let catalog_state = Arc::new(holodex_catalog::handlers::AppState {
            catalog_service: Arc::new(CatalogService::new(db.clone())),
        });

        let mut api_doc = holodex_import::handlers::ImportApiDoc::openapi();
        api_doc.merge(holodex_catalog::handlers::CatalogApiDoc::openapi());

        let app = Router::new()
            .merge(holodex_import::handlers::configure_routes().with_state(import_state))
            .merge(holodex_catalog::handlers::configure_routes().with_state(catalog_state))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let listener = TcpListener::bind(&self.address).await?;
        info!("Holodex server listening on {}", self.address);
        info!("Swagger UI available at http://{}/swagger-ui", self.address);

        axum::serve(listener, app).into_future().await?;
        Ok(())
    }
}
