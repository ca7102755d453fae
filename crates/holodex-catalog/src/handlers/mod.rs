//! HTTP read endpoints over the mirrored catalog

mod types;

pub use types::{
    AppState, CharacterResponse, FilmResponse, ListQuery, SearchQuery, SearchResponse,
    StarshipResponse,
};

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use holodex_core::problemdetails::Problem;
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_characters,
        get_character,
        list_films,
        get_film,
        list_starships,
        get_starship,
        search
    ),
    components(schemas(
        CharacterResponse,
        FilmResponse,
        StarshipResponse,
        SearchResponse,
        ListQuery,
        SearchQuery
    )),
    info(
        title = "Catalog API",
        description = "Query endpoints over the locally mirrored catalog: \
        paginated listings, lookup by identifier, and name search.",
        version = "1.0.0"
    )
)]
pub struct CatalogApiDoc;

pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/characters", get(list_characters))
        .route("/characters/{id}", get(get_character))
        .route("/films", get(list_films))
        .route("/films/{id}", get(get_film))
        .route("/starships", get(list_starships))
        .route("/starships/{id}", get(get_starship))
        .route("/search", get(search))
}

/// List mirrored characters ordered by name
#[utoipa::path(
    tag = "Catalog",
    get,
    path = "characters",
    params(
        ("offset", Query, description = "Number of records to skip"),
        ("limit", Query, description = "Maximum number of records to return (capped at 100)")
    ),
    responses(
        (status = 200, description = "List of characters", body = Vec<CharacterResponse>),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_characters(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Problem> {
    let models = app_state
        .catalog_service
        .list_characters(query.offset, query.limit)
        .await?;
    let responses: Vec<CharacterResponse> = models.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get a character by its local identifier
#[utoipa::path(
    tag = "Catalog",
    get,
    path = "characters/{id}",
    responses(
        (status = 200, description = "Character details", body = CharacterResponse),
        (status = 404, description = "Character not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_character(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    let model = app_state.catalog_service.get_character(id).await?;
    Ok(Json(CharacterResponse::from(model)))
}

/// List mirrored films ordered by name
#[utoipa::path(
    tag = "Catalog",
    get,
    path = "films",
    params(
        ("offset", Query, description = "Number of records to skip"),
        ("limit", Query, description = "Maximum number of records to return (capped at 100)")
    ),
    responses(
        (status = 200, description = "List of films", body = Vec<FilmResponse>),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_films(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Problem> {
    let models = app_state
        .catalog_service
        .list_films(query.offset, query.limit)
        .await?;
    let responses: Vec<FilmResponse> = models.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get a film by its local identifier
#[utoipa::path(
    tag = "Catalog",
    get,
    path = "films/{id}",
    responses(
        (status = 200, description = "Film details", body = FilmResponse),
        (status = 404, description = "Film not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_film(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    let model = app_state.catalog_service.get_film(id).await?;
    Ok(Json(FilmResponse::from(model)))
}

/// List mirrored starships ordered by name
#[utoipa::path(
    tag = "Catalog",
    get,
    path = "starships",
    params(
        ("offset", Query, description = "Number of records to skip"),
        ("limit", Query, description = "Maximum number of records to return (capped at 100)")
    ),
    responses(
        (status = 200, description = "List of starships", body = Vec<StarshipResponse>),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_starships(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Problem> {
    let models = app_state
        .catalog_service
        .list_starships(query.offset, query.limit)
        .await?;
    let responses: Vec<StarshipResponse> = models.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get a starship by its local identifier
#[utoipa::path(
    tag = "Catalog",
    get,
    path = "starships/{id}",
    responses(
        (status = 200, description = "Starship details", body = StarshipResponse),
        (status = 404, description = "Starship not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_starship(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    let model = app_state.catalog_service.get_starship(id).await?;
    Ok(Json(StarshipResponse::from(model)))
}

/// Search every category by name substring
#[utoipa::path(
    tag = "Catalog",
    get,
    path = "search",
    params(
        ("term", Query, description = "Substring to match against record names")
    ),
    responses(
        (status = 200, description = "Matches grouped per category", body = SearchResponse),
        (status = 500, description = "Internal server error")
    )
)]
async fn search(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Problem> {
    let results = app_state.catalog_service.search(&query.term).await?;
    Ok(Json(SearchResponse::from(results)))
}
