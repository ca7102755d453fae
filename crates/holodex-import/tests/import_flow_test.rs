//! Integration tests for the import orchestrator
//!
//! Records come from a scripted in-process source so each test controls
//! exactly which pages succeed, fail, or contain junk.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures::stream;
use holodex_database::test_utils::TestDatabase;
use holodex_entities::{character_films, character_starships, characters, films, starships};
use holodex_import::handlers::{configure_routes, AppState};
use holodex_import::{ImportService, ImportServiceError};
use holodex_swapi::{CatalogSource, Category, ExternalRecord, RecordStream, SwapiError};
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tower::ServiceExt;

/// Source that replays canned records and can be told to fail whole
/// categories, mimicking an upstream outage.
#[derive(Default)]
struct ScriptedSource {
    records: HashMap<Category, Vec<Value>>,
    failing: HashSet<Category>,
}

impl ScriptedSource {
    fn with_records(mut self, category: Category, records: Vec<Value>) -> Self {
        self.records.insert(category, records);
        self
    }

    fn failing(mut self, category: Category) -> Self {
        self.failing.insert(category);
        self
    }
}

impl CatalogSource for ScriptedSource {
    fn records(&self, category: Category) -> RecordStream<'_> {
        if self.failing.contains(&category) {
            let error = SwapiError::Http {
                url: format!("scripted://{}/?page=1", category),
                status: StatusCode::BAD_GATEWAY,
            };
            return Box::pin(stream::once(async move { Err(error) }));
        }

        let records: Vec<Result<ExternalRecord, SwapiError>> = self
            .records
            .get(&category)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(Ok)
            .collect();
        Box::pin(stream::iter(records))
    }
}

fn person(id: i32, name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "films": [
            format!("https://swapi.py4e.com/api/films/{}/", 1),
        ],
        "starships": [],
        "url": format!("https://swapi.py4e.com/api/people/{}/", id),
    })
}

fn film(id: i32, title: &str) -> Value {
    json!({
        "title": title,
        "episode_id": id,
        "director": "George Lucas",
        "characters": [],
        "starships": [],
        "url": format!("https://swapi.py4e.com/api/films/{}/", id),
    })
}

fn starship(id: i32, name: &str) -> Value {
    json!({
        "name": name,
        "model": "T-65 X-wing",
        "films": [
            format!("https://swapi.py4e.com/api/films/{}/", 1),
        ],
        "url": format!("https://swapi.py4e.com/api/starships/{}/", id),
    })
}

fn service_with(db: Arc<sea_orm::DatabaseConnection>, source: ScriptedSource) -> ImportService {
    ImportService::new(db, Arc::new(source))
}

#[tokio::test]
async fn first_import_creates_and_rerun_skips() {
    let test_db = TestDatabase::new().await.unwrap();
    let source = ScriptedSource::default().with_records(
        Category::People,
        vec![
            person(1, "Luke Skywalker"),
            person(2, "C-3PO"),
            person(3, "R2-D2"),
        ],
    );
    let service = service_with(test_db.db.clone(), source);

    let report = service.import_category(Category::People).await.unwrap();
    assert_eq!(report.created, 3);
    assert_eq!(report.skipped, 0);

    let report = service.import_category(Category::People).await.unwrap();
    assert_eq!(report.created, 0);
    assert_eq!(report.skipped, 3);

    let rows = characters::Entity::find()
        .all(test_db.db.as_ref())
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);
    let mut ids: Vec<i32> = rows.iter().map(|r| r.external_id).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn malformed_records_are_skipped_without_aborting() {
    let test_db = TestDatabase::new().await.unwrap();
    let source = ScriptedSource::default().with_records(
        Category::People,
        vec![
            person(1, "Luke Skywalker"),
            json!({"name": "no url here"}),
            person(3, "R2-D2"),
        ],
    );
    let service = service_with(test_db.db.clone(), source);

    let report = service.import_category(Category::People).await.unwrap();
    assert_eq!(report.created, 2);
    assert_eq!(report.skipped, 0);

    let rows = characters::Entity::find()
        .all(test_db.db.as_ref())
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn page_failure_surfaces_as_source_fetch_error() {
    let test_db = TestDatabase::new().await.unwrap();
    let source = ScriptedSource::default().failing(Category::Films);
    let service = service_with(test_db.db.clone(), source);

    let error = service.import_category(Category::Films).await.unwrap_err();
    assert!(matches!(
        error,
        ImportServiceError::SourceFetch {
            category: Category::Films,
            ..
        }
    ));
}

#[tokio::test]
async fn failed_category_does_not_abort_the_others() {
    let test_db = TestDatabase::new().await.unwrap();
    let source = ScriptedSource::default()
        .with_records(Category::People, vec![person(1, "Luke Skywalker")])
        .with_records(Category::Starships, vec![starship(12, "X-wing")])
        .failing(Category::Films);
    let service = service_with(test_db.db.clone(), source);

    let summary = service.import_all().await;

    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].category, Category::Films);

    assert_eq!(
        characters::Entity::find()
            .all(test_db.db.as_ref())
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        films::Entity::find()
            .all(test_db.db.as_ref())
            .await
            .unwrap()
            .len(),
        0
    );
    assert_eq!(
        starships::Entity::find()
            .all(test_db.db.as_ref())
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn links_are_recorded_once_across_reimports() {
    let test_db = TestDatabase::new().await.unwrap();
    let source = ScriptedSource::default()
        .with_records(
            Category::People,
            vec![json!({
                "name": "Han Solo",
                "films": [
                    "https://swapi.py4e.com/api/films/1/",
                    "https://swapi.py4e.com/api/films/2/",
                ],
                "starships": ["https://swapi.py4e.com/api/starships/10/"],
                "url": "https://swapi.py4e.com/api/people/14/",
            })],
        )
        .with_records(Category::Films, vec![film(1, "A New Hope")])
        .with_records(Category::Starships, vec![starship(10, "Millennium Falcon")]);
    let service = service_with(test_db.db.clone(), source);

    service.import_all().await;
    // Second run must not duplicate link rows
    service.import_all().await;

    let film_links = character_films::Entity::find()
        .all(test_db.db.as_ref())
        .await
        .unwrap();
    // Two from the character plus none new from the film record
    assert_eq!(film_links.len(), 2);

    let starship_links = character_starships::Entity::find()
        .all(test_db.db.as_ref())
        .await
        .unwrap();
    assert_eq!(starship_links.len(), 1);
    assert_eq!(starship_links[0].character_external_id, 14);
    assert_eq!(starship_links[0].starship_external_id, 10);
}

#[tokio::test]
async fn concurrent_imports_collapse_into_one_row_set() {
    let test_db = TestDatabase::new().await.unwrap();
    let records = vec![
        person(1, "Luke Skywalker"),
        person(2, "C-3PO"),
        person(3, "R2-D2"),
    ];
    let first = service_with(
        test_db.db.clone(),
        ScriptedSource::default().with_records(Category::People, records.clone()),
    );
    let second = service_with(
        test_db.db.clone(),
        ScriptedSource::default().with_records(Category::People, records),
    );

    let (a, b) = tokio::join!(
        first.import_category(Category::People),
        second.import_category(Category::People)
    );
    let a = a.unwrap();
    let b = b.unwrap();

    // Each record is created exactly once, no matter which run won
    assert_eq!(a.created + b.created, 3);
    assert_eq!(a.created + a.skipped, 3);
    assert_eq!(b.created + b.skipped, 3);

    let rows = characters::Entity::find()
        .all(test_db.db.as_ref())
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);
}

fn router_for(source: ScriptedSource, db: Arc<sea_orm::DatabaseConnection>) -> axum::Router {
    let state = Arc::new(AppState {
        import_service: Arc::new(service_with(db, source)),
    });
    configure_routes().with_state(state)
}

#[tokio::test]
async fn import_endpoint_returns_summary() {
    let test_db = TestDatabase::new().await.unwrap();
    let source =
        ScriptedSource::default().with_records(Category::People, vec![person(1, "Luke Skywalker")]);
    let app = router_for(source, test_db.db.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/import")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let summary: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(summary["reports"].as_array().unwrap().len(), 3);
    assert_eq!(summary["reports"][0]["category"], "people");
    assert_eq!(summary["reports"][0]["created"], 1);
}

#[tokio::test]
async fn import_endpoint_fails_when_every_category_fails() {
    let test_db = TestDatabase::new().await.unwrap();
    let source = ScriptedSource::default()
        .failing(Category::People)
        .failing(Category::Films)
        .failing(Category::Starships);
    let app = router_for(source, test_db.db.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/import")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let problem: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["title"], "Import Failed");
}

#[tokio::test]
async fn unknown_category_is_a_bad_request() {
    let test_db = TestDatabase::new().await.unwrap();
    let app = router_for(ScriptedSource::default(), test_db.db.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/import/planets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_endpoint_reports_counts() {
    let test_db = TestDatabase::new().await.unwrap();
    let source = ScriptedSource::default()
        .with_records(Category::Starships, vec![starship(12, "X-wing")]);
    let app = router_for(source, test_db.db.clone());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/import/starships")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let report: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(report["category"], "starships");
    assert_eq!(report["created"], 1);
    assert_eq!(report["skipped"], 0);
}
