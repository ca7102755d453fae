//! Integration tests for the catalog read API

use axum::body::Body;
use axum::http::{Request, StatusCode};
use holodex_catalog::handlers::{configure_routes, AppState};
use holodex_catalog::CatalogService;
use holodex_database::test_utils::TestDatabase;
use holodex_entities::{characters, films, starships};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn seed_character(db: &DatabaseConnection, external_id: i32, name: &str) -> characters::Model {
    characters::ActiveModel {
        external_id: Set(external_id),
        name: Set(name.to_string()),
        height: Set(Some("172".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn seed_film(db: &DatabaseConnection, external_id: i32, name: &str) -> films::Model {
    films::ActiveModel {
        external_id: Set(external_id),
        name: Set(name.to_string()),
        director: Set(Some("George Lucas".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn seed_starship(db: &DatabaseConnection, external_id: i32, name: &str) -> starships::Model {
    starships::ActiveModel {
        external_id: Set(external_id),
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

fn router_for(db: Arc<DatabaseConnection>) -> axum::Router {
    let state = Arc::new(AppState {
        catalog_service: Arc::new(CatalogService::new(db)),
    });
    configure_routes().with_state(state)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn lists_characters_ordered_by_name() {
    let test_db = TestDatabase::new().await.unwrap();
    seed_character(test_db.db.as_ref(), 1, "Luke Skywalker").await;
    seed_character(test_db.db.as_ref(), 3, "R2-D2").await;
    seed_character(test_db.db.as_ref(), 2, "C-3PO").await;

    let (status, body) = get_json(router_for(test_db.db.clone()), "/characters").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["C-3PO", "Luke Skywalker", "R2-D2"]);
}

#[tokio::test]
async fn pagination_applies_offset_and_limit() {
    let test_db = TestDatabase::new().await.unwrap();
    seed_character(test_db.db.as_ref(), 1, "Luke Skywalker").await;
    seed_character(test_db.db.as_ref(), 2, "C-3PO").await;
    seed_character(test_db.db.as_ref(), 3, "R2-D2").await;

    let (status, body) = get_json(
        router_for(test_db.db.clone()),
        "/characters?offset=1&limit=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["name"], "Luke Skywalker");
}

#[tokio::test]
async fn gets_character_by_local_id() {
    let test_db = TestDatabase::new().await.unwrap();
    let luke = seed_character(test_db.db.as_ref(), 1, "Luke Skywalker").await;

    let (status, body) = get_json(
        router_for(test_db.db.clone()),
        &format!("/characters/{}", luke.id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Luke Skywalker");
    assert_eq!(body["external_id"], 1);
    assert_eq!(body["height"], "172");
}

#[tokio::test]
async fn missing_character_is_a_problem_response() {
    let test_db = TestDatabase::new().await.unwrap();

    let (status, body) = get_json(router_for(test_db.db.clone()), "/characters/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Not Found");
    assert!(body["detail"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn lists_films_and_starships() {
    let test_db = TestDatabase::new().await.unwrap();
    seed_film(test_db.db.as_ref(), 1, "A New Hope").await;
    let falcon = seed_starship(test_db.db.as_ref(), 10, "Millennium Falcon").await;

    let (status, body) = get_json(router_for(test_db.db.clone()), "/films").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "A New Hope");

    let (status, body) = get_json(
        router_for(test_db.db.clone()),
        &format!("/starships/{}", falcon.id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Millennium Falcon");
}

#[tokio::test]
async fn search_groups_matches_per_category() {
    let test_db = TestDatabase::new().await.unwrap();
    seed_character(test_db.db.as_ref(), 1, "Luke Skywalker").await;
    seed_character(test_db.db.as_ref(), 2, "Anakin Skywalker").await;
    seed_film(test_db.db.as_ref(), 1, "A New Hope").await;
    seed_starship(test_db.db.as_ref(), 10, "Millennium Falcon").await;

    let (status, body) = get_json(router_for(test_db.db.clone()), "/search?term=Skywalker").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["characters"].as_array().unwrap().len(), 2);
    assert_eq!(body["characters"][0]["name"], "Anakin Skywalker");
    assert!(body["films"].as_array().unwrap().is_empty());
    assert!(body["starships"].as_array().unwrap().is_empty());

    let (_, body) = get_json(router_for(test_db.db.clone()), "/search?term=Falcon").await;
    assert_eq!(body["starships"].as_array().unwrap().len(), 1);
}
