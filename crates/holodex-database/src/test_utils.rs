//! Test utilities for database integration tests
//!
//! Provides an isolated in-memory SQLite store per test, with the full
//! schema applied, so every test starts from an empty catalog.

use crate::DbConnection;
use holodex_migrations::Migrator;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// An isolated, fully migrated in-memory database for one test.
pub struct TestDatabase {
    pub db: Arc<DbConnection>,
}

impl TestDatabase {
    pub async fn new() -> anyhow::Result<Self> {
        // A single pooled connection keeps the in-memory database alive
        // and shared for the whole test; extra connections would each get
        // their own empty database.
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);

        let db = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        Ok(Self { db: Arc::new(db) })
    }
}
