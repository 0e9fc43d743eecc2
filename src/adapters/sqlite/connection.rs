//! SQLite connection pool and schema setup.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        email TEXT UNIQUE,
        phone TEXT,
        join_date DATE NOT NULL DEFAULT CURRENT_DATE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS gym_sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        member_id INTEGER NOT NULL REFERENCES members (id),
        check_in_time DATETIME NOT NULL,
        check_out_time DATETIME,
        duration_minutes INTEGER
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_gym_sessions_member_open
        ON gym_sessions (member_id, check_out_time)
    "#,
];

/// Open a pool for the configured database and make sure the schema exists.
///
/// In-memory databases live only as long as their connection, so they get
/// exactly one connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DomainError> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DomainError::database("Invalid database URL", e))?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true)
        .busy_timeout(config.busy_timeout());

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| DomainError::database("Failed to open database", e))?;

    init_schema(&pool).await?;

    tracing::info!(url = %config.url, "Database ready");
    Ok(pool)
}

/// Create tables and indexes if they are missing.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DomainError::database("Failed to create schema", e))?;
    }
    Ok(())
}
