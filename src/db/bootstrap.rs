//! Database bootstrap: destructive creation and seeding.
//!
//! Deletes and recreates the database file on every run, then seeds the
//! fixed department rows. The produced schema is a hard contract the guard
//! depends on: exactly one table, `Departments(Name, Manager)`.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::error::{DeptSqlError, Result};

/// The fixed seed rows: (name, manager).
pub const SEED_DEPARTMENTS: [(&str, &str); 5] = [
    ("Sales", "John Smith"),
    ("Marketing", "Jane Doe"),
    ("Engineering", "Bob Wilson"),
    ("HR", "Sarah Johnson"),
    ("Finance", "Mike Brown"),
];

/// Recreates the database file at `path` and seeds it.
///
/// Destructive: any existing file at `path` is deleted first. Returns the
/// pool so callers can hand it straight to an executor.
pub async fn bootstrap(path: &Path) -> Result<SqlitePool> {
    remove_existing(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DeptSqlError::execution(format!("Could not create database directory: {e}"))
            })?;
        }
    }

    let conn_str = format!("sqlite:{}?mode=rwc", path.display());
    let options = SqliteConnectOptions::from_str(&conn_str)
        .map_err(|e| DeptSqlError::execution(format!("Invalid database path: {e}")))?
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
        .map_err(|e| DeptSqlError::execution(format!("Failed to create database: {e}")))?;

    create_schema(&pool).await?;
    seed(&pool).await?;

    info!(
        "Bootstrapped database at {} with {} departments",
        path.display(),
        SEED_DEPARTMENTS.len()
    );
    Ok(pool)
}

/// Deletes a pre-existing database file, ignoring "not found".
fn remove_existing(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DeptSqlError::execution(format!(
            "Could not remove existing database: {e}"
        ))),
    }
}

async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE Departments (
            Name TEXT PRIMARY KEY,
            Manager TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DeptSqlError::execution(format!("Failed to create schema: {e}")))?;

    Ok(())
}

async fn seed(pool: &SqlitePool) -> Result<()> {
    for (name, manager) in SEED_DEPARTMENTS {
        sqlx::query("INSERT INTO Departments (Name, Manager) VALUES (?, ?)")
            .bind(name)
            .bind(manager)
            .execute(pool)
            .await
            .map_err(|e| DeptSqlError::execution(format!("Failed to seed departments: {e}")))?;
    }
    Ok(())
}
