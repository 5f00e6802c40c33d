//! SQLite executor implementation.
//!
//! Runs guarded queries against the single-file embedded database. Errors
//! coming back from the driver are classified into the two user-facing
//! messages the UI knows about before anything else sees them.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{Column as SqlxColumn, Row as SqlxRow, TypeInfo};
use std::time::Instant;
use tracing::debug;

use crate::db::{ColumnInfo, Executor, QueryResult, Row, Value};
use crate::error::{DeptSqlError, Result};

/// Executor backed by a single-file SQLite database.
///
/// Always constructed from the bootstrap routine's pool; the database file
/// never outlives a run, so there is no separate open-existing path.
pub struct SqliteExecutor {
    pool: SqlitePool,
}

impl SqliteExecutor {
    /// Wraps the bootstrapped pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Executor for SqliteExecutor {
    async fn execute(&self, sql: &str) -> Result<QueryResult> {
        debug!(sql, "Executing query");
        let start = Instant::now();

        // The connection is checked out of the pool for the duration of this
        // call only and returned on every exit path, including errors.
        let rows = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_db_error)?;

        let execution_time = start.elapsed();

        // Column metadata comes from the first row, so an empty result set
        // reports no columns. The UI renders only the empty-result notice in
        // that case; revisit if empty results ever grow a header row.
        let columns: Vec<ColumnInfo> = rows
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
                    .collect()
            })
            .unwrap_or_default();

        let data: Vec<Row> = rows.iter().map(convert_row).collect();

        debug!(
            rows = data.len(),
            elapsed_ms = execution_time.as_millis() as u64,
            "Query complete"
        );

        Ok(QueryResult::with_data(columns, data).with_execution_time(execution_time))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Classifies a driver error into one of the user-facing messages.
///
/// Only the two shapes the UI distinguishes get dedicated text; everything
/// else passes through behind a generic prefix, with the raw internals kept
/// out of the message where possible.
fn classify_db_error(err: sqlx::Error) -> DeptSqlError {
    let raw = err.to_string();
    let lower = raw.to_lowercase();

    if lower.contains("no such table") {
        DeptSqlError::execution(
            "Database table not found. Please ensure the database is properly set up.",
        )
    } else if lower.contains("syntax error") {
        DeptSqlError::execution(
            "Invalid SQL query syntax. Please try rephrasing your question.",
        )
    } else {
        DeptSqlError::execution(format!("Database error: {raw}"))
    }
}

/// Converts a SqliteRow to our Row type.
fn convert_row(row: &SqliteRow) -> Row {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, col)| convert_value(row, i, col.type_info().name()))
        .collect()
}

/// Converts a single column value from a SqliteRow to our Value type.
///
/// SQLite has a small, fixed set of storage classes; anything unrecognized
/// is decoded as text as a last resort.
fn convert_value(row: &SqliteRow, index: usize, type_name: &str) -> Value {
    match type_name.to_uppercase().as_str() {
        "INTEGER" | "INT" | "BOOLEAN" => row
            .try_get::<Option<i64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Int)
            .unwrap_or(Value::Null),

        "REAL" => row
            .try_get::<Option<f64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Float)
            .unwrap_or(Value::Null),

        "BLOB" => row
            .try_get::<Option<Vec<u8>>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bytes)
            .unwrap_or(Value::Null),

        "NULL" => Value::Null,

        // TEXT and everything else.
        _ => row
            .try_get::<Option<String>, _>(index)
            .ok()
            .flatten()
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}
