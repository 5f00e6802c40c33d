//! Database layer: the executor that runs guarded queries.
//!
//! Provides a trait-based interface so the pipeline and tests can swap the
//! real SQLite backend for mocks.

pub mod bootstrap;
mod mock;
mod sqlite;
mod types;

pub use bootstrap::{bootstrap, SEED_DEPARTMENTS};
pub use mock::{FailingExecutor, MockExecutor};
pub use sqlite::SqliteExecutor;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::error::Result;
use async_trait::async_trait;

/// Trait defining the interface for query executors.
///
/// Executors only ever see guarded queries; they do no validation of their
/// own beyond what the database engine enforces.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Executes a SQL query and returns the results.
    async fn execute(&self, sql: &str) -> Result<QueryResult>;

    /// Closes the underlying connection.
    async fn close(&self);
}
