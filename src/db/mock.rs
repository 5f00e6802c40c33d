//! Mock executors for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::db::{ColumnInfo, Executor, QueryResult, Row, Value};
use crate::error::{DeptSqlError, Result};

/// Executor that serves a fixed in-memory copy of the seed data.
///
/// Understands just enough to answer the demo's queries; anything it cannot
/// recognize returns an empty result rather than an error.
pub struct MockExecutor {
    departments: Vec<(String, String)>,
    calls: AtomicUsize,
}

impl MockExecutor {
    /// Creates a mock pre-populated with the seed departments.
    pub fn new() -> Self {
        Self {
            departments: crate::db::SEED_DEPARTMENTS
                .iter()
                .map(|(n, m)| (n.to_string(), m.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of execute calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn all_rows(&self) -> Vec<Row> {
        self.departments
            .iter()
            .map(|(n, m)| vec![Value::from(n.as_str()), Value::from(m.as_str())])
            .collect()
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Executor for MockExecutor {
    async fn execute(&self, sql: &str) -> Result<QueryResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let upper = sql.to_uppercase();

        if upper.starts_with("SELECT MANAGER") {
            // Manager lookup by department name.
            let rows: Vec<Row> = self
                .departments
                .iter()
                .filter(|(n, _)| sql.contains(&format!("'{n}'")))
                .map(|(_, m)| vec![Value::from(m.as_str())])
                .collect();
            return Ok(QueryResult::with_data(
                vec![ColumnInfo::new("Manager", "TEXT")],
                rows,
            ));
        }

        if upper.starts_with("SELECT NAME") {
            let rows: Vec<Row> = self
                .departments
                .iter()
                .map(|(n, _)| vec![Value::from(n.as_str())])
                .collect();
            return Ok(QueryResult::with_data(
                vec![ColumnInfo::new("Name", "TEXT")],
                rows,
            ));
        }

        if upper.starts_with("SELECT * FROM DEPARTMENTS WHERE") {
            let rows: Vec<Row> = self
                .departments
                .iter()
                .filter(|(n, m)| sql.contains(&format!("'{n}'")) || sql.contains(&format!("'{m}'")))
                .map(|(n, m)| vec![Value::from(n.as_str()), Value::from(m.as_str())])
                .collect();
            return Ok(QueryResult::with_data(
                vec![
                    ColumnInfo::new("Name", "TEXT"),
                    ColumnInfo::new("Manager", "TEXT"),
                ],
                rows,
            ));
        }

        if upper.starts_with("SELECT") {
            return Ok(QueryResult::with_data(
                vec![
                    ColumnInfo::new("Name", "TEXT"),
                    ColumnInfo::new("Manager", "TEXT"),
                ],
                self.all_rows(),
            ));
        }

        Ok(QueryResult::new())
    }

    async fn close(&self) {}
}

/// Executor whose every call fails with a fixed classified message.
pub struct FailingExecutor {
    message: String,
}

impl FailingExecutor {
    /// Creates a failing executor with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingExecutor {
    fn default() -> Self {
        Self::new("Database error: simulated failure")
    }
}

#[async_trait]
impl Executor for FailingExecutor {
    async fn execute(&self, _sql: &str) -> Result<QueryResult> {
        Err(DeptSqlError::execution(self.message.clone()))
    }

    async fn close(&self) {}
}
