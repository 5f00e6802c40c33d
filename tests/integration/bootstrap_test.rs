//! Bootstrap contract tests: schema and seed data.

use deptsql::db::{bootstrap, Executor, SqliteExecutor, Value, SEED_DEPARTMENTS};

#[tokio::test]
async fn schema_matches_contract() {
    let dir = tempfile::tempdir().unwrap();
    let pool = bootstrap(&dir.path().join("database.db")).await.unwrap();
    let executor = SqliteExecutor::from_pool(pool);

    let result = executor
        .execute("SELECT Name, Manager FROM Departments ORDER BY Name;")
        .await
        .unwrap();

    assert_eq!(result.column_names(), vec!["Name", "Manager"]);
    assert_eq!(result.row_count, SEED_DEPARTMENTS.len());

    let mut expected: Vec<(&str, &str)> = SEED_DEPARTMENTS.to_vec();
    expected.sort_by_key(|(name, _)| *name);
    for (row, (name, manager)) in result.rows.iter().zip(expected) {
        assert_eq!(row[0], Value::String(name.to_string()));
        assert_eq!(row[1], Value::String(manager.to_string()));
    }

    executor.close().await;
}

#[tokio::test]
async fn rerun_recreates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.db");

    let pool = bootstrap(&path).await.unwrap();
    sqlx::query("DELETE FROM Departments")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let pool = bootstrap(&path).await.unwrap();
    let executor = SqliteExecutor::from_pool(pool);
    let result = executor.execute("SELECT * FROM Departments;").await.unwrap();
    assert_eq!(result.row_count, 5);
    executor.close().await;
}

#[tokio::test]
async fn missing_table_is_classified() {
    let dir = tempfile::tempdir().unwrap();
    let pool = bootstrap(&dir.path().join("database.db")).await.unwrap();
    let executor = SqliteExecutor::from_pool(pool);

    let err = executor
        .execute("SELECT * FROM Employees;")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Database table not found"));

    executor.close().await;
}

#[tokio::test]
async fn malformed_query_is_classified() {
    let dir = tempfile::tempdir().unwrap();
    let pool = bootstrap(&dir.path().join("database.db")).await.unwrap();
    let executor = SqliteExecutor::from_pool(pool);

    let err = executor
        .execute("SELECT * FRM Departments;")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid SQL query syntax"));

    executor.close().await;
}
