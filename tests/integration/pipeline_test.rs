//! End-to-end pipeline tests against a real SQLite file.

use std::sync::Arc;

use deptsql::db::{bootstrap, Executor, SqliteExecutor, Value};
use deptsql::pipeline::{Pipeline, Reply};
use deptsql::session::Session;
use deptsql::synth::MockSynthesizer;
use tempfile::TempDir;

/// Builds a pipeline over a freshly bootstrapped database.
async fn pipeline_with_synth(synth: MockSynthesizer) -> (Pipeline, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = bootstrap(&dir.path().join("database.db")).await.unwrap();
    let executor: Arc<dyn Executor> = Arc::new(SqliteExecutor::from_pool(pool));
    (Pipeline::new(Arc::new(synth), executor), dir)
}

#[tokio::test]
async fn show_all_departments_returns_five_rows() {
    let (pipeline, _dir) = pipeline_with_synth(MockSynthesizer::new()).await;
    let mut session = Session::new();

    let outcome = pipeline.ask("Show all departments", &mut session).await;
    assert_eq!(outcome.sql.as_deref(), Some("SELECT * FROM Departments;"));
    match outcome.reply {
        Reply::Rows(result) => {
            assert_eq!(result.row_count, 5);
            assert_eq!(result.column_names(), vec!["Name", "Manager"]);
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn manager_shortcut_hits_the_database() {
    // The synthesizer would answer with something else entirely; the
    // shortcut wins and the lookup really runs.
    let synth = MockSynthesizer::new().with_response("manager", "SELECT * FROM Departments;");
    let (pipeline, _dir) = pipeline_with_synth(synth).await;
    let mut session = Session::new();

    let outcome = pipeline
        .ask("Who is the manager of Marketing?", &mut session)
        .await;
    assert_eq!(
        outcome.sql.as_deref(),
        Some("SELECT Manager FROM Departments WHERE Name = 'Marketing';")
    );
    match outcome.reply {
        Reply::Rows(result) => {
            assert_eq!(result.row_count, 1);
            assert_eq!(result.rows[0][0], Value::String("Jane Doe".to_string()));
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn destructive_model_output_is_rejected_before_execution() {
    let synth = MockSynthesizer::new()
        .with_response("everything", "DROP TABLE Departments");
    let (pipeline, _dir) = pipeline_with_synth(synth).await;
    let mut session = Session::new();

    let outcome = pipeline.ask("remove everything", &mut session).await;
    assert!(matches!(outcome.reply, Reply::Failed(_)));
    assert!(outcome.sql.is_none());

    // The table is untouched.
    let verify = pipeline.ask("Show all departments", &mut session).await;
    match verify.reply {
        Reply::Rows(result) => assert_eq!(result.row_count, 5),
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn bare_predicate_output_becomes_a_filter() {
    let synth = MockSynthesizer::new().with_response("sales dept", "Name = 'Sales'");
    let (pipeline, _dir) = pipeline_with_synth(synth).await;
    let mut session = Session::new();

    let outcome = pipeline.ask("the sales dept please", &mut session).await;
    assert_eq!(
        outcome.sql.as_deref(),
        Some("SELECT * FROM Departments WHERE Name = 'Sales';")
    );
    match outcome.reply {
        Reply::Rows(result) => {
            assert_eq!(result.row_count, 1);
            assert_eq!(result.rows[0][1], Value::String("John Smith".to_string()));
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_department_yields_empty_notice() {
    let synth = MockSynthesizer::new().with_response("astrology", "Name = 'Astrology'");
    let (pipeline, _dir) = pipeline_with_synth(synth).await;
    let mut session = Session::new();

    let outcome = pipeline.ask("the astrology department", &mut session).await;
    assert!(matches!(outcome.reply, Reply::Empty));
}

#[tokio::test]
async fn three_failures_trigger_hint_once_and_success_resets() {
    // Unsafe model output fails every request at the guard.
    let synth = MockSynthesizer::new().with_response("bad", "DELETE FROM Departments");
    let (pipeline, _dir) = pipeline_with_synth(synth.clone()).await;
    let mut session = Session::new();

    assert!(!pipeline.ask("bad", &mut session).await.show_hint);
    assert!(!pipeline.ask("bad", &mut session).await.show_hint);
    assert!(pipeline.ask("bad", &mut session).await.show_hint);
    assert!(!pipeline.ask("bad", &mut session).await.show_hint);

    // A successful non-empty result resets the counter immediately.
    let outcome = pipeline.ask("Show all departments", &mut session).await;
    assert!(matches!(outcome.reply, Reply::Rows(_)));
    assert_eq!(session.failure_count(), 0);
}
