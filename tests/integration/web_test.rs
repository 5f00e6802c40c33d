//! Web surface tests, driven through the router without binding a socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use deptsql::db::MockExecutor;
use deptsql::pipeline::Pipeline;
use deptsql::synth::MockSynthesizer;
use deptsql::web::{AppState, WebServer};
use tower::ServiceExt;

fn test_state() -> AppState {
    let pipeline = Pipeline::new(
        Arc::new(MockSynthesizer::new()),
        Arc::new(MockExecutor::new()),
    );
    AppState::new(pipeline)
}

async fn body_text(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn ask_request(question: &str) -> Request<Body> {
    let encoded: String = question
        .bytes()
        .map(|b| match b {
            b' ' => "+".to_string(),
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' => (b as char).to_string(),
            other => format!("%{other:02X}"),
        })
        .collect();

    Request::builder()
        .method("POST")
        .uri("/ask")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("question={encoded}")))
        .unwrap()
}

#[tokio::test]
async fn home_page_serves_the_form() {
    let app = WebServer::router(test_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response.into_body()).await;
    assert!(html.contains("Natural Language to SQL Converter"));
    assert!(html.contains("name=\"question\""));
}

#[tokio::test]
async fn asking_renders_sql_and_table() {
    let app = WebServer::router(test_state());

    let response = app.oneshot(ask_request("Show all departments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("SELECT * FROM Departments;"));
    assert!(html.contains("<th>Name</th>"));
    assert!(html.contains("<td>John Smith</td>"));
}

#[tokio::test]
async fn empty_question_warns_without_running_pipeline() {
    let app = WebServer::router(test_state());

    let response = app.oneshot(ask_request("   ")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("Please enter a question first."));
    assert!(!html.contains("Query Results"));
}

#[tokio::test]
async fn session_counter_is_shared_across_requests() {
    // Three consecutive guard failures through the web surface show the
    // hint on the third response only.
    let pipeline = Pipeline::new(
        Arc::new(MockSynthesizer::new().with_response("bad", "DROP TABLE Departments")),
        Arc::new(MockExecutor::new()),
    );
    let state = AppState::new(pipeline);

    for expect_hint in [false, false, true] {
        let app = WebServer::router(state.clone());
        let response = app.oneshot(ask_request("bad question")).await.unwrap();
        let html = body_text(response.into_body()).await;
        assert_eq!(
            html.contains("Having trouble?"),
            expect_hint,
            "unexpected hint state"
        );
    }
}
