//! Request handlers for the web surface.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::web::{templates, AppState};

/// Form payload for the question input.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    /// The natural-language question.
    #[serde(default)]
    pub question: String,
}

/// Handler for the question form page.
pub async fn home() -> Html<String> {
    Html(templates::home_page())
}

/// Handler for a submitted question.
pub async fn ask(State(state): State<AppState>, Form(form): Form<AskForm>) -> Html<String> {
    let question = form.question.trim();
    if question.is_empty() {
        return Html(templates::warning_page("Please enter a question first."));
    }

    let mut session = state.session.lock().await;
    let outcome = state.pipeline.ask(question, &mut session).await;
    drop(session);

    Html(templates::result_page(question, &outcome))
}
