//! Orchestration: question in, rendered answer out.
//!
//! Sequences synthesizer, guard, and executor, applies the per-session
//! failure backoff, and reduces errors to user-facing messages. Every stage
//! is logged with full context before the reduced form leaves the pipeline.

use std::sync::Arc;
use tracing::{info, warn};

use crate::db::{Executor, QueryResult};
use crate::error::{DeptSqlError, Result};
use crate::guard::{guard, manager_shortcut, GuardedQuery};
use crate::session::Session;
use crate::synth::{build_prompt, SynthesisOptions, Synthesizer};

/// Hint shown after repeated consecutive failures.
pub const REPHRASE_HINT: &str =
    "Having trouble? Try rephrasing your question or check the example queries.";

/// The assembled question-answering pipeline.
///
/// Built once at startup; the synthesizer and executor are shared for the
/// process lifetime.
pub struct Pipeline {
    synthesizer: Arc<dyn Synthesizer>,
    executor: Arc<dyn Executor>,
    options: SynthesisOptions,
}

/// What the UI gets back for one question.
#[derive(Debug)]
pub struct AskOutcome {
    /// The guarded SQL, when one was produced before the failure point.
    pub sql: Option<String>,
    /// Result rows or a reduced failure message.
    pub reply: Reply,
    /// True when the rephrase hint should be shown (third consecutive
    /// failure, exactly once).
    pub show_hint: bool,
}

/// The displayable part of an outcome.
#[derive(Debug)]
pub enum Reply {
    /// A non-empty result set.
    Rows(QueryResult),
    /// The query ran but matched nothing.
    Empty,
    /// The request failed; the message is already reduced for display.
    Failed(String),
}

impl Pipeline {
    /// Creates a pipeline over the given collaborators.
    pub fn new(synthesizer: Arc<dyn Synthesizer>, executor: Arc<dyn Executor>) -> Self {
        Self {
            synthesizer,
            executor,
            options: SynthesisOptions::default(),
        }
    }

    /// Answers one natural-language question.
    ///
    /// The manager shortcut takes precedence over the model path. Failures
    /// at any stage are terminal for the request; unsafe queries never reach
    /// the executor.
    pub async fn ask(&self, question: &str, session: &mut Session) -> AskOutcome {
        match self.run(question).await {
            Ok((sql, result)) => {
                let non_empty = !result.is_empty();
                session.record_success(non_empty);
                AskOutcome {
                    sql: Some(sql.into_string()),
                    reply: if non_empty {
                        Reply::Rows(result)
                    } else {
                        Reply::Empty
                    },
                    show_hint: false,
                }
            }
            Err((sql, err)) => {
                warn!(category = err.category(), error = %err, "Request failed");
                let show_hint = session.record_failure();
                AskOutcome {
                    sql: sql.map(GuardedQuery::into_string),
                    reply: Reply::Failed(err.user_message()),
                    show_hint,
                }
            }
        }
    }

    /// Runs the synthesize → guard → execute sequence.
    ///
    /// On failure, returns whatever guarded SQL existed at that point so the
    /// UI can still display it.
    async fn run(
        &self,
        question: &str,
    ) -> std::result::Result<(GuardedQuery, QueryResult), (Option<GuardedQuery>, DeptSqlError)>
    {
        let guarded = match self.produce_query(question).await {
            Ok(q) => q,
            Err(e) => return Err((None, e)),
        };
        info!(sql = guarded.as_str(), "Generated SQL query");

        match self.executor.execute(guarded.as_str()).await {
            Ok(result) => Ok((guarded, result)),
            Err(e) => Err((Some(guarded), e)),
        }
    }

    /// Produces the guarded query for a question, via shortcut or model.
    async fn produce_query(&self, question: &str) -> Result<GuardedQuery> {
        if let Some(shortcut) = manager_shortcut(question) {
            info!(sql = shortcut.as_str(), "Manager shortcut matched");
            return Ok(shortcut);
        }

        let prompt = build_prompt(question);
        let raw = self.synthesizer.synthesize(&prompt, &self.options).await?;
        guard(&raw)
    }
}
