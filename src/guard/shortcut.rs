//! Deterministic shortcut for manager-lookup questions.
//!
//! "Who is the manager of X?" is by far the most common question, and the
//! model occasionally garbles it. When the question matches the pattern the
//! guarded query from the model path is discarded and replaced with a
//! directly constructed lookup.

use super::GuardedQuery;
use regex::Regex;
use std::sync::OnceLock;

fn department_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?:of\s+)(\w+)").expect("valid regex"))
}

/// Returns a manager-lookup query when the question matches
/// "who ... manager ... of <word>" (case-insensitive), else `None`.
///
/// `<word>` is the first word token after "of". Takes precedence over
/// whatever the synthesizer produced.
pub fn manager_shortcut(question: &str) -> Option<GuardedQuery> {
    let lower = question.to_lowercase();
    if !lower.contains("who") || !lower.contains("manager") {
        return None;
    }

    let captures = department_pattern().captures(question)?;
    let department = captures.get(1)?.as_str();

    Some(GuardedQuery(format!(
        "SELECT Manager FROM Departments WHERE Name = '{department}';"
    )))
}
