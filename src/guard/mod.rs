//! Query Guard: sanitization and normalization of model-generated SQL.
//!
//! The synthesizer is an untrusted collaborator; everything it returns goes
//! through [`guard`] before it may touch the database. The guard is a textual
//! filter, not a parser: it scans whole strings for forbidden substrings and
//! force-fits anything that survives into a single-table SELECT. The
//! over-approximation (a harmless question mentioning "update" gets rejected)
//! is accepted behavior for the fixed one-table schema.

mod shortcut;

pub use shortcut::manager_shortcut;

use crate::error::{DeptSqlError, Result};
use std::fmt;

/// The one table the application knows about.
pub const TABLE_NAME: &str = "Departments";

/// Fallback used when the model hallucinates a JOIN. The schema has no second
/// table, so the original intent is unrecoverable; we substitute a known-good
/// query instead of failing the request.
const JOIN_FALLBACK: &str = "SELECT * FROM Departments WHERE Name = 'Sales';";

/// Forbidden substrings, matched case-insensitively anywhere in the candidate:
/// mutating/DDL keywords plus comment and statement-termination injection
/// markers.
const BLACKLIST: [&str; 8] = [
    "DROP", "DELETE", "UPDATE", "INSERT", "ALTER", "--", ";--", "/*",
];

/// A query string that has passed every guard step.
///
/// The only ways to obtain one are [`guard`] and [`manager_shortcut`], so
/// holding a `GuardedQuery` is proof the text is a single SELECT against the
/// Departments table with no blacklisted substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardedQuery(String);

impl GuardedQuery {
    /// Returns the query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the guarded query, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GuardedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transforms an untrusted candidate SQL string into a safe, executable
/// SELECT against the Departments table, or rejects it.
///
/// Steps run in a fixed order; each feeds the next:
/// 1. strip code fences and surrounding whitespace,
/// 2. reject on any blacklisted substring (whole-string scan),
/// 3. wrap non-SELECT text as a bare WHERE predicate,
/// 4. replace anything containing JOIN with a fixed fallback query,
/// 5. normalize to exactly one trailing semicolon.
pub fn guard(raw: &str) -> Result<GuardedQuery> {
    // Step 1: formatting noise. Models like to wrap output in markdown fences.
    let sql = strip_fences(raw);

    // Step 2: blacklist. Matched on the uppercased whole string, so forbidden
    // substrings embedded in otherwise-safe text are rejected too.
    let upper = sql.to_uppercase();
    if BLACKLIST.iter().any(|word| upper.contains(word)) {
        return Err(DeptSqlError::unsafe_query("forbidden operation"));
    }

    // Step 3: force the single-table SELECT shape.
    let sql = if upper.starts_with("SELECT") {
        sql
    } else {
        format!("SELECT * FROM {TABLE_NAME} WHERE {sql}")
    };

    // Step 4: no second table exists, so any JOIN is discarded wholesale.
    let sql = if sql.to_uppercase().contains("JOIN") {
        JOIN_FALLBACK.to_string()
    } else {
        sql
    };

    // Step 5: exactly one statement terminator.
    let sql = format!("{};", sql.trim_end_matches(';'));

    Ok(GuardedQuery(sql))
}

/// Removes markdown code-fence markers and surrounding whitespace.
fn strip_fences(raw: &str) -> String {
    raw.replace("```sql", "").replace("```", "").trim().to_string()
}
