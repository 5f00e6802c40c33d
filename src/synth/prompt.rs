//! Prompt construction for synthesis requests.
//!
//! The prompt is a fixed few-shot template: the single-table schema plus four
//! example question/SQL pairs, followed by the user's question. The schema
//! never changes, so there is nothing dynamic to inject.

/// Few-shot template for the Departments schema.
const PROMPT_TEMPLATE: &str = r#"Convert to simple SQL. Use table 'Departments' with columns: Name, Manager

Examples:
Question: Who manages Sales?
SQL: SELECT Manager FROM Departments WHERE Name = 'Sales';

Question: Show all departments
SQL: SELECT * FROM Departments;

Question: List department names
SQL: SELECT Name FROM Departments;

Question: Find manager of Marketing
SQL: SELECT Manager FROM Departments WHERE Name = 'Marketing';

Current question: "#;

/// Builds the full prompt for a user question.
pub fn build_prompt(question: &str) -> String {
    format!("{PROMPT_TEMPLATE}{question}")
}
