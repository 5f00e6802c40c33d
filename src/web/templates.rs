//! Inline HTML templates for the web surface.
//!
//! Plain server-rendered HTML with a shared layout. All dynamic text is
//! escaped before interpolation.

use crate::db::QueryResult;
use crate::pipeline::{AskOutcome, Reply, REPHRASE_HINT};

const EXAMPLES_BLOCK: &str = r#"<p>Convert your questions about departments into SQL queries. Try asking:</p>
<ul>
  <li>Show all departments</li>
  <li>Who manages Sales?</li>
  <li>List all department names</li>
</ul>"#;

/// Shared page layout.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
    input[type=text] {{ width: 70%; padding: 0.4rem; }}
    button {{ padding: 0.4rem 1rem; }}
    pre {{ background: #f4f4f4; padding: 0.8rem; overflow-x: auto; }}
    table {{ border-collapse: collapse; margin-top: 0.5rem; }}
    th, td {{ border: 1px solid #ccc; padding: 0.3rem 0.8rem; text-align: left; }}
    .error {{ color: #b00020; }}
    .hint {{ color: #8a6d00; background: #fff8e1; padding: 0.5rem; }}
    .notice {{ color: #555; }}
  </style>
</head>
<body>
  <h1>Natural Language to SQL Converter</h1>
  {body}
</body>
</html>"#
    )
}

/// The question form, pre-filled with the previous question when re-rendering.
fn question_form(question: &str) -> String {
    format!(
        r#"<form method="post" action="/ask">
  <input type="text" name="question" value="{}" placeholder="e.g., 'Who is the manager of Sales?'">
  <button type="submit">Generate SQL Query</button>
</form>"#,
        escape(question)
    )
}

/// The landing page: examples plus the empty form.
pub fn home_page() -> String {
    let body = format!("{EXAMPLES_BLOCK}\n{}", question_form(""));
    layout("SQL Query Generator", &body)
}

/// A page carrying a warning (e.g. empty question) above the form.
pub fn warning_page(message: &str) -> String {
    let body = format!(
        "{EXAMPLES_BLOCK}\n{}\n<p class=\"error\">{}</p>",
        question_form(""),
        escape(message)
    );
    layout("SQL Query Generator", &body)
}

/// The result page for one answered (or failed) question.
pub fn result_page(question: &str, outcome: &AskOutcome) -> String {
    let mut body = format!("{EXAMPLES_BLOCK}\n{}", question_form(question));

    if let Some(sql) = &outcome.sql {
        body.push_str(&format!(
            "\n<h2>Generated SQL Query</h2>\n<pre>{}</pre>",
            escape(sql)
        ));
    }

    match &outcome.reply {
        Reply::Rows(result) => {
            body.push_str("\n<h2>Query Results</h2>\n");
            body.push_str(&result_table(result));
        }
        Reply::Empty => {
            body.push_str("\n<p class=\"notice\">Query returned no results.</p>");
        }
        Reply::Failed(message) => {
            body.push_str(&format!("\n<p class=\"error\">{}</p>", escape(message)));
        }
    }

    if outcome.show_hint {
        body.push_str(&format!(
            "\n<p class=\"hint\">{}</p>",
            escape(REPHRASE_HINT)
        ));
    }

    layout("SQL Query Generator", &body)
}

/// Renders a result set as an HTML table.
fn result_table(result: &QueryResult) -> String {
    let mut html = String::from("<table>\n<tr>");
    for column in &result.columns {
        html.push_str(&format!("<th>{}</th>", escape(&column.name)));
    }
    html.push_str("</tr>\n");

    for row in &result.rows {
        html.push_str("<tr>");
        for value in row {
            html.push_str(&format!("<td>{}</td>", escape(&value.to_display_string())));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>");
    html
}

/// Minimal HTML escaping for interpolated text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
