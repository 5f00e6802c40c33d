//! deptsql - Natural-language to SQL demo with a guarded single-table executor.

use std::sync::Arc;

use deptsql::cli::Cli;
use deptsql::config::Config;
use deptsql::db::{self, Executor, QueryResult, SqliteExecutor};
use deptsql::error::{DeptSqlError, Result};
use deptsql::pipeline::{Pipeline, Reply, REPHRASE_HINT};
use deptsql::session::Session;
use deptsql::synth::{
    MockSynthesizer, OllamaConfig, OllamaSynthesizer, Synthesizer, SynthesizerProvider,
};
use deptsql::web::{AppState, WebServer};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    deptsql::logging::init();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let db_path = cli.db.clone().unwrap_or_else(|| config.database.path.clone());
    let bind = cli.bind.unwrap_or(config.server.bind);

    // Bootstrap is destructive by design: the seed data is the whole dataset.
    let pool = db::bootstrap(&db_path).await?;
    let executor: Arc<dyn Executor> = Arc::new(SqliteExecutor::from_pool(pool));

    // Built once; a failure here blocks all interaction, so it is fatal.
    let synthesizer = build_synthesizer(&cli, &config).await?;

    let pipeline = Pipeline::new(synthesizer, executor);

    if let Some(question) = cli.ask.as_deref() {
        return ask_once(&pipeline, question).await;
    }

    let state = AppState::new(pipeline);
    WebServer::new(bind, state).run().await
}

/// Builds the synthesizer from CLI flags and config.
///
/// An unreachable model server is fatal here: a session that can never
/// synthesize is not worth starting.
async fn build_synthesizer(cli: &Cli, config: &Config) -> Result<Arc<dyn Synthesizer>> {
    let provider = if cli.mock_model {
        SynthesizerProvider::Mock
    } else {
        config.synthesizer.provider()?
    };

    info!(provider = %provider, "Initializing synthesizer");
    match provider {
        SynthesizerProvider::Mock => Ok(Arc::new(MockSynthesizer::new())),
        SynthesizerProvider::Ollama => {
            let ollama_config = OllamaConfig::new(config.synthesizer.model.clone())
                .with_url(config.synthesizer.base_url.clone())
                .with_timeout(config.synthesizer.timeout_secs);
            let client = OllamaSynthesizer::new(ollama_config)?;
            if !client.is_available().await {
                return Err(DeptSqlError::synthesis(format!(
                    "Model server at {} is not reachable. Is it running? Try: ollama serve",
                    config.synthesizer.base_url
                )));
            }
            Ok(Arc::new(client))
        }
    }
}

/// One-shot mode: answer a single question on stdout and exit.
async fn ask_once(pipeline: &Pipeline, question: &str) -> Result<()> {
    if question.trim().is_empty() {
        println!("Please enter a question first.");
        return Ok(());
    }

    let mut session = Session::new();
    let outcome = pipeline.ask(question, &mut session).await;

    if let Some(sql) = &outcome.sql {
        println!("SQL: {sql}");
    }

    match &outcome.reply {
        Reply::Rows(result) => print_table(result),
        Reply::Empty => println!("Query returned no results."),
        Reply::Failed(message) => println!("Error: {message}"),
    }

    if outcome.show_hint {
        println!("{REPHRASE_HINT}");
    }

    Ok(())
}

/// Prints a result set as an aligned text table.
fn print_table(result: &QueryResult) {
    let headers: Vec<String> = result.columns.iter().map(|c| c.name.clone()).collect();
    let rows: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_display_string()).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let line: Vec<String> = headers
        .iter()
        .zip(widths.iter().copied())
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    println!("{}", line.join("  "));
    println!("{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(c, w)| format!("{c:<w$}"))
            .collect();
        println!("{}", line.join("  "));
    }
    println!("({} rows)", result.row_count);
}
