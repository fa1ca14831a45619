use anyhow::Result;
use sprout_presenter::{
    Error,
    client::HttpAnalysisClient,
    config,
    presenter::ResultPresenter,
    terminal::TerminalSurface,
};
use std::{io::Write, sync::Arc};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};

const DISCLAIMER: &str =
    "DISCLAIMER: Sprout AI is a support tool and DOES NOT replace professional medical advice.";

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    eprint!("{}", label);
    std::io::stderr().flush()?;
    Ok(lines.next_line().await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?,
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let client = HttpAnalysisClient::new(&config.analysis)?;
    info!("Using analysis endpoint {}", client.url());

    let surface = Arc::new(TerminalSurface::new());
    let presenter = ResultPresenter::new(Arc::new(client), surface.clone());

    eprintln!("==================================================");
    eprintln!("   Sprout AI - Intelligent Health Assistance");
    eprintln!("==================================================");
    eprintln!("{}", DISCLAIMER);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let age = prompt(&mut lines, "Age: ").await?.unwrap_or_default();
    let body_type = prompt(&mut lines, "Body type: ").await?.unwrap_or_default();
    surface.set_profile(&age, &body_type);

    eprintln!("Describe your symptoms, separated by commas ({}).", surface.placeholder());

    while let Some(line) = prompt(&mut lines, "Symptoms: ").await? {
        if !surface.type_symptoms(&line) {
            eprintln!("{}", surface.placeholder());
            continue;
        }

        match presenter.handle_key("Enter").await {
            Ok(outcome) => debug!("Submission finished: {:?}", outcome),
            // Already surfaced to the user through the terminal surface.
            Err(Error::EmptySymptoms) | Err(Error::Locked) => {}
            Err(e) => debug!("Submission failed: {}", e),
        }
    }

    info!("Input closed, exiting");
    Ok(())
}
