use anyhow::Result;
use sentiment_form::{
    api::HttpPredictionClient,
    app, config,
    form::{FormController, RequestStatus},
};
use tokio::io::BufReader;
use tracing::info;

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

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Logs go to stderr; stdout carries the form.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let client = HttpPredictionClient::new(&config.api)?;
    info!("Using prediction endpoint: {}", client.endpoint());

    let mut controller = FormController::new(client);
    let mut stdout = tokio::io::stdout();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());
        app::run_interactive(&mut controller, stdin, &mut stdout).await?;
    } else {
        let status = app::run_once(&mut controller, args.join(" "), &mut stdout).await?;
        if status == RequestStatus::Failed {
            std::process::exit(1);
        }
    }

    Ok(())
}
