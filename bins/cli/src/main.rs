//! Shabd CLI
//!
//! Prints an amount in words, e.g. `shabd 1234567.50 --lang en`.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shabd_core::{LabelCatalog, NumberToWords};
use shabd_shared::{AppConfig, AppError};

/// Write a monetary amount in words using Indian grouping.
#[derive(Debug, Parser)]
#[command(name = "shabd", version, about)]
struct Cli {
    /// Amount as `<whole>` or `<whole>.<fraction>`, e.g. 1234567.50
    #[arg(allow_negative_numbers = true)]
    amount: String,

    /// Language code: en, hi or gu. Unknown codes render English.
    #[arg(short, long)]
    lang: Option<String>,

    /// Currency code whose configured labels replace the defaults
    #[arg(short, long)]
    currency: Option<String>,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shabd=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(words) => {
            println!("{words}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;

    let catalog = match &config.labels.dir {
        Some(dir) => LabelCatalog::from_dir(dir),
        None => LabelCatalog::bundled(),
    };
    let converter = NumberToWords::new(catalog);

    let language = cli.lang.as_deref().unwrap_or(&config.language);
    debug!(
        amount = %cli.amount,
        language,
        currency = ?cli.currency,
        "Converting amount"
    );

    let words = converter
        .number_to_words_with_currency(&cli.amount, language, cli.currency.as_deref())
        .map_err(AppError::from)?;
    Ok(words)
}
