//! Character sheet builder binary
//!
//! Entry point for batch generation of character sheets.

use clap::Parser;
use sheet_builder::logging::log_filter;
use sheet_builder::{BatchDriver, BatchOutcome, BuildConfig, CliArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Character sheet builder v{}", env!("CARGO_PKG_VERSION"));

    let config = BuildConfig::resolve(&args)?;
    tracing::info!(
        "Input: {}, output: {}",
        config.input_dir.display(),
        config.output_dir.display()
    );

    match BatchDriver::new(config)?.run()? {
        BatchOutcome::NothingSelected => {}
        BatchOutcome::Built {
            pages, characters, ..
        } => {
            tracing::info!(
                "Done: {} sheets generated, {} characters indexed",
                pages.len(),
                characters
            );
        }
    }

    Ok(())
}
