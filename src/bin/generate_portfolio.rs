// Portfolio generator binary entry point
//
// Renders the projects section to HTML, Markdown, and JSON files.
// Usage: cargo run --bin generate_portfolio

use portfolio_gen::projects::content;
use portfolio_gen::{OutputFormat, PortfolioGenerator};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_gen=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    let out_dir: PathBuf = std::env::var("PORTFOLIO_OUT_DIR")
        .unwrap_or_else(|_| "dist".to_string())
        .into();

    tracing::info!("Configuration:");
    tracing::info!("  PORTFOLIO_OUT_DIR: {}", out_dir.display());

    let projects = content::projects();
    content::validate(projects)?;
    tracing::info!("Content store validated: {} projects", projects.len());

    let generator = PortfolioGenerator::new();
    let written = generator.write_all(projects, &out_dir)?;
    tracing::info!(
        "Generated {} files in {} formats",
        written.len(),
        OutputFormat::ALL.len()
    );

    Ok(())
}
