//! label-render: render printable labels from JSON files
//!
//! ```text
//! label-render --options label.json --elements parts.json --output labels.html
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use label_system::{LabelHtmlGenerator, StaticIdentity};

mod config;
mod input;
mod logger;

use config::Config;

#[derive(Parser)]
#[command(name = "label-render")]
#[command(version, about = "Render printable HTML labels for inventory elements")]
pub struct Cli {
    /// Label options (JSON)
    #[arg(long)]
    pub options: PathBuf,

    /// Elements to label (JSON array of tagged elements)
    #[arg(long)]
    pub elements: PathBuf,

    /// Output file, stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let options = input::load_options(&cli.options)?;
    let elements = input::load_elements(&cli.elements)?;
    input::check_supported(&options, &elements)?;

    let identity = Arc::new(StaticIdentity::from_username(config.label_user.as_deref()));
    let generator = LabelHtmlGenerator::standard(&config.label, identity)?;

    tracing::info!(
        elements = elements.len(),
        lines_mode = ?options.lines_mode,
        barcode_type = ?options.barcode_type,
        "Rendering labels"
    );
    let html = generator
        .render(&options, &elements)
        .context("Label generation failed")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "Labels written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
