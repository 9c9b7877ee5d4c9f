mod bootstrap;
mod report;

use anyhow::{Context, Result};
use cardsort_core::models::CardMapping;
use cardsort_core::settings::{OutputFormat, Settings};
use cardsort_data::batch::parse_sorts_in_dir;
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("cardsort v{} starting", env!("CARGO_PKG_VERSION"));

    let mapping = settings
        .mapping
        .as_deref()
        .map(CardMapping::load_from)
        .transpose()
        .context("Failed to load card mapping")?;

    let mut sorts = parse_sorts_in_dir(&settings.directory, mapping.as_ref()).with_context(|| {
        format!(
            "Failed to extract sorts from {}",
            settings.directory.display()
        )
    })?;

    if settings.sorted {
        sorts.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let output = match settings.format {
        OutputFormat::Text => report::render_text(&sorts),
        OutputFormat::Json => report::render_json(&sorts)?,
    };
    println!("{}", output.trim_end());

    Ok(())
}
