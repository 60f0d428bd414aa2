//! Render the contact page to `index.html`.
//!
//! Run with: `cargo run -p site-page --example render_page [OUT] [CONFIG.json]`

use anyhow::{Context, Result};
use site_core::SiteConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| "index.html".to_string());

    let config = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path))?;
            SiteConfig::from_json(&raw).with_context(|| format!("Invalid config {}", path))?
        }
        None => SiteConfig::default(),
    };

    let html = site_page::render_page(&config).context("Failed to render page")?;
    std::fs::write(&output_path, &html)
        .with_context(|| format!("Failed to write {}", output_path))?;

    tracing::info!(path = %output_path, bytes = html.len(), "page written");
    Ok(())
}
