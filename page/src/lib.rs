//! # site-page
//!
//! Static HTML renderer for the contact page, built on
//! [Leptos](https://leptos.dev/) server-side rendering.
//!
//! The markup is the other half of the DOM contract defined in
//! [`site_core::dom`]: every id, class and data attribute the browser bindings
//! look up is emitted from the same constants here.
//!
//! ```rust
//! use site_core::SiteConfig;
//!
//! let html = site_page::render_page(&SiteConfig::default())?;
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! # Ok::<(), site_core::SiteError>(())
//! ```
//!
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! No reactive runtime or hydration is involved; the page's behavior comes
//! from the `site-wasm` module it loads.

#![warn(missing_docs)]

pub mod components;
pub mod styles;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use site_core::{Result, SiteConfig};

/// Path of the wasm-bindgen JS glue, relative to the page.
pub const WASM_GLUE_PATH: &str = "./pkg/site_wasm.js";

/// Render the complete page, including `<!DOCTYPE html>`.
pub fn render_page(config: &SiteConfig) -> Result<String> {
    let config_json = embedded_config(config)?;
    let doc = view! { <PageDocument config=config.clone() config_json=config_json /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{}", html))
}

/// JSON for the embedded `siteConfig` script, safe to place inside `<script>`.
pub fn embedded_config(config: &SiteConfig) -> Result<String> {
    Ok(config.to_json()?.replace("</", "<\\/"))
}
