//! Browser bindings for the contact page.
//!
//! The module's start function looks up the page's collaborators, builds the
//! `site-core` components on top of `web-sys` adapters and registers every
//! event listener in one explicit [`wire`] step.
//!
//! - [`adapters`] - `web-sys` implementations of the `site-core` host seams
//! - [`wire`] - listener registration
//! - [`nav`] - mobile menu and smooth-scroll handlers
//! - [`logging`] - `tracing` subscriber writing to the browser console

use wasm_bindgen::prelude::*;

pub mod adapters;
pub mod logging;
pub mod nav;
pub mod wire;

pub use wire::{Page, wire};

/// Entry point, run once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init();

    match Page::from_window() {
        Ok(page) => wire(&page),
        Err(err) => tracing::error!(%err, "no document to bind to"),
    }
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("site-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}
