//! Host-independent behavior of the contact page.
//!
//! Everything the page does in response to user events lives here as plain
//! state machines. The browser never appears directly: each component talks to
//! the page through a small trait (the "host seam"), and the `site-wasm` crate
//! provides `web-sys` implementations of those traits.
//!
//! - [`lang`] - language preference resolution and application
//! - [`store`] - the one-key preference store
//! - [`dialog`] - the confirm modal state machine
//! - [`form`] - the contact form submission gate
//! - [`nav`] - mobile menu state
//! - [`config`] - page strings and endpoints
//! - [`dom`] - element identifiers shared with the page renderer

pub mod config;
pub mod dialog;
pub mod dom;
pub mod error;
pub mod form;
pub mod lang;
pub mod nav;
pub mod store;

pub use config::SiteConfig;
pub use dialog::{CancelTrigger, ConfirmDialog, DialogSurface, FormSnapshot, Resolution};
pub use error::{Result, SiteError};
pub use form::{ConfirmOutcome, ContactForm, FormField, FormHost, SubmitOutcome};
pub use lang::{Language, LanguageDocument, LanguageSelector};
pub use nav::{ClickTarget, MobileMenu};
pub use store::{MemoryStore, PreferenceStore};
