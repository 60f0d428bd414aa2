//! Leptos UI components for the contact page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── SiteHeader
//! │   ├── LanguageSwitcher
//! │   └── MobileNav
//! ├── Hero
//! ├── ContactSection
//! └── ConfirmModal
//! ```
//!
//! Translated copy is rendered with [`Tr`]: all three languages are present in
//! the markup and CSS shows the one selected by the `<body>` marker class.

mod confirm;
mod contact;
mod document;
mod header;
mod text;

pub use confirm::ConfirmModal;
pub use contact::ContactSection;
pub use document::PageDocument;
pub use header::{Hero, LanguageSwitcher, MobileNav, SiteHeader};
pub use text::Tr;
