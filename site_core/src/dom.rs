//! DOM contract: identifiers, classes and attributes the page must carry.
//!
//! The renderer in `site-page` emits these and the bindings in `site-wasm`
//! look them up, so the two can never drift apart.

// Navigation
pub const MOBILE_NAV: &str = "mobileNav";
pub const MOBILE_MENU_BUTTON_CLASS: &str = "mobile-menu-btn";
pub const LOGO_CLASS: &str = "logo";

// Language switcher
pub const LANG_BUTTON_CLASS: &str = "lang-btn";
pub const LANG_DATA_ATTR: &str = "data-language";

// Contact form
pub const CONTACT_FORM: &str = "contactForm";
pub const FORM_STATUS: &str = "formStatus";
pub const SEND_BUTTON: &str = "sendBtn";
pub const REPLY_TO: &str = "cfReplyTo";
pub const FIELD_NAME: &str = "cfName";
pub const FIELD_EMAIL: &str = "cfEmail";
pub const FIELD_SUBJECT: &str = "cfSubject";
pub const FIELD_MESSAGE: &str = "cfMessage";

// Confirm modal
pub const CONFIRM_MODAL: &str = "confirmModal";
pub const CONFIRM_BACKDROP: &str = "confirmBackdrop";
pub const CONFIRM_NAME: &str = "confirmName";
pub const CONFIRM_EMAIL: &str = "confirmEmail";
pub const CONFIRM_SUBJECT: &str = "confirmSubject";
pub const CONFIRM_MESSAGE: &str = "confirmMessage";
pub const CONFIRM_CANCEL: &str = "confirmCancel";
pub const CONFIRM_OK: &str = "confirmOk";

// Embedded configuration blob
pub const SITE_CONFIG: &str = "siteConfig";

/// Class toggled on open overlays, menu buttons and the active language button.
pub const ACTIVE_CLASS: &str = "active";

/// CSS selector for the language button carrying `code`.
pub fn lang_button_selector(code: &str) -> String {
    format!("[{}=\"{}\"]", LANG_DATA_ATTR, code)
}
