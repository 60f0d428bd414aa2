//! Page configuration: user-facing strings and the mail relay endpoint.
//!
//! Defaults reproduce the production page. A page may override any subset of
//! keys by embedding a JSON object in `<script type="application/json"
//! id="siteConfig">`; missing keys keep their default.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Recipient of the contact form, relayed by the form endpoint.
pub const CONTACT_ADDRESS: &str = "qiaoai.voice@163.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `localStorage` key holding the language preference.
    pub storage_key: String,
    /// Status text shown while the native POST is in flight.
    pub sending_message: String,
    /// Status text shown when the page is loaded with `?sent=1`.
    pub success_message: String,
    /// Shown in the confirm dialog for fields that are empty after trimming.
    pub placeholder: String,
    /// Mail relay the form POSTs to.
    pub form_action: String,
    /// Where the relay sends the browser back to. Should carry `sent=1`.
    pub redirect_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "preferredLang".into(),
            sending_message: "送信中…".into(),
            success_message: "提交成功！我们已收到您的咨询，将尽快回复。".into(),
            placeholder: "-".into(),
            form_action: format!("https://formsubmit.co/{CONTACT_ADDRESS}"),
            redirect_url: None,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for embedding into the rendered page.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
