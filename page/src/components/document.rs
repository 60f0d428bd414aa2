//! Root document component - the complete HTML page

use super::{ConfirmModal, ContactSection, Hero, SiteHeader};
use crate::WASM_GLUE_PATH;
use crate::styles::SITE_CSS;
use leptos::prelude::*;
use site_core::{Language, SiteConfig, dom};

/// The complete HTML document; `config_json` is the escaped `siteConfig` payload
#[component]
pub fn PageDocument(config: SiteConfig, config_json: String) -> impl IntoView {
    let loader = format!("import init from '{WASM_GLUE_PATH}';\ninit();");

    view! {
        <html lang=Language::PRIMARY.html_lang()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"巧爱语音 | Qiaoai Voice"</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <SiteHeader />
                <main>
                    <Hero />
                    <ContactSection config=config />
                </main>
                <footer class="site-footer">
                    <p>{format!("© 2025 Qiaoai Voice · {}", site_core::config::CONTACT_ADDRESS)}</p>
                </footer>
                <ConfirmModal />
                <script type="application/json" id=dom::SITE_CONFIG inner_html=config_json></script>
                <script type="module" inner_html=loader></script>
            </body>
        </html>
    }
}
