//! Explicit event listener registration.
//!
//! All listeners are registered here, once, by [`wire`]. Shared component
//! state lives in `Rc<RefCell<_>>` captured by the closures; no borrow is held
//! across a call that can dispatch another event (see `on_confirm`).

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{
    CancelTrigger, ConfirmOutcome, ContactForm, LanguageSelector, Result, SiteConfig, SiteError,
    dom,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, KeyboardEvent, UrlSearchParams, Window};

use crate::adapters::{
    DomFormHost, DomLanguageDocument, DomModal, LocalStorageStore, dom_error, element, query_all,
};
use crate::nav;

pub type SharedForm = Rc<RefCell<ContactForm<DomFormHost, DomModal>>>;
pub type SharedLanguage = Rc<RefCell<LanguageSelector<LocalStorageStore, DomLanguageDocument>>>;

/// The page's DOM collaborators.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: SiteConfig,
}

impl Page {
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| SiteError::missing("window"))?;
        let document = window
            .document()
            .ok_or_else(|| SiteError::missing("document"))?;
        let config = load_config(&document);
        Ok(Self {
            window,
            document,
            config,
        })
    }

    /// Raw `sent` query parameter of the current URL.
    pub fn sent_param(&self) -> Option<String> {
        let search = self.window.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get("sent")
    }

    /// `navigator.language`.
    pub fn browser_locale(&self) -> Option<String> {
        self.window.navigator().language()
    }
}

/// Embedded `siteConfig` JSON, or the defaults.
pub fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(dom::SITE_CONFIG)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!(%err, "using default site config");
        SiteConfig::default()
    })
}

/// Add `handler` as a listener for `event` on `target` for the page's lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

/// Build the components and register every listener.
///
/// Each part is wired on its own; a failure is logged and the rest still runs.
pub fn wire(page: &Page) {
    match wire_contact_form(page) {
        Ok(form) => {
            form.borrow_mut().show_sent_notice(page.sent_param().as_deref());
        }
        Err(err) => tracing::warn!(%err, "contact form not wired"),
    }

    if let Err(err) = wire_language(page) {
        tracing::warn!(%err, "language switcher not wired");
    }
    if let Err(err) = nav::wire(&page.window, &page.document) {
        tracing::warn!(%err, "navigation not wired");
    }
}

/// Contact form submit gate plus the confirm modal buttons and Escape key.
pub fn wire_contact_form(page: &Page) -> Result<SharedForm> {
    let document = &page.document;
    let host = DomFormHost::new(document);
    let html_form = host.form().cloned();
    let form: SharedForm = Rc::new(RefCell::new(ContactForm::new(
        host,
        DomModal::new(document),
        &page.config,
    )));

    let Some(html_form) = html_form else {
        tracing::debug!("no contact form on this page");
        return Ok(form);
    };

    let shared = form.clone();
    listen(&html_form, "submit", move |event: Event| {
        let outcome = shared.borrow_mut().on_submit();
        if !outcome.allows_native_submit() {
            event.prevent_default();
        }
    })?;

    if let Ok(confirm_btn) = element(document, dom::CONFIRM_OK) {
        let shared = form.clone();
        listen(&confirm_btn, "click", move |_: Event| {
            // Released before requestSubmit re-enters the submit listener
            let outcome = shared.borrow_mut().on_confirm();
            let result = match outcome {
                ConfirmOutcome::RequestSubmit => {
                    let result = html_form.request_submit();
                    shared.borrow_mut().settle_confirm();
                    result
                }
                ConfirmOutcome::SubmitDirectly => html_form.submit(),
                ConfirmOutcome::Ignored => Ok(()),
            };
            if let Err(err) = result {
                tracing::warn!(err = ?err, "form submission failed to start");
            }
        })?;
    }

    for (id, trigger) in [
        (dom::CONFIRM_CANCEL, CancelTrigger::Button),
        (dom::CONFIRM_BACKDROP, CancelTrigger::Backdrop),
    ] {
        if let Ok(el) = element(document, id) {
            let shared = form.clone();
            listen(&el, "click", move |_: Event| {
                shared.borrow_mut().on_cancel(trigger);
            })?;
        }
    }

    let shared = form.clone();
    listen(document, "keydown", move |event: Event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if is_escape {
            shared.borrow_mut().on_cancel(CancelTrigger::Escape);
        }
    })?;

    Ok(form)
}

/// Language buttons, plus initialization once the document is parsed.
pub fn wire_language(page: &Page) -> Result<SharedLanguage> {
    let selector: SharedLanguage = Rc::new(RefCell::new(LanguageSelector::new(
        LocalStorageStore::open(&page.window),
        DomLanguageDocument::new(&page.document),
        page.config.storage_key.clone(),
    )));

    for button in query_all(&page.document, &format!(".{}", dom::LANG_BUTTON_CLASS)) {
        let shared = selector.clone();
        let code = button.get_attribute(dom::LANG_DATA_ATTR);
        listen(&button, "click", move |_: Event| {
            let Some(code) = code.as_deref() else {
                return;
            };
            if let Err(err) = shared.borrow_mut().apply_code(code) {
                tracing::warn!(%err, "language button ignored");
            }
        })?;
    }

    let locale = page.browser_locale();
    if page.document.ready_state() == "loading" {
        let shared = selector.clone();
        listen(&page.document, "DOMContentLoaded", move |_: Event| {
            shared.borrow_mut().initialize(locale.as_deref());
        })?;
    } else {
        selector.borrow_mut().initialize(locale.as_deref());
    }

    Ok(selector)
}
