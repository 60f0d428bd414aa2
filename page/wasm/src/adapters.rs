//! `web-sys` implementations of the `site-core` host seams.
//!
//! Every lookup goes through [`element`], which turns a missing node into
//! `SiteError::MissingElement` so the core components decide what a missing
//! element means.

use site_core::{
    DialogSurface, FormField, FormHost, Language, LanguageDocument, PreferenceStore, Result,
    SiteError, dom,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Storage, Window,
};

pub(crate) fn dom_error(err: JsValue) -> SiteError {
    SiteError::Dom(format!("{:?}", err))
}

/// Element by id, or `MissingElement`.
pub fn element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::missing(format!("#{id}")))
}

/// Element by id, cast to a concrete type.
pub fn element_as<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| SiteError::missing(format!("#{id} (unexpected element type)")))
}

/// First element matching `selector`, or `MissingElement`.
pub fn query(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .map_err(dom_error)?
        .ok_or_else(|| SiteError::missing(selector))
}

/// All elements matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or_else(|| SiteError::missing("body"))
}

// ============================================================================
// Preference store
// ============================================================================

/// `window.localStorage`; `None` when storage is disabled.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn open(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| SiteError::Storage("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| SiteError::Storage(format!("{:?}", err)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| SiteError::Storage(format!("{:?}", err)))
    }
}

// ============================================================================
// Language presentation
// ============================================================================

pub struct DomLanguageDocument {
    document: Document,
}

impl DomLanguageDocument {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }
}

impl LanguageDocument for DomLanguageDocument {
    fn clear_active_buttons(&mut self) {
        for button in query_all(&self.document, &format!(".{}", dom::LANG_BUTTON_CLASS)) {
            let _ = button.class_list().remove_1(dom::ACTIVE_CLASS);
        }
    }

    fn mark_active_button(&mut self, lang: Language) -> Result<()> {
        let button = query(&self.document, &dom::lang_button_selector(lang.code()))?;
        button
            .class_list()
            .add_1(dom::ACTIVE_CLASS)
            .map_err(dom_error)
    }

    fn remove_body_class(&mut self, class: &str) {
        if let Ok(body) = body(&self.document) {
            let _ = body.class_list().remove_1(class);
        }
    }

    fn add_body_class(&mut self, class: &str) {
        if let Ok(body) = body(&self.document) {
            let _ = body.class_list().add_1(class);
        }
    }

    fn set_document_lang(&mut self, tag: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", tag);
        }
    }
}

// ============================================================================
// Contact form
// ============================================================================

/// The contact form and the controls around it.
pub struct DomFormHost {
    document: Document,
    form: Option<HtmlFormElement>,
}

impl DomFormHost {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
            form: element_as(document, dom::CONTACT_FORM).ok(),
        }
    }

    pub fn form(&self) -> Option<&HtmlFormElement> {
        self.form.as_ref()
    }
}

impl FormHost for DomFormHost {
    fn check_validity(&mut self) -> bool {
        self.form.as_ref().is_some_and(|form| form.check_validity())
    }

    fn report_validity(&mut self) {
        if let Some(form) = &self.form {
            form.report_validity();
        }
    }

    fn field_value(&self, field: FormField) -> Result<String> {
        let el = element(&self.document, field.input_id())?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            Ok(input.value())
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            Ok(area.value())
        } else {
            Err(SiteError::missing(format!("#{} (not a text field)", field.input_id())))
        }
    }

    fn set_reply_to(&mut self, value: &str) -> Result<()> {
        element_as::<HtmlInputElement>(&self.document, dom::REPLY_TO)?.set_value(value);
        Ok(())
    }

    fn set_send_enabled(&mut self, enabled: bool) -> Result<()> {
        element_as::<HtmlButtonElement>(&self.document, dom::SEND_BUTTON)?.set_disabled(!enabled);
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> Result<()> {
        element(&self.document, dom::FORM_STATUS)?.set_text_content(Some(text));
        Ok(())
    }

    fn can_request_submit(&self) -> bool {
        self.form.as_ref().is_some_and(|form| {
            js_sys::Reflect::get(form, &JsValue::from_str("requestSubmit"))
                .map(|f| f.is_function())
                .unwrap_or(false)
        })
    }
}

// ============================================================================
// Confirm modal
// ============================================================================

pub struct DomModal {
    document: Document,
}

impl DomModal {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }
}

impl DialogSurface for DomModal {
    fn set_field_text(&mut self, field: FormField, text: &str) -> Result<()> {
        element(&self.document, field.confirm_id())?.set_text_content(Some(text));
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<()> {
        let modal = element(&self.document, dom::CONFIRM_MODAL)?;
        let classes = modal.class_list();
        if visible {
            classes.add_1(dom::ACTIVE_CLASS).map_err(dom_error)?;
        } else {
            classes.remove_1(dom::ACTIVE_CLASS).map_err(dom_error)?;
        }
        modal
            .set_attribute("aria-hidden", if visible { "false" } else { "true" })
            .map_err(dom_error)
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Ok(body) = body(&self.document) else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}
