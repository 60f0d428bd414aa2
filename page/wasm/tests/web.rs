//! Browser tests for the web-sys adapters and the event wiring.
//!
//! Run with: `wasm-pack test --headless --firefox page/wasm`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{
    CancelTrigger, ContactForm, FormField, Language, LanguageSelector, PreferenceStore,
    SiteConfig, SubmitOutcome, dom,
};
use site_wasm::adapters::{DomFormHost, DomLanguageDocument, DomModal, LocalStorageStore};
use site_wasm::wire::{Page, listen, load_config, wire, wire_contact_form};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    let html = format!(
        r#"
        <button class="{lang}" data-language="zh">中文</button>
        <button class="{lang}" data-language="en">EN</button>
        <form id="{form}" action="about:blank" method="POST">
            <input id="{name}" required>
            <input id="{email}" type="email" required>
            <input id="{subject}" required>
            <textarea id="{message}" required></textarea>
            <input id="{reply}" type="hidden">
            <button id="{send}" type="submit">send</button>
            <p id="{status}"></p>
        </form>
        <div id="{modal}" aria-hidden="true">
            <div id="{backdrop}"></div>
            <dd id="{c_name}"></dd><dd id="{c_email}"></dd>
            <dd id="{c_subject}"></dd><dd id="{c_message}"></dd>
            <button id="{cancel}" type="button">cancel</button>
            <button id="{ok}" type="button">ok</button>
        </div>
        <script type="application/json" id="{config}">{{"sending_message":"Sending"}}</script>
        "#,
        lang = dom::LANG_BUTTON_CLASS,
        form = dom::CONTACT_FORM,
        name = dom::FIELD_NAME,
        email = dom::FIELD_EMAIL,
        subject = dom::FIELD_SUBJECT,
        message = dom::FIELD_MESSAGE,
        reply = dom::REPLY_TO,
        send = dom::SEND_BUTTON,
        status = dom::FORM_STATUS,
        modal = dom::CONFIRM_MODAL,
        backdrop = dom::CONFIRM_BACKDROP,
        c_name = dom::CONFIRM_NAME,
        c_email = dom::CONFIRM_EMAIL,
        c_subject = dom::CONFIRM_SUBJECT,
        c_message = dom::CONFIRM_MESSAGE,
        cancel = dom::CONFIRM_CANCEL,
        ok = dom::CONFIRM_OK,
        config = dom::SITE_CONFIG,
    );
    document.body().unwrap().set_inner_html(&html);
    document
}

fn fill(document: &Document, field: FormField, value: &str) {
    let el = document.get_element_by_id(field.input_id()).unwrap();
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else {
        el.unchecked_ref::<HtmlTextAreaElement>().set_value(value);
    }
}

fn text(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn fill_valid(document: &Document) {
    fill(document, FormField::Name, "Ann");
    fill(document, FormField::Email, " ann@example.com ");
    fill(document, FormField::Subject, "Quote");
    fill(document, FormField::Message, "Hello");
}

fn page(document: &Document) -> Page {
    Page {
        window: web_sys::window().unwrap(),
        document: document.clone(),
        config: load_config(document),
    }
}

/// Registered after the wired listener: records whether it prevented the
/// default, then prevents it so the test page never navigates.
fn record_submits(document: &Document) -> Rc<RefCell<Vec<bool>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let form = document.get_element_by_id(dom::CONTACT_FORM).unwrap();
    listen(&form, "submit", move |event: Event| {
        log.borrow_mut().push(event.default_prevented());
        event.prevent_default();
    })
    .unwrap();
    seen
}

fn dispatch_submit(document: &Document) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    let form = document.get_element_by_id(dom::CONTACT_FORM).unwrap();
    form.dispatch_event(&event).unwrap();
}

fn click(document: &Document, id: &str) {
    document
        .get_element_by_id(id)
        .unwrap()
        .unchecked_into::<HtmlElement>()
        .click();
}

fn press_escape(document: &Document) {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&event).unwrap();
}

fn modal_hidden(document: &Document) -> bool {
    document
        .get_element_by_id(dom::CONFIRM_MODAL)
        .and_then(|el| el.get_attribute("aria-hidden"))
        .as_deref()
        == Some("true")
}

fn send_disabled(document: &Document) -> bool {
    document
        .get_element_by_id(dom::SEND_BUTTON)
        .unwrap()
        .unchecked_into::<HtmlButtonElement>()
        .disabled()
}

fn form(document: &Document) -> ContactForm<DomFormHost, DomModal> {
    ContactForm::new(
        DomFormHost::new(document),
        DomModal::new(document),
        &load_config(document),
    )
}

#[wasm_bindgen_test]
fn embedded_config_overrides_defaults() {
    let document = fixture();
    let config = load_config(&document);
    assert_eq!(config.sending_message, "Sending");
    assert_eq!(config.storage_key, SiteConfig::default().storage_key);
}

#[wasm_bindgen_test]
fn empty_form_is_rejected() {
    let document = fixture();
    let mut form = form(&document);
    assert_eq!(form.on_submit(), SubmitOutcome::Invalid);

    let modal = document.get_element_by_id(dom::CONFIRM_MODAL).unwrap();
    assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn valid_form_opens_modal_then_cancel_restores() {
    let document = fixture();
    fill(&document, FormField::Name, "  Ann ");
    fill(&document, FormField::Email, "ann@example.com");
    fill(&document, FormField::Subject, "Quote");
    fill(&document, FormField::Message, "Hello");

    let mut form = form(&document);
    assert_eq!(form.on_submit(), SubmitOutcome::AwaitingConfirmation);

    let modal = document.get_element_by_id(dom::CONFIRM_MODAL).unwrap();
    let body: HtmlElement = document.body().unwrap();
    assert!(modal.class_list().contains(dom::ACTIVE_CLASS));
    assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("false"));
    assert_eq!(text(&document, dom::CONFIRM_NAME), "Ann");
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    form.on_cancel(CancelTrigger::Backdrop);
    assert!(!modal.class_list().contains(dom::ACTIVE_CLASS));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
}

#[wasm_bindgen_test]
fn confirmed_submit_finalizes_fields() {
    let document = fixture();
    fill(&document, FormField::Name, "Ann");
    fill(&document, FormField::Email, " ann@example.com ");
    fill(&document, FormField::Subject, "Quote");
    fill(&document, FormField::Message, "Hello");

    let mut form = form(&document);
    form.on_submit();
    form.on_confirm();
    assert!(form.on_submit().allows_native_submit());

    let reply = document
        .get_element_by_id(dom::REPLY_TO)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(reply.value(), "ann@example.com");
    assert_eq!(text(&document, dom::FORM_STATUS), "Sending");
}

#[wasm_bindgen_test]
fn language_apply_updates_document_and_storage() {
    let document = fixture();
    let window = web_sys::window().unwrap();
    let mut selector = LanguageSelector::new(
        LocalStorageStore::open(&window),
        DomLanguageDocument::new(&document),
        "test.preferredLang",
    );

    selector.apply(Language::En);
    let body = document.body().unwrap();
    let en = document.query_selector("[data-language=\"en\"]").unwrap().unwrap();
    assert!(body.class_list().contains("lang-en"));
    assert!(en.class_list().contains(dom::ACTIVE_CLASS));
    assert_eq!(document.document_element().unwrap().get_attribute("lang").as_deref(), Some("en"));

    // No jp button in the fixture: skipped, everything else still applied
    selector.apply(Language::Jp);
    assert!(!en.class_list().contains(dom::ACTIVE_CLASS));
    assert!(body.class_list().contains("lang-jp"));
    assert!(!body.class_list().contains("lang-en"));
    assert_eq!(
        selector.store().load("test.preferredLang").unwrap().as_deref(),
        Some("jp")
    );
}

#[wasm_bindgen_test]
fn wired_submit_is_prevented_until_confirmed() {
    let document = fixture();
    wire_contact_form(&page(&document)).unwrap();
    let submits = record_submits(&document);

    dispatch_submit(&document);
    assert_eq!(*submits.borrow(), vec![true]);
    assert!(modal_hidden(&document));

    fill_valid(&document);
    dispatch_submit(&document);
    assert_eq!(*submits.borrow(), vec![true, true]);
    assert!(!modal_hidden(&document));
    assert!(!send_disabled(&document));
}

#[wasm_bindgen_test]
fn confirm_button_resubmits_once_then_locks() {
    let document = fixture();
    fill_valid(&document);
    wire_contact_form(&page(&document)).unwrap();
    let submits = record_submits(&document);

    dispatch_submit(&document);
    // requestSubmit re-enters the submit listener while the click handler runs
    click(&document, dom::CONFIRM_OK);
    assert_eq!(*submits.borrow(), vec![true, false]);
    assert!(modal_hidden(&document));
    assert!(send_disabled(&document));
    assert_eq!(text(&document, dom::FORM_STATUS), "Sending");

    click(&document, dom::CONFIRM_OK);
    assert_eq!(submits.borrow().len(), 2);

    dispatch_submit(&document);
    assert_eq!(*submits.borrow(), vec![true, false, true]);
}

#[wasm_bindgen_test]
fn rejected_resubmit_needs_fresh_confirmation() {
    let document = fixture();
    fill_valid(&document);
    wire_contact_form(&page(&document)).unwrap();
    let submits = record_submits(&document);

    dispatch_submit(&document);
    fill(&document, FormField::Name, "");
    click(&document, dom::CONFIRM_OK);
    assert_eq!(*submits.borrow(), vec![true]);
    assert!(!send_disabled(&document));

    fill(&document, FormField::Name, "Bob");
    dispatch_submit(&document);
    assert_eq!(*submits.borrow(), vec![true, true]);
    assert!(!modal_hidden(&document));
    assert_eq!(text(&document, dom::CONFIRM_NAME), "Bob");
}

#[wasm_bindgen_test]
fn every_cancel_listener_closes_modal() {
    let triggers: [fn(&Document); 3] = [
        |d| click(d, dom::CONFIRM_CANCEL),
        |d| click(d, dom::CONFIRM_BACKDROP),
        press_escape,
    ];
    for trigger in triggers {
        let document = fixture();
        fill_valid(&document);
        wire_contact_form(&page(&document)).unwrap();
        let submits = record_submits(&document);

        dispatch_submit(&document);
        assert!(!modal_hidden(&document));
        trigger(&document);
        assert!(modal_hidden(&document));

        dispatch_submit(&document);
        assert_eq!(*submits.borrow(), vec![true, true]);
        assert!(!modal_hidden(&document));
        assert!(!send_disabled(&document));
    }
}

#[wasm_bindgen_test]
fn wire_binds_language_buttons() {
    let document = fixture();
    wire(&page(&document));

    let en = document
        .query_selector("[data-language=\"en\"]")
        .unwrap()
        .unwrap()
        .unchecked_into::<HtmlElement>();
    en.click();

    let body = document.body().unwrap();
    assert!(body.class_list().contains("lang-en"));
    assert!(en.class_list().contains(dom::ACTIVE_CLASS));
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    assert_eq!(
        storage.get_item(&SiteConfig::default().storage_key).unwrap().as_deref(),
        Some("en")
    );
}
