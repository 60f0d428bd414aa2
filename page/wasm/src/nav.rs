//! Mobile menu toggling and smooth scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::nav::ClickTarget;
use site_core::{MobileMenu, Result, dom};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::adapters::{element, query, query_all};
use crate::wire::listen;

/// In-page anchor target for `href`, or `None` for a bare `#` / external link.
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Mobile nav container plus its toggle button.
#[derive(Clone)]
struct MenuElements {
    nav: Element,
    button: Element,
}

impl MenuElements {
    fn find(document: &Document) -> Result<Self> {
        Ok(Self {
            nav: element(document, dom::MOBILE_NAV)?,
            button: query(document, &format!(".{}", dom::MOBILE_MENU_BUTTON_CLASS))?,
        })
    }

    fn render(&self, open: bool) {
        for el in [&self.nav, &self.button] {
            let _ = el
                .class_list()
                .toggle_with_force(dom::ACTIVE_CLASS, open);
        }
    }

    fn classify(&self, target: Option<&Node>) -> ClickTarget {
        if self.nav.contains(target) {
            ClickTarget::Menu
        } else if self.button.contains(target) {
            ClickTarget::Toggle
        } else {
            ClickTarget::Elsewhere
        }
    }
}

/// Shared menu state and the elements it is rendered into.
#[derive(Clone)]
struct Menu {
    state: Rc<RefCell<MobileMenu>>,
    elements: Option<MenuElements>,
}

impl Menu {
    fn close(&self) {
        if self.state.borrow_mut().close() {
            if let Some(elements) = &self.elements {
                elements.render(false);
            }
        }
    }
}

/// Register the menu, logo and anchor handlers.
pub fn wire(window: &Window, document: &Document) -> Result<()> {
    let menu = Menu {
        state: Rc::new(RefCell::new(MobileMenu::default())),
        elements: MenuElements::find(document)
            .inspect_err(|err| tracing::debug!(%err, "no mobile menu"))
            .ok(),
    };

    if let Some(elements) = menu.elements.clone() {
        let state = menu.state.clone();
        let toggle_elements = elements.clone();
        listen(&elements.button, "click", move |_: Event| {
            let open = state.borrow_mut().toggle();
            toggle_elements.render(open);
        })?;

        let state = menu.state.clone();
        listen(document, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let hit = elements.classify(target.as_ref());
            if state.borrow_mut().on_document_click(hit) {
                elements.render(false);
            }
        })?;
    }

    if let Ok(logo) = query(document, &format!(".{}", dom::LOGO_CLASS)) {
        let window = window.clone();
        let menu = menu.clone();
        listen(&logo, "click", move |event: Event| {
            event.prevent_default();
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
            menu.close();
        })?;
    }

    for anchor in query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let menu = menu.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Ok(target) = query(&document, selector) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
                menu.close();
            }
        })?;
    }

    Ok(())
}
