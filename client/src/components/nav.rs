//! Active navigation highlighting and the mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::components::Component;
use crate::state::nav::{MenuState, active_links, current_page};
use crate::util::dom::{self, ListenerSet};

const MENU_ID: &str = "navMenu";
const TOGGLE_ID: &str = "navToggle";
const LINKS_SELECTOR: &str = ".nav-links a";
const ACTIVE_CLASS: &str = "active";

/// Mark exactly the nav links whose `href` equals the current page as
/// active and reset the rest. Returns how many were marked.
pub fn highlight_active(document: &Document, default_page: &str) -> usize {
    let pathname = web_sys::window()
        .and_then(|w| dom::report(w.location().pathname(), "location.pathname"))
        .unwrap_or_default();
    let page = current_page(&pathname, default_page);

    let links = dom::query_all(document, LINKS_SELECTOR);
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    let flags = active_links(hrefs.iter().map(Option::as_deref), page);
    for (link, active) in links.iter().zip(&flags) {
        dom::set_class(link, ACTIVE_CLASS, *active);
    }
    flags.iter().filter(|active| **active).count()
}

#[derive(Clone)]
struct MenuView {
    menu: Element,
    toggle: Element,
}

impl MenuView {
    fn render(&self, open: bool) {
        dom::set_class(&self.menu, ACTIVE_CLASS, open);
        dom::set_class(&self.toggle, ACTIVE_CLASS, open);
        dom::set_attr(&self.toggle, "aria-expanded", if open { "true" } else { "false" });
    }
}

fn close(state: &RefCell<MenuState>, view: &MenuView) {
    if state.borrow_mut().close() {
        view.render(false);
    }
}

pub struct NavMenu {
    listeners: ListenerSet,
    state: Rc<RefCell<MenuState>>,
    view: MenuView,
}

impl NavMenu {
    pub fn mount(document: &Document) -> Option<Self> {
        let view = MenuView {
            menu: document.get_element_by_id(MENU_ID)?,
            toggle: document.get_element_by_id(TOGGLE_ID)?,
        };
        let nav = dom::report(view.menu.closest("nav"), "nav")
            .flatten()
            .unwrap_or_else(|| view.menu.clone());
        let state = Rc::new(RefCell::new(MenuState::default()));
        view.render(false);

        let mut listeners = ListenerSet::default();
        {
            let toggle = view.toggle.clone();
            let (state, view) = (Rc::clone(&state), view.clone());
            listeners.on(&toggle, "click", move |_| {
                let open = state.borrow_mut().toggle();
                view.render(open);
            });
        }
        for link in dom::query_all(document, LINKS_SELECTOR) {
            let (state, view) = (Rc::clone(&state), view.clone());
            listeners.on(&link, "click", move |_| close(&state, &view));
        }
        {
            let (state, view) = (Rc::clone(&state), view.clone());
            listeners.on(document, "click", move |event| {
                let inside = dom::event_within(&event, &nav) || dom::event_within(&event, &view.toggle);
                if state.borrow_mut().on_document_click(inside) {
                    view.render(false);
                }
            });
        }
        {
            let (state, view) = (Rc::clone(&state), view.clone());
            listeners.on(document, "keydown", move |event| {
                let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if escape {
                    close(&state, &view);
                }
            });
        }

        Some(Self { listeners, state, view })
    }
}

impl Component for NavMenu {
    fn name(&self) -> &'static str {
        "nav-menu"
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        close(&self.state, &self.view);
    }
}
