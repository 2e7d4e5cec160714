//! Theme toggle wiring.
//!
//! The persisted theme is applied to `<html data-theme>` at startup, before
//! fragments load, to avoid a flash of the wrong theme. The toggle control
//! lives in the header fragment, so click handling is mounted afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::components::Component;
use crate::config::SiteConfig;
use crate::state::theme::{Theme, ThemeStore, ThemeTarget};
use crate::util::dom::{self, ListenerSet};
use crate::util::storage::BrowserStore;
use crate::util::timer::Timer;

const THEME_ATTR: &str = "data-theme";
const TOGGLE_ID: &str = "theme-toggle";
const KNOB_ID: &str = "theme-knob";
const FLASH_CLASS: &str = "theme-flash";

/// `<html data-theme>` plus the toggle's icon and accessible label.
pub struct DocumentTheme {
    root: Element,
    toggle: Option<Element>,
    knob: Option<Element>,
}

impl DocumentTheme {
    pub fn new(document: &Document) -> Option<Self> {
        Some(Self {
            root: document.document_element()?,
            toggle: document.get_element_by_id(TOGGLE_ID),
            knob: document.get_element_by_id(KNOB_ID),
        })
    }
}

impl ThemeTarget for DocumentTheme {
    fn applied(&self) -> Option<Theme> {
        match self.root.get_attribute(THEME_ATTR)?.parse() {
            Ok(theme) => Some(theme),
            Err(_) => None,
        }
    }

    fn apply(&mut self, theme: Theme) {
        dom::set_attr(&self.root, THEME_ATTR, theme.as_str());
        if let Some(knob) = &self.knob {
            knob.set_text_content(Some(theme.icon()));
        }
        if let Some(toggle) = &self.toggle {
            dom::set_attr(toggle, "aria-label", &theme.toggle_label());
        }
    }
}

fn theme_store(config: &SiteConfig) -> ThemeStore<BrowserStore> {
    ThemeStore::new(BrowserStore::open(), config.theme_storage_key.clone())
}

/// Apply the persisted theme to the document and sync the toggle.
///
/// The wasm module starts after first paint, so each page's `<head>` carries
/// a blocking inline script that copies the stored value into `data-theme`
/// first. This call reconciles with it; every toggle and write goes through
/// [`ThemeStore`].
pub fn apply_saved_theme(document: &Document, config: &SiteConfig) -> Option<Theme> {
    let store = theme_store(config);
    let mut target = DocumentTheme::new(document)?;
    let theme = store.get_preference();
    store.apply_preference(&mut target, theme);
    Some(theme)
}

/// Short full-screen overlay shown while the palette swaps.
struct Flash {
    document: Document,
    element: Option<Element>,
    timer: Timer,
}

impl Flash {
    fn trigger(this: &Rc<RefCell<Self>>, millis: u32) {
        let mut flash = this.borrow_mut();
        if let Some(previous) = flash.element.take() {
            previous.remove();
        }
        let Some(body) = flash.document.body() else {
            return;
        };
        let Some(element) = dom::report(flash.document.create_element("div"), "theme flash") else {
            return;
        };
        element.set_class_name(FLASH_CLASS);
        if dom::report(body.append_child(&element), "theme flash").is_none() {
            return;
        }
        flash.element = Some(element.clone());

        let weak = Rc::downgrade(this);
        flash.timer.schedule(millis, move || {
            element.remove();
            if let Some(flash) = weak.upgrade() {
                flash.borrow_mut().element = None;
            }
        });
    }

    fn clear(&mut self) {
        self.timer.cancel();
        if let Some(element) = self.element.take() {
            element.remove();
        }
    }
}

pub struct ThemeToggle {
    listeners: ListenerSet,
    flash: Rc<RefCell<Flash>>,
}

impl ThemeToggle {
    pub fn mount(document: &Document, config: &SiteConfig) -> Option<Self> {
        let toggle = document.get_element_by_id(TOGGLE_ID)?;
        let mut target = DocumentTheme::new(document)?;
        let store = theme_store(config);

        // The knob arrived with the header fragment; sync it to what is applied.
        let current = target.applied().unwrap_or_else(|| store.get_preference());
        store.apply_preference(&mut target, current);

        let flash = Rc::new(RefCell::new(Flash { document: document.clone(), element: None, timer: Timer::new() }));
        let flash_ms = config.theme_flash_ms;
        let mut listeners = ListenerSet::default();
        {
            let flash = Rc::clone(&flash);
            listeners.on(&toggle, "click", move |_| {
                Flash::trigger(&flash, flash_ms);
                let theme = store.toggle(&mut target);
                log::debug!("theme switched to {theme}");
            });
        }

        Some(Self { listeners, flash })
    }
}

impl Component for ThemeToggle {
    fn name(&self) -> &'static str {
        "theme-toggle"
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        self.flash.borrow_mut().clear();
    }
}
