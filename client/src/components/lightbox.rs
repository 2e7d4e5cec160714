//! Image lightbox overlay.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent};

use crate::components::Component;
use crate::state::lightbox::{Lightbox, LightboxItem, LightboxKey};
use crate::util::dom::{self, ListenerSet};

const TRIGGER_SELECTOR: &str = "[data-lightbox]";
const OVERLAY_ID: &str = "lightbox";
const IMAGE_ID: &str = "lightbox-img";
const CAPTION_ID: &str = "lightbox-caption";
const CLOSE_ID: &str = "lightbox-close";
const OPEN_CLASS: &str = "open";

/// `data-src`/`data-caption`, falling back to the image's own `src`/`alt`.
fn item_for(trigger: &Element) -> LightboxItem {
    let image = trigger.dyn_ref::<HtmlImageElement>();
    LightboxItem {
        src: trigger
            .get_attribute("data-src")
            .or_else(|| image.map(HtmlImageElement::src))
            .unwrap_or_default(),
        caption: trigger
            .get_attribute("data-caption")
            .or_else(|| image.map(HtmlImageElement::alt))
            .unwrap_or_default(),
    }
}

struct LightboxView {
    overlay: Element,
    image: Option<HtmlImageElement>,
    caption: Option<Element>,
}

impl LightboxView {
    fn render(&self, item: Option<&LightboxItem>) {
        if let Some(item) = item {
            if let Some(image) = &self.image {
                image.set_src(&item.src);
                image.set_alt(&item.caption);
            }
            if let Some(caption) = &self.caption {
                caption.set_text_content(Some(&item.caption));
            }
        }
        let open = item.is_some();
        dom::set_class(&self.overlay, OPEN_CLASS, open);
        dom::set_attr(&self.overlay, "aria-hidden", if open { "false" } else { "true" });
    }
}

pub struct LightboxGallery {
    listeners: ListenerSet,
    state: Rc<RefCell<Lightbox>>,
    view: Rc<LightboxView>,
}

impl LightboxGallery {
    pub fn mount(document: &Document) -> Option<Self> {
        let triggers = dom::query_all(document, TRIGGER_SELECTOR);
        if triggers.is_empty() {
            return None;
        }
        let view = Rc::new(LightboxView {
            overlay: document.get_element_by_id(OVERLAY_ID)?,
            image: document
                .get_element_by_id(IMAGE_ID)
                .and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned()),
            caption: document.get_element_by_id(CAPTION_ID),
        });
        let state = Rc::new(RefCell::new(Lightbox::new(triggers.iter().map(item_for).collect())));
        view.render(None);

        let mut listeners = ListenerSet::default();
        for (index, trigger) in triggers.iter().enumerate() {
            let (state, view) = (Rc::clone(&state), Rc::clone(&view));
            listeners.on(trigger, "click", move |event| {
                event.prevent_default();
                view.render(state.borrow_mut().open(index));
            });
        }
        if let Some(close) = document.get_element_by_id(CLOSE_ID) {
            let (state, view) = (Rc::clone(&state), Rc::clone(&view));
            listeners.on(&close, "click", move |_| {
                if state.borrow_mut().close() {
                    view.render(None);
                }
            });
        }
        {
            let (state, view) = (Rc::clone(&state), Rc::clone(&view));
            let overlay = view.overlay.clone();
            listeners.on(&overlay, "click", move |event| {
                let on_backdrop = event
                    .target()
                    .is_some_and(|target| target.dyn_ref::<Element>() == Some(&view.overlay));
                if on_backdrop && state.borrow_mut().close() {
                    view.render(None);
                }
            });
        }
        {
            let (state, view) = (Rc::clone(&state), Rc::clone(&view));
            listeners.on(document, "keydown", move |event| {
                let Some(key) = event
                    .dyn_ref::<KeyboardEvent>()
                    .and_then(|key| LightboxKey::from_key(&key.key()))
                else {
                    return;
                };
                let mut lightbox = state.borrow_mut();
                if lightbox.handle_key(key) {
                    view.render(lightbox.current());
                }
            });
        }

        Some(Self { listeners, state, view })
    }
}

impl Component for LightboxGallery {
    fn name(&self) -> &'static str {
        "lightbox"
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        if self.state.borrow_mut().close() {
            self.view.render(None);
        }
    }
}
