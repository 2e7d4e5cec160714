//! Thin helpers over `web-sys` DOM calls.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls return `Result<_, JsValue>`. None of those failures are fatal to
//! the page, so they are funneled through [`report`], logged, and dropped.
//! Event listeners are owned by [`Listener`] values and removed on drop,
//! which is what component teardown relies on.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

/// Log a failed DOM call and keep going.
pub fn report<T>(result: Result<T, JsValue>, context: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{context}: {err:?}");
            None
        }
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

/// All elements under `document` matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    elements(report(document.query_selector_all(selector), selector))
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    elements(report(root.query_selector_all(selector), selector))
}

/// First element under `root` matching `selector`.
pub fn query_one(root: &Element, selector: &str) -> Option<Element> {
    report(root.query_selector(selector), selector).flatten()
}

fn elements(list: Option<NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    report(element.class_list().toggle_with_force(class, on), "toggle class");
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    report(element.set_attribute(name, value), name);
}

/// Show or hide via inline `display`. Showing clears the inline value so the
/// stylesheet decides.
pub fn set_displayed(element: &Element, shown: bool, display: &str) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    if shown && display.is_empty() {
        report(style.remove_property("display"), "display");
    } else {
        let value = if shown { display } else { "none" };
        report(style.set_property("display", value), "display");
    }
}

/// Whether the event target sits inside `container` (inclusive).
pub fn event_within(event: &Event, container: &Element) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_ref::<web_sys::Node>().cloned())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// An attached event listener. Dropping it detaches the handler.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        report(
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()),
            event,
        )?;
        Some(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        report(
            self.target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
            self.event,
        );
    }
}

/// Listeners owned by one component.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub fn on(&mut self, target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) {
        if let Some(listener) = Listener::attach(target, event, handler) {
            self.listeners.push(listener);
        }
    }

    /// Detach everything.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

/// Run `f` once the DOM is parsed (immediately if it already is).
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    report(
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()),
        "DOMContentLoaded",
    );
}
