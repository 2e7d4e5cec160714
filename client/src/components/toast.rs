//! Transient notification banner.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::components::Component;
use crate::util::dom;
use crate::util::timer::Timer;

const TOAST_ID: &str = "toast";
const SHOW_CLASS: &str = "show";

struct Toast {
    element: Element,
    timer: Timer,
}

/// Shared handle to the page's `#toast` container. A new toast replaces the
/// current one and restarts the dismissal timer.
#[derive(Clone)]
pub struct ToastHandle {
    inner: Rc<RefCell<Toast>>,
}

impl ToastHandle {
    pub fn mount(document: &Document) -> Option<Self> {
        let element = document.get_element_by_id(TOAST_ID)?;
        dom::set_attr(&element, "role", "status");
        Some(Self { inner: Rc::new(RefCell::new(Toast { element, timer: Timer::new() })) })
    }

    pub fn show(&self, message: &str, millis: u32) {
        let mut toast = self.inner.borrow_mut();
        toast.element.set_text_content(Some(message));
        dom::set_class(&toast.element, SHOW_CLASS, true);
        let element = toast.element.clone();
        toast
            .timer
            .schedule(millis, move || dom::set_class(&element, SHOW_CLASS, false));
    }
}

impl Component for ToastHandle {
    fn name(&self) -> &'static str {
        "toast"
    }

    fn teardown(&mut self) {
        let mut toast = self.inner.borrow_mut();
        toast.timer.cancel();
        dom::set_class(&toast.element, SHOW_CLASS, false);
    }
}
