//! Header shadow, scroll-to-top button, and reading progress bar.

use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::components::Component;
use crate::config::SiteConfig;
use crate::state::scroll::{ScrollThresholds, scroll_view};
use crate::util::dom::{self, ListenerSet};

const HEADER_ID: &str = "header";
const SCROLL_TOP_ID: &str = "scrollTop";
const PROGRESS_ID: &str = "scroll-progress";
const SCROLLED_CLASS: &str = "scrolled";
const VISIBLE_CLASS: &str = "visible";

struct ScrollTargets {
    window: Window,
    document: Document,
    header: Option<Element>,
    scroll_top: Option<Element>,
    progress: Option<HtmlElement>,
    thresholds: ScrollThresholds,
}

impl ScrollTargets {
    fn render(&self) {
        let offset = dom::report(self.window.scroll_y(), "scrollY").unwrap_or(0.0);
        let document_height = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        let viewport_height = dom::report(self.window.inner_height(), "innerHeight")
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        let view = scroll_view(offset, document_height, viewport_height, self.thresholds);

        if let Some(header) = &self.header {
            dom::set_class(header, SCROLLED_CLASS, view.header_scrolled);
        }
        if let Some(button) = &self.scroll_top {
            dom::set_class(button, VISIBLE_CLASS, view.show_scroll_top);
        }
        if let Some(bar) = &self.progress {
            let width = format!("{:.2}%", view.progress_percent);
            dom::report(bar.style().set_property("width", &width), "progress width");
        }
    }
}

pub struct ScrollEffects {
    listeners: ListenerSet,
}

impl ScrollEffects {
    pub fn mount(document: &Document, config: &SiteConfig) -> Option<Self> {
        let targets = ScrollTargets {
            window: web_sys::window()?,
            document: document.clone(),
            header: document.get_element_by_id(HEADER_ID),
            scroll_top: document.get_element_by_id(SCROLL_TOP_ID),
            progress: dom::html_element_by_id(document, PROGRESS_ID),
            thresholds: ScrollThresholds {
                header_offset: config.header_scroll_offset,
                scroll_top_offset: config.scroll_top_offset,
            },
        };
        if targets.header.is_none() && targets.scroll_top.is_none() && targets.progress.is_none() {
            return None;
        }
        let targets = Rc::new(targets);
        targets.render();

        let mut listeners = ListenerSet::default();
        {
            let window = targets.window.clone();
            let targets = Rc::clone(&targets);
            listeners.on(&window, "scroll", move |_| targets.render());
        }
        if let Some(button) = &targets.scroll_top {
            let window = targets.window.clone();
            listeners.on(button, "click", move |_| {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            });
        }

        Some(Self { listeners })
    }
}

impl Component for ScrollEffects {
    fn name(&self) -> &'static str {
        "scroll-effects"
    }

    fn teardown(&mut self) {
        self.listeners.clear();
    }
}
