//! Category filter buttons for the explore cards.
//!
//! Hidden cards animate out before `display: none` is applied. Each card
//! owns one hide timer; showing the card again cancels it, so a quick
//! hide-then-show never ends with the card collapsed.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::components::Component;
use crate::config::SiteConfig;
use crate::state::filter::{ALL, CardFilter, FilterOutcome};
use crate::util::dom::{self, ListenerSet};
use crate::util::timer::Timer;

const BUTTON_SELECTOR: &str = ".filter-btn";
const CARD_SELECTOR: &str = ".explore-card";
const NO_RESULTS_ID: &str = "no-results";
const FILTER_ATTR: &str = "data-filter";
const CATEGORY_ATTR: &str = "data-category";
const HIDDEN_ATTR: &str = "data-hidden";
const ACTIVE_CLASS: &str = "active";
const SHOWING_CLASS: &str = "showing";
const HIDING_CLASS: &str = "hiding";

struct Cards {
    elements: Vec<Element>,
    categories: Vec<Option<String>>,
    hide_timers: Vec<Timer>,
    no_results: Option<Element>,
    hide_ms: u32,
}

impl Cards {
    fn categories(&self) -> impl Iterator<Item = Option<&str>> {
        self.categories.iter().map(Option::as_deref)
    }

    fn render(&mut self, outcome: &FilterOutcome) {
        let cards = self.elements.iter().zip(&outcome.visible).zip(self.hide_timers.iter_mut());
        for ((card, shown), timer) in cards {
            if *shown {
                timer.cancel();
                dom::set_attr(card, HIDDEN_ATTR, "false");
                dom::set_displayed(card, true, "");
                dom::set_class(card, HIDING_CLASS, false);
                dom::set_class(card, SHOWING_CLASS, true);
            } else {
                dom::set_class(card, HIDING_CLASS, true);
                dom::set_attr(card, HIDDEN_ATTR, "true");
                let card = card.clone();
                timer.schedule(self.hide_ms, move || {
                    if card.get_attribute(HIDDEN_ATTR).as_deref() == Some("true") {
                        dom::set_displayed(&card, false, "");
                    }
                    dom::set_class(&card, HIDING_CLASS, false);
                });
            }
        }
        if let Some(message) = &self.no_results {
            dom::set_displayed(message, outcome.no_results(), "block");
        }
    }
}

pub struct FilterPanel {
    listeners: ListenerSet,
    cards: Rc<RefCell<Cards>>,
}

impl FilterPanel {
    pub fn mount(document: &Document, config: &SiteConfig) -> Option<Self> {
        let buttons = Rc::new(dom::query_all(document, BUTTON_SELECTOR));
        if buttons.is_empty() {
            return None;
        }
        let elements = dom::query_all(document, CARD_SELECTOR);
        let cards = Cards {
            categories: elements.iter().map(|card| card.get_attribute(CATEGORY_ATTR)).collect(),
            hide_timers: elements.iter().map(|_| Timer::new()).collect(),
            elements,
            no_results: document.get_element_by_id(NO_RESULTS_ID),
            hide_ms: config.filter_hide_ms,
        };
        let cards = Rc::new(RefCell::new(cards));
        let filter = Rc::new(RefCell::new(CardFilter::default()));

        let mut listeners = ListenerSet::default();
        for button in buttons.iter() {
            let (buttons, cards, filter) = (Rc::clone(&buttons), Rc::clone(&cards), Rc::clone(&filter));
            let selected = button.clone();
            listeners.on(button, "click", move |_| {
                let category = selected.get_attribute(FILTER_ATTR).unwrap_or_else(|| ALL.to_owned());
                for other in buttons.iter() {
                    dom::set_class(other, ACTIVE_CLASS, *other == selected);
                }
                let mut cards = cards.borrow_mut();
                let outcome = filter.borrow_mut().select(&category, cards.categories());
                log::debug!("filter `{category}`: {} visible", outcome.visible_count);
                cards.render(&outcome);
            });
        }
        for card in &cards.borrow().elements {
            let finished = card.clone();
            listeners.on(card, "animationend", move |_| dom::set_class(&finished, SHOWING_CLASS, false));
        }

        {
            let mut cards = cards.borrow_mut();
            let outcome = filter.borrow().outcome(cards.categories());
            cards.render(&outcome);
        }

        Some(Self { listeners, cards })
    }
}

impl Component for FilterPanel {
    fn name(&self) -> &'static str {
        "card-filter"
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        for timer in &mut self.cards.borrow_mut().hide_timers {
            timer.cancel();
        }
    }
}
