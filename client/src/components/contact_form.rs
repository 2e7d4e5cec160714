//! Contact form: inline validation and simulated submission.
//!
//! There is no submission transport. An accepted submit disables the button
//! for `submit_delay_ms`, then swaps the fields panel for the success panel
//! and raises a toast. The success panel is hidden again after `toast_ms`;
//! the fields stay hidden. A real backend would replace the delay with a
//! request.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::Component;
use crate::components::toast::ToastHandle;
use crate::config::SiteConfig;
use crate::state::form::{FieldRule, FormState, SubmitDecision, ValidationError, validate};
use crate::util::cell::{try_update, update_then};
use crate::util::dom::{self, ListenerSet};
use crate::util::timer::Timer;

const FORM_ID: &str = "contactForm";
const FIELD_SELECTOR: &str = "input, textarea";
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
const FIELDS_PANEL_SELECTOR: &str = ".form-fields";
const SUCCESS_SELECTOR: &str = ".form-success";
const ERROR_SELECTOR: &str = ".error-message";
const ERROR_CLASS: &str = "error-message";
const SUCCESS_CLASS: &str = "form-success";
const INVALID_CLASS: &str = "invalid";
const SENDING_LABEL: &str = "Sending...";
const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn from_element(element: &Element) -> Option<Self> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(Self::Input(input.clone()));
        }
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| Self::TextArea(area.clone()))
    }

    fn element(&self) -> &Element {
        match self {
            Self::Input(input) => input,
            Self::TextArea(area) => area,
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Input(input) => input.name(),
            Self::TextArea(area) => area.name(),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    fn required(&self) -> bool {
        match self {
            Self::Input(input) => input.required(),
            Self::TextArea(area) => area.required(),
        }
    }

    fn focus(&self) {
        let focused = match self {
            Self::Input(input) => input.focus(),
            Self::TextArea(area) => area.focus(),
        };
        dom::report(focused, "focus");
    }
}

#[derive(Clone)]
struct Field {
    control: Control,
    name: String,
    rule: FieldRule,
}

impl Field {
    fn validate(&self) -> Result<(), ValidationError> {
        validate(self.rule, &self.control.value())
    }

    fn show(&self, result: &Result<(), ValidationError>) {
        let element = self.control.element();
        dom::set_class(element, INVALID_CLASS, result.is_err());
        match result {
            Err(err) => {
                if let Some(slot) = error_slot(element, true) {
                    slot.set_text_content(Some(&err.to_string()));
                }
            }
            Ok(()) => {
                if let Some(slot) = error_slot(element, false) {
                    slot.set_text_content(None);
                }
            }
        }
    }
}

/// The `.error-message` next to `field`, created on demand when `create`.
fn error_slot(field: &Element, create: bool) -> Option<Element> {
    let parent = field.parent_element()?;
    if let Some(slot) = dom::query_one(&parent, ERROR_SELECTOR) {
        return Some(slot);
    }
    if !create {
        return None;
    }
    let slot = dom::report(field.owner_document()?.create_element("span"), "error slot")?;
    slot.set_class_name(ERROR_CLASS);
    dom::set_attr(&slot, "role", "alert");
    dom::report(parent.append_child(&slot), "error slot")?;
    Some(slot)
}

struct FormShared {
    form: HtmlFormElement,
    fields: Vec<Field>,
    state: FormState,
    submit_timer: Timer,
    success_timer: Timer,
}

impl FormShared {
    fn check(&mut self, index: usize) {
        let Some(field) = self.fields.get(index) else {
            return;
        };
        let result = field.validate();
        self.state.record(&field.name, &result);
        field.show(&result);
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    dom::query_one(form, SUBMIT_SELECTOR).and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned())
}

fn show_success(form: &HtmlFormElement) {
    if let Some(panel) = dom::query_one(form, FIELDS_PANEL_SELECTOR) {
        dom::set_displayed(&panel, false, "");
    }
    let success = dom::query_one(form, SUCCESS_SELECTOR).or_else(|| {
        let panel = dom::report(form.owner_document()?.create_element("div"), "success panel")?;
        panel.set_class_name(SUCCESS_CLASS);
        panel.set_text_content(Some(SUCCESS_MESSAGE));
        dom::report(form.append_child(&panel), "success panel")?;
        Some(panel)
    });
    if let Some(success) = success {
        dom::set_attr(&success, "role", "status");
        dom::set_displayed(&success, true, "block");
    }
}

/// Validation results for the required fields, and what the state machine
/// made of them.
struct SubmitPlan {
    decision: SubmitDecision,
    checked: Vec<(Field, Result<(), ValidationError>)>,
}

fn plan_submit(form: &mut FormShared) -> SubmitPlan {
    let checked: Vec<(Field, Result<(), ValidationError>)> = form
        .fields
        .iter()
        .filter(|field| field.control.required())
        .map(|field| (field.clone(), field.validate()))
        .collect();
    let results: Vec<(String, Result<(), ValidationError>)> = checked
        .iter()
        .map(|(field, result)| (field.name.clone(), result.clone()))
        .collect();
    SubmitPlan { decision: form.state.submit(&results), checked }
}

// `focus()` blurs the field being edited and its blur listener borrows
// `shared`, so DOM effects run only after `plan_submit` has released it.
fn handle_submit(shared: &Rc<RefCell<FormShared>>, toast: Option<&ToastHandle>, config: &SiteConfig) {
    update_then(shared, plan_submit, |plan| {
        for (field, result) in &plan.checked {
            field.show(result);
        }
        match plan.decision {
            SubmitDecision::Ignored => {}
            SubmitDecision::Rejected { first_invalid } => {
                if let Some((field, _)) = plan.checked.get(first_invalid) {
                    log::debug!("contact form rejected at `{}`", field.name);
                    field.control.focus();
                }
            }
            SubmitDecision::Accepted => start_sending(shared, toast, config),
        }
    });
}

fn start_sending(shared: &Rc<RefCell<FormShared>>, toast: Option<&ToastHandle>, config: &SiteConfig) {
    let form = shared.borrow().form.clone();
    let button = submit_button(&form);
    let original_label = button.as_ref().and_then(|b| b.text_content());
    if let Some(button) = &button {
        button.set_text_content(Some(SENDING_LABEL));
        button.set_disabled(true);
    }

    let weak = Rc::downgrade(shared);
    let toast = toast.cloned();
    let dismiss_ms = config.toast_ms;
    shared.borrow_mut().submit_timer.schedule(config.submit_delay_ms, move || {
        if let Some(button) = &button {
            button.set_text_content(original_label.as_deref());
            button.set_disabled(false);
        }
        if let Some(shared) = weak.upgrade() {
            finish_sending(&shared, toast.as_ref(), dismiss_ms);
        }
    });
}

fn finish_sending(shared: &Rc<RefCell<FormShared>>, toast: Option<&ToastHandle>, dismiss_ms: u32) {
    let finished = update_then(shared, |form| form.state.finish().then(|| form.form.clone()), |form| form);
    let Some(form) = finished else {
        return;
    };
    form.reset();
    show_success(&form);
    if let Some(toast) = toast {
        toast.show(SUCCESS_MESSAGE, dismiss_ms);
    }
    log::info!("contact form submitted");

    let weak = Rc::downgrade(shared);
    shared.borrow_mut().success_timer.schedule(dismiss_ms, move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let dismissed = update_then(&shared, |form| form.state.dismiss().then(|| form.form.clone()), |form| form);
        if let Some(success) = dismissed.and_then(|form| dom::query_one(&form, SUCCESS_SELECTOR)) {
            dom::set_displayed(&success, false, "");
        }
    });
}

pub struct ContactForm {
    listeners: ListenerSet,
    shared: Rc<RefCell<FormShared>>,
}

impl ContactForm {
    pub fn mount(document: &Document, config: &SiteConfig, toast: Option<ToastHandle>) -> Option<Self> {
        let form = document
            .get_element_by_id(FORM_ID)
            .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned())?;
        let fields: Vec<Field> = dom::query_within(&form, FIELD_SELECTOR)
            .iter()
            .filter_map(Control::from_element)
            .map(|control| {
                let name = control.name();
                let rule = FieldRule::for_field(&name, control.required(), config.min_message_len);
                Field { control, name, rule }
            })
            .collect();
        let shared = Rc::new(RefCell::new(FormShared {
            form: form.clone(),
            fields: fields.clone(),
            state: FormState::default(),
            submit_timer: Timer::new(),
            success_timer: Timer::new(),
        }));

        let mut listeners = ListenerSet::default();
        for (index, field) in fields.iter().enumerate() {
            {
                let shared = Rc::clone(&shared);
                listeners.on(field.control.element(), "blur", move |_| {
                    try_update(&shared, |form| form.check(index));
                });
            }
            let shared = Rc::clone(&shared);
            let name = field.name.clone();
            listeners.on(field.control.element(), "input", move |_| {
                try_update(&shared, |form| {
                    if form.state.has_error(&name) {
                        form.check(index);
                    }
                });
            });
        }
        {
            let shared = Rc::clone(&shared);
            let config = config.clone();
            listeners.on(&form, "submit", move |event| {
                event.prevent_default();
                handle_submit(&shared, toast.as_ref(), &config);
            });
        }

        Some(Self { listeners, shared })
    }
}

impl Component for ContactForm {
    fn name(&self) -> &'static str {
        "contact-form"
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        let mut shared = self.shared.borrow_mut();
        shared.submit_timer.cancel();
        shared.success_timer.cancel();
    }
}
