//! Bootstrap sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm module is loaded by every page as a module script. `start` runs
//! on instantiation and drives the whole page lifecycle.
//!
//! DESIGN
//! ======
//! 1. Install the panic hook and console logger.
//! 2. Read the inline page config and apply the saved theme immediately.
//! 3. Once the DOM is parsed, load shared fragments concurrently.
//! 4. After every fragment has settled (loaded or failed), highlight the
//!    active nav link and mount the components. Components that depend on
//!    fragment markup find their roots only at this point.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. A missing root disables its component; a failed
//! fragment leaves its placeholder empty and is logged.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::Component;
use crate::components::card_filter::FilterPanel;
use crate::components::contact_form::ContactForm;
use crate::components::lightbox::LightboxGallery;
use crate::components::nav::{NavMenu, highlight_active};
use crate::components::reveal::RevealAnimator;
use crate::components::scroll::ScrollEffects;
use crate::components::theme_toggle::{ThemeToggle, apply_saved_theme};
use crate::components::toast::ToastHandle;
use crate::config::SiteConfig;
use crate::net::fragment::{DocumentTarget, HttpSource, load_all};
use crate::util::dom;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Every component mounted on the current page.
struct Site {
    components: Vec<Box<dyn Component>>,
}

impl Site {
    fn mount(document: &Document, config: &SiteConfig) -> Self {
        let mut components: Vec<Box<dyn Component>> = Vec::new();
        let toast = ToastHandle::mount(document);

        push(&mut components, ThemeToggle::mount(document, config));
        push(&mut components, NavMenu::mount(document));
        push(&mut components, ScrollEffects::mount(document, config));
        push(&mut components, RevealAnimator::mount(document, config));
        push(&mut components, FilterPanel::mount(document, config));
        push(&mut components, LightboxGallery::mount(document));
        push(&mut components, ContactForm::mount(document, config, toast.clone()));
        push(&mut components, toast);

        let names: Vec<&str> = components.iter().map(|c| c.name()).collect();
        log::info!("mounted {} components: {}", names.len(), names.join(", "));
        Self { components }
    }

    fn teardown(&mut self) {
        for component in &mut self.components {
            component.teardown();
        }
        self.components.clear();
    }
}

fn push<C: Component + 'static>(components: &mut Vec<Box<dyn Component>>, component: Option<C>) {
    if let Some(component) = component {
        components.push(Box::new(component));
    }
}

async fn boot(document: Document, config: SiteConfig) {
    let target = DocumentTarget::new(document.clone());
    let statuses = load_all(&HttpSource, &target, &config.fragments).await;
    let failed = statuses.iter().filter(|status| !status.is_loaded()).count();
    if failed > 0 {
        log::warn!("{failed} of {} fragments failed to load", statuses.len());
    }

    let active = highlight_active(&document, &config.default_page);
    log::debug!("{active} nav links marked active");

    let site = Site::mount(&document, &config);
    SITE.with(|slot| {
        if let Some(mut previous) = slot.borrow_mut().replace(site) {
            previous.teardown();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }

    let Some(document) = dom::document() else {
        return;
    };
    let config = SiteConfig::load(&document);
    log::set_max_level(config.log_level().to_level_filter());

    if let Some(theme) = apply_saved_theme(&document, &config) {
        log::debug!("applied saved theme {theme}");
    }

    let ready_document = document.clone();
    dom::on_ready(&document, move || {
        wasm_bindgen_futures::spawn_local(boot(ready_document, config));
    });
}

/// Detach every mounted component. Exposed for hosts that swap page content.
#[wasm_bindgen]
pub fn teardown() {
    SITE.with(|slot| {
        if let Some(mut site) = slot.borrow_mut().take() {
            site.teardown();
        }
    });
}
