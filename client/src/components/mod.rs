//! DOM-bound components.
//!
//! ARCHITECTURE
//! ============
//! Each component is an object constructed from the DOM roots it needs.
//! `mount` returns `None` when a required root is missing, which silently
//! disables that feature. Decisions are delegated to `crate::state`; this
//! layer only reads the DOM, feeds the state machines, and writes results
//! back. `teardown` detaches listeners and cancels pending timers.

pub mod card_filter;
pub mod contact_form;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme_toggle;
pub mod toast;

/// Lifecycle shared by mounted components.
pub trait Component {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Detach listeners and cancel pending timers.
    fn teardown(&mut self);
}
