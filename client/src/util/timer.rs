//! Cancellable timer ownership.
//!
//! Each kind of delayed action (theme flash, toast dismissal, simulated
//! submit, card hide) is owned by one [`TimerSlot`]. Scheduling into a slot
//! drops the previous handle, and dropping a `gloo_timers` timeout cancels
//! it, so overlapping triggers cancel-and-restart rather than queue.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Holds at most one pending timer handle. Dropping the handle cancels it.
#[derive(Debug)]
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TimerSlot<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle`, cancelling whatever was scheduled before.
    pub fn replace(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    /// Cancel the scheduled timer, if any. Returns whether one was held.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

/// Browser timer slot backed by `setTimeout`.
#[cfg(feature = "browser")]
pub type Timer = TimerSlot<gloo_timers::callback::Timeout>;

#[cfg(feature = "browser")]
impl TimerSlot<gloo_timers::callback::Timeout> {
    /// Run `callback` after `millis`, cancelling the previous timer in this slot.
    pub fn schedule(&mut self, millis: u32, callback: impl FnOnce() + 'static) {
        self.replace(gloo_timers::callback::Timeout::new(millis, callback));
    }
}
