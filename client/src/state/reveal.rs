//! One-shot visibility tracking.
//!
//! Elements register once and start `Pending`. The first visible
//! notification moves them to `Revealed` and reports that the terminal
//! transition should run; every later notification is a no-op. The browser
//! side also unobserves on fire, but correctness does not depend on it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new element. Returns its key.
    pub fn register(&mut self) -> usize {
        self.states.push(RevealState::Pending);
        self.states.len() - 1
    }

    /// Feed a visibility notification. Returns `true` exactly once per key:
    /// on the first notification where the element is visible.
    pub fn notify(&mut self, key: usize, visible: bool) -> bool {
        match self.states.get_mut(key) {
            Some(state @ RevealState::Pending) if visible => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, key: usize) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Pending)
            .count()
    }
}
