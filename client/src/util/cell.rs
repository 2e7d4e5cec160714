//! Borrow discipline for state shared between DOM listeners.
//!
//! Some DOM calls dispatch events synchronously: `focus()` fires `blur` on
//! the previously focused control, and hiding a focused element can do the
//! same. When the listener for that event borrows the same `RefCell` as the
//! caller, a borrow still held across the DOM call aborts the wasm instance.
//! Handlers therefore decide under a short borrow and release it before any
//! DOM side effect runs.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::cell::RefCell;

/// Run `update` under a mutable borrow, release the borrow, then run
/// `effects` with what `update` decided. `effects` may borrow `cell` again.
pub fn update_then<T, D, R>(cell: &RefCell<T>, update: impl FnOnce(&mut T) -> D, effects: impl FnOnce(D) -> R) -> R {
    let decided = update(&mut *cell.borrow_mut());
    effects(decided)
}

/// Mutably borrow `cell` unless a handler further up the stack holds it.
/// Returns `None` (and skips `update`) in that case.
pub fn try_update<T, R>(cell: &RefCell<T>, update: impl FnOnce(&mut T) -> R) -> Option<R> {
    match cell.try_borrow_mut() {
        Ok(mut value) => Some(update(&mut value)),
        Err(_) => {
            log::debug!("skipping re-entrant update");
            None
        }
    }
}
