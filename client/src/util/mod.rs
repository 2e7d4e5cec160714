//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the state machines stay testable without a rendering surface.

pub mod cell;
#[cfg(feature = "browser")]
pub mod dom;
pub mod format;
pub mod storage;
pub mod timer;
