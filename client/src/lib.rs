//! # client
//!
//! Rust + WASM interactivity layer for the Coimbatore Explore static site.
//! Replaces the hand-written page scripts with typed components that attach
//! to server-rendered markup: theme persistence, navigation, scroll effects,
//! reveal/counter animation, card filtering, lightbox, toasts, and the
//! contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure state machines; no DOM access, tested natively |
//! | [`config`] | Page-level configuration with defaults |
//! | [`net`] | Fragment loading behind a source/target seam |
//! | [`util`] | Storage, timers, number formatting, DOM helpers |
//! | `components` | DOM-bound component objects (`browser` feature) |
//! | `app` | Bootstrap sequence (`browser` feature) |

pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod components;
