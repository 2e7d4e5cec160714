//! Network-facing client modules.
//!
//! The only network traffic is fetching static HTML fragments from the same
//! origin that served the page.

pub mod fragment;
