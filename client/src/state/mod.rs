//! Pure client-side state models.
//!
//! DESIGN
//! ======
//! Every component keeps its decisions here and its DOM writes in
//! `components`. Nothing in this module touches `web-sys`, so the
//! transitions (theme toggling, one-shot reveal, counter interpolation,
//! menu convergence, filtering, validation) are tested natively.

pub mod counter;
pub mod filter;
pub mod form;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
