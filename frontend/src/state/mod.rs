//! Upload state, independent of the DOM.
//!
//! # Modules
//!
//! - [`selection`] - Section kinds and extension filtering
//! - [`section`] - Per-section state machine and what the page shows for it
//! - [`controller`] - Both sections plus the backend, driving the uploads

pub mod controller;
pub mod section;
pub mod selection;

pub use controller::*;
pub use section::*;
pub use selection::*;

use leptos::{RwSignal, SignalUpdate};
use std::cell::RefCell;

/// Somewhere a [`Section`] lives and can be mutated from event handlers.
///
/// Returns `None` when the section is gone (a disposed signal).
pub trait SectionStore<F> {
    fn update_section<R>(&self, f: impl FnOnce(&mut Section<F>) -> R) -> Option<R>;
}

impl<F> SectionStore<F> for RefCell<Section<F>> {
    fn update_section<R>(&self, f: impl FnOnce(&mut Section<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<F: 'static> SectionStore<F> for RwSignal<Section<F>> {
    fn update_section<R>(&self, f: impl FnOnce(&mut Section<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}
