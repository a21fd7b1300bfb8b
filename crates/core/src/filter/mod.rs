//! Filter engine - predicate composition over the catalog.
//!
//! `apply` is a pure function of the catalog and the current
//! [`FilterState`]: it is recomputed in full on every state change and
//! never patched incrementally. Order of the result follows the catalog;
//! ordering by a sort key is the sort module's concern.

mod engine;
mod state;

pub use engine::apply;
pub use state::{CategorySelection, FilterState, Layout};
