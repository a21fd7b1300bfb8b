//! Session layer - unidirectional state management over the catalog
//! engines.
//!
//! A rendering host embeds a [`Session`], registers observers and notice
//! sinks, and drives transitions from its input events. The session owns
//! the [`kesselbuch_core::FilterState`], recomputes the full
//! [`SessionSnapshot`] on every change, and persists the sticky
//! preferences (language, layout, sort) through the store trait.

mod session;
mod snapshot;

pub use session::{ObserverCallback, Session, SessionError, ToggleOutcome};
pub use snapshot::{FilterStats, SessionSnapshot};
