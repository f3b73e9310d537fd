//! Core managers for confmate
//!
//! The registration manager owns the single on-device user profile; the
//! schedule manager owns the personal schedule list. Both operate over
//! an injected [`Store`](confmate_store::Store) and hold no state of
//! their own: every operation is its own storage round-trip, so screens
//! that reload on activation always observe the latest persisted state.

mod registration;
mod schedule;

pub use registration::*;
pub use schedule::*;
