//! Shared utilities for confmate
//!
//! This crate provides:
//! - ID types (SessionId, ParticipantId)
//! - Time utilities (wall-clock with mock support, session time parsing,
//!   countdown labels)
//! - Error types
//! - Default data paths

mod error;
mod ids;
mod paths;
mod time;

pub use error::*;
pub use ids::*;
pub use paths::*;
pub use time::*;
