//! Pouch - Local Cache for Piped Command Output
//!
//! Stores arbitrary byte payloads under random ids with a JSON metadata
//! index, and retrieves them later by id.

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod store;

pub use error::{PouchError, PouchResult};
