//! Domain types shared across the bookmarks workspace.
//!
//! No I/O here: error taxonomy, id/timestamp aliases, pagination
//! primitives, and payload validation.

pub mod error;
pub mod page;
pub mod types;
pub mod validation;
