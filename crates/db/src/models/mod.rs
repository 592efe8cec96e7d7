//! Entity models and DTOs.

pub mod bookmark;
