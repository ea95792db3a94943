//! Shared types for the parts inventory
//!
//! Domain models used by the label system and its front ends:
//! named/timestamped base elements, parts and their lots, structural
//! elements (categories, storage locations, suppliers...), order details
//! and label options.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ValidationError, ValidationResult};
pub use serde::{Deserialize, Serialize};
