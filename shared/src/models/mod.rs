//! Data models
//!
//! Shared between the label system and its front ends.
//! All IDs are `Option<i64>` (`None` until persisted), timestamps are unix millis.

pub mod base;
pub mod inventory;
pub mod label_options;
pub mod orderdetail;
pub mod part;
pub mod structural;
pub mod user;

// Re-exports
pub use base::*;
pub use inventory::*;
pub use label_options::*;
pub use orderdetail::*;
pub use part::*;
pub use structural::*;
pub use user::*;
