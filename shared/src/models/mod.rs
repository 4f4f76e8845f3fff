//! Data models
//!
//! Reference data and roles shared between the order server and its clients.

pub mod chef;
pub mod menu;
pub mod role;

// Re-exports
pub use chef::*;
pub use menu::*;
pub use role::*;
