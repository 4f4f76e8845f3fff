//! Shared types for the hotel order workflow
//!
//! Domain types used by the order server and any client of its API:
//! menu reference data, orders and their workflow state, commands, events,
//! notifications and the unified error codes.

pub mod error;
pub mod models;
pub mod notification;
pub mod order;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, ErrorCode};
pub use models::{ChefType, MenuCategory, MenuItem, Role};
pub use notification::{Notification, NotificationType};
