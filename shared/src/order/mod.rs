//! Order workflow module
//!
//! This module provides types for the order workflow:
//! - Commands: Requests from staff to move an order through the workflow
//! - Events: Immutable facts recorded after command processing
//! - State: The workflow position of an order as a single sum type
//! - Snapshots: Current order state computed from its events

pub mod command;
pub mod event;
pub mod snapshot;
pub mod state;
pub mod types;

// Re-exports
pub use command::{OrderCommand, OrderCommandPayload};
pub use event::{EventPayload, OrderEvent, OrderEventType};
pub use snapshot::OrderSnapshot;
pub use state::{Approval, OrderState, Preparation, WorkflowStatus};
pub use types::*;
