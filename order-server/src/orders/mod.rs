//! Order workflow module
//!
//! Orders move between roles through commands:
//!
//! - **actions**: one `CommandHandler` per command, producing events
//! - **appliers**: one `EventApplier` per event, folding it into a snapshot
//! - **manager**: the single `OrdersManager` serializing every command
//! - **storage**: in-memory event log and snapshot map
//! - **queues**: per-role views over the snapshots
//! - **heartbeat**: periodic queue depth and prep-overdue logging
//!
//! # Architecture
//!
//! ```text
//! Command → OrdersManager → Event → OrderStore
//!                 ↓            ↓
//!           Notifications  Broadcast
//! ```

pub mod actions;
pub mod appliers;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod heartbeat;
pub mod manager;
pub mod money;
pub mod permissions;
pub mod queues;
pub mod storage;
pub mod traits;

// Re-exports
pub use heartbeat::{Heartbeat, HeartbeatReport};
pub use manager::{ManagerError, ManagerResult, OrdersManager};
pub use money::ChargeRates;
pub use queues::{KitchenStats, WaiterStats};
pub use storage::{OrderStore, StorageStats};

// Re-export shared types for convenience
pub use shared::order::{
    CommandError, CommandErrorCode, CommandResponse, EventPayload, OrderCommand,
    OrderCommandPayload, OrderEvent, OrderEventType, OrderSnapshot, OrderState, WorkflowStatus,
};
