//! Seams of the command pipeline
//!
//! - [`CommandHandler`]: a command turned into events against a [`CommandContext`]
//! - [`EventApplier`]: an event folded into an [`OrderSnapshot`]
//! - [`OrderError`]: why an action refused to produce events

use std::collections::HashMap;

use async_trait::async_trait;
use enum_dispatch::enum_dispatch;
use shared::ChefType;
use shared::Role;
use shared::order::{OrderCommand, OrderEvent, OrderSnapshot, WorkflowStatus};
use thiserror::Error;

use crate::catalog::MenuCatalog;
use crate::orders::appliers::*;
use crate::orders::money::ChargeRates;
use crate::orders::storage::OrderStore;

/// Errors raised by actions
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Cannot {action} order {order_id} in status {from}")]
    InvalidTransition {
        order_id: String,
        from: WorkflowStatus,
        action: &'static str,
    },

    #[error("Order belongs to the {expected} station, not {actual}")]
    ChefTypeMismatch { expected: ChefType, actual: ChefType },

    #[error("Order is assigned to {assigned}, not {actual}")]
    ChefNotAssigned { assigned: String, actual: String },

    #[error("Role {role} may not {action} orders")]
    PermissionDenied { role: Role, action: &'static str },

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Menu item unavailable: {0}")]
    MenuItemUnavailable(String),

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Who issued a command and when
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub operator_id: String,
    pub operator_name: String,
    pub operator_role: Role,
    /// Client timestamp
    pub timestamp: i64,
}

impl From<&OrderCommand> for CommandMetadata {
    fn from(cmd: &OrderCommand) -> Self {
        Self {
            command_id: cmd.command_id.clone(),
            operator_id: cmd.operator_id.clone(),
            operator_name: cmd.operator_name.clone(),
            operator_role: cmd.operator_role,
            timestamp: cmd.timestamp,
        }
    }
}

/// Read view of the store plus the state a command has produced so far
///
/// Nothing is written back to the store until the manager commits
/// [`CommandContext::into_parts`].
pub struct CommandContext<'a> {
    store: &'a OrderStore,
    catalog: &'a MenuCatalog,
    rates: ChargeRates,
    sequence: u64,
    order_count: u64,
    modified: HashMap<String, OrderSnapshot>,
}

impl<'a> CommandContext<'a> {
    pub fn new(store: &'a OrderStore, catalog: &'a MenuCatalog, rates: ChargeRates) -> Self {
        Self {
            store,
            catalog,
            rates,
            sequence: store.get_current_sequence(),
            order_count: store.get_order_count(),
            modified: HashMap::new(),
        }
    }

    /// Current snapshot of an order, including changes made by this command
    pub fn load_snapshot(&self, order_id: &str) -> Result<OrderSnapshot, OrderError> {
        self.modified
            .get(order_id)
            .or_else(|| self.store.get_snapshot(order_id))
            .cloned()
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    /// Whether the order exists, in the store or in this command
    pub fn order_exists(&self, order_id: &str) -> bool {
        self.modified.contains_key(order_id) || self.store.get_snapshot(order_id).is_some()
    }

    pub fn save_snapshot(&mut self, snapshot: OrderSnapshot) {
        self.modified.insert(snapshot.order_id.clone(), snapshot);
    }

    pub fn modified_snapshots(&self) -> impl Iterator<Item = &OrderSnapshot> {
        self.modified.values()
    }

    /// Allocate the next global event sequence
    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Allocate the next human readable order number (ORD-001, ORD-002, ...)
    pub fn next_order_number(&mut self) -> String {
        self.order_count += 1;
        format!("ORD-{:03}", self.order_count)
    }

    pub fn catalog(&self) -> &MenuCatalog {
        self.catalog
    }

    pub fn rates(&self) -> &ChargeRates {
        &self.rates
    }

    /// Sequence, order count and snapshots to commit
    pub fn into_parts(self) -> (u64, u64, Vec<OrderSnapshot>) {
        (
            self.sequence,
            self.order_count,
            self.modified.into_values().collect(),
        )
    }
}

/// Turns a command into events
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError>;
}

/// Applies one event to a snapshot. Must be pure.
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_allocates_from_store_counters() {
        let mut store = OrderStore::new();
        store.set_sequence(41);
        store.set_order_count(2);
        let catalog = MenuCatalog::default();

        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());
        assert_eq!(ctx.next_sequence(), 42);
        assert_eq!(ctx.next_sequence(), 43);
        assert_eq!(ctx.next_order_number(), "ORD-003");

        let (sequence, order_count, snapshots) = ctx.into_parts();
        assert_eq!(sequence, 43);
        assert_eq!(order_count, 3);
        assert!(snapshots.is_empty());
    }

    #[test]
    fn test_modified_snapshot_shadows_store() {
        let mut store = OrderStore::new();
        store.store_snapshot(OrderSnapshot::new("order-1".to_string()));
        let catalog = MenuCatalog::default();
        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());

        let mut snapshot = ctx.load_snapshot("order-1").unwrap();
        snapshot.order_number = "ORD-009".to_string();
        ctx.save_snapshot(snapshot);

        assert_eq!(ctx.load_snapshot("order-1").unwrap().order_number, "ORD-009");
        assert_eq!(store.get_snapshot("order-1").unwrap().order_number, "");
        assert!(matches!(
            ctx.load_snapshot("order-2"),
            Err(OrderError::OrderNotFound(_))
        ));
    }

    #[test]
    fn test_event_action_dispatches_to_applier() {
        use crate::orders::appliers::test_events::event;
        use crate::orders::fixtures::{approval, order_in, preparation};
        use shared::order::{EventPayload, OrderEventType, OrderState};

        let mut snapshot = order_in(OrderState::ChefPreparing {
            approval: approval(ChefType::Food),
            preparation: preparation("Chef Maria"),
        });
        let completed = event(
            8,
            OrderEventType::PreparationCompleted,
            EventPayload::PreparationCompleted {
                chef: "Chef Maria".to_string(),
            },
        );

        EventAction::from(&completed).apply(&mut snapshot, &completed);
        assert_eq!(snapshot.workflow_status(), WorkflowStatus::ChefCompleted);
        assert_eq!(snapshot.last_sequence, 8);
    }
}
