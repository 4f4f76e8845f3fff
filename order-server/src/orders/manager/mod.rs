//! OrdersManager - Core command processing and event generation
//!
//! This module handles:
//! - Command validation and processing
//! - Event generation with global sequence numbers
//! - Snapshot updates and workflow graph enforcement
//! - Notifications for the next role in line
//! - Event broadcasting
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Lock the store
//!     ├─ 2. Idempotency check (command_id)
//!     ├─ 3. Role permission check
//!     ├─ 4. Convert command to action and execute
//!     ├─ 5. Apply events to snapshots via EventApplier
//!     ├─ 6. Check every status change against the workflow graph
//!     ├─ 7. Commit events, snapshots, counters, command id
//!     ├─ 8. Post notifications
//!     ├─ 9. Unlock, broadcast event(s)
//!     └─ 10. Return response
//! ```

mod error;
pub use error::*;

use super::actions::CommandAction;
use super::appliers::EventAction;
use super::money::ChargeRates;
use super::permissions::check_permission;
use super::storage::{OrderStore, StorageStats};
use super::traits::{CommandContext, CommandHandler, CommandMetadata, EventApplier};
use crate::catalog::MenuCatalog;
use crate::notifications::NotificationFeed;
use parking_lot::Mutex;
use shared::order::{
    CommandResponse, OrderCommand, OrderEvent, OrderEventType, OrderSnapshot, WorkflowStatus,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// OrdersManager for command processing
///
/// The `epoch` field is a unique identifier generated on each startup.
/// Clients use it to detect server restarts and trigger full resync.
pub struct OrdersManager {
    store: Mutex<OrderStore>,
    catalog: Arc<MenuCatalog>,
    rates: ChargeRates,
    notifications: Arc<NotificationFeed>,
    event_tx: broadcast::Sender<OrderEvent>,
    /// Server instance epoch - unique ID generated on startup
    epoch: String,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("epoch", &self.epoch)
            .field("rates", &self.rates)
            .field("event_tx", &"<broadcast::Sender>")
            .finish_non_exhaustive()
    }
}

impl OrdersManager {
    pub fn new(
        catalog: Arc<MenuCatalog>,
        rates: ChargeRates,
        notifications: Arc<NotificationFeed>,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = shared::util::new_id();
        tracing::info!(epoch = %epoch, menu_items = catalog.len(), "OrdersManager started");
        Self {
            store: Mutex::new(OrderStore::new()),
            catalog,
            rates,
            notifications,
            event_tx,
            epoch,
        }
    }

    /// Server instance epoch
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn notifications(&self) -> &Arc<NotificationFeed> {
        &self.notifications
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.event_tx.subscribe()
    }

    /// Execute a command and return the response
    pub fn execute_command(&self, cmd: OrderCommand) -> CommandResponse {
        self.execute_command_with_events(cmd).0
    }

    /// Execute a command and return both the response and generated events
    pub fn execute_command_with_events(
        &self,
        cmd: OrderCommand,
    ) -> (CommandResponse, Vec<OrderEvent>) {
        let command_id = cmd.command_id.clone();
        match self.process_command(cmd) {
            Ok((response, events)) => {
                // Broadcast events after successful commit
                for event in &events {
                    if self.event_tx.send(event.clone()).is_err() {
                        tracing::debug!("Event broadcast skipped: no active receivers");
                        break;
                    }
                }
                (response, events)
            }
            Err(err) => {
                tracing::warn!(command_id = %command_id, error = %err, "Command rejected");
                (CommandResponse::error(command_id, err.into()), vec![])
            }
        }
    }

    /// Process command and return response with events
    fn process_command(
        &self,
        cmd: OrderCommand,
    ) -> ManagerResult<(CommandResponse, Vec<OrderEvent>)> {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        // 1. Single writer
        let mut store = self.store.lock();

        // 2. Idempotency check
        if store.is_command_processed(&cmd.command_id) {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return Ok((CommandResponse::duplicate(cmd.command_id), vec![]));
        }

        // 3. Role check
        check_permission(cmd.operator_role, &cmd.payload)?;

        // 4. Execute action
        let metadata = CommandMetadata::from(&cmd);
        let action = CommandAction::from(&cmd);
        let mut ctx = CommandContext::new(&store, &self.catalog, self.rates);
        let events = futures::executor::block_on(action.execute(&mut ctx, &metadata))?;

        // 5-6. Apply events and enforce the graph
        for event in &events {
            let previous = match ctx.load_snapshot(&event.order_id) {
                Ok(_) if event.event_type == OrderEventType::OrderPlaced => {
                    return Err(ManagerError::DuplicateOrder(event.order_id.clone()));
                }
                Ok(snapshot) => Some(snapshot),
                Err(_) => None,
            };
            let before = previous.as_ref().map(OrderSnapshot::workflow_status);
            let mut snapshot =
                previous.unwrap_or_else(|| OrderSnapshot::new(event.order_id.clone()));

            let applier: EventAction = event.into();
            applier.apply(&mut snapshot, event);
            check_transition(before, &snapshot, event)?;

            ctx.save_snapshot(snapshot);
        }

        // 7. Commit
        let (sequence, order_count, snapshots) = ctx.into_parts();
        let committed: HashMap<String, OrderSnapshot> = snapshots
            .into_iter()
            .map(|s| (s.order_id.clone(), s))
            .collect();
        for event in &events {
            store.store_event(event.clone());
        }
        for snapshot in committed.values() {
            store.store_snapshot(snapshot.clone());
        }
        store.set_sequence(sequence);
        store.set_order_count(order_count);
        store.mark_command_processed(&cmd.command_id);

        // 8. Notifications, in commit order
        for event in &events {
            if let Some(snapshot) = committed.get(&event.order_id) {
                self.notifications.record(event, snapshot);
            }
        }
        drop(store);

        let order_id = events.first().map(|e| e.order_id.clone());
        tracing::info!(
            command_id = %cmd.command_id,
            action = cmd.payload.action_name(),
            operator = %cmd.operator_name,
            order_id = ?order_id,
            event_count = events.len(),
            "Command processed successfully"
        );
        Ok((CommandResponse::success(cmd.command_id, order_id), events))
    }

    // ========== Public Query Methods ==========

    /// Get a snapshot by order ID
    pub fn get_order(&self, order_id: &str) -> Option<OrderSnapshot> {
        self.store.lock().get_snapshot(order_id).cloned()
    }

    /// Snapshots matching `predicate`, oldest order first
    pub fn filter_orders<F>(&self, predicate: F) -> Vec<OrderSnapshot>
    where
        F: Fn(&OrderSnapshot) -> bool,
    {
        let mut orders: Vec<OrderSnapshot> = self
            .store
            .lock()
            .snapshots()
            .filter(|s| predicate(s))
            .cloned()
            .collect();
        orders.sort_by(|a, b| {
            a.order_time
                .cmp(&b.order_time)
                .then_with(|| a.order_number.cmp(&b.order_number))
        });
        orders
    }

    /// All orders, oldest first
    pub fn list_orders(&self) -> Vec<OrderSnapshot> {
        self.filter_orders(|_| true)
    }

    pub fn orders_by_status(&self, status: WorkflowStatus) -> Vec<OrderSnapshot> {
        self.filter_orders(|s| s.workflow_status() == status)
    }

    /// Get current sequence number
    pub fn get_current_sequence(&self) -> u64 {
        self.store.lock().get_current_sequence()
    }

    /// Get events since a given sequence
    pub fn get_events_since(&self, since_sequence: u64) -> Vec<OrderEvent> {
        self.store.lock().get_events_since(since_sequence)
    }

    /// Get all events for a specific order
    pub fn get_events_for_order(&self, order_id: &str) -> ManagerResult<Vec<OrderEvent>> {
        let events = self.store.lock().get_events_for_order(order_id);
        if events.is_empty() {
            return Err(ManagerError::OrderNotFound(order_id.to_string()));
        }
        Ok(events)
    }

    /// Rebuild a snapshot from events (for verification)
    ///
    /// Uses EventApplier to apply each event to build the snapshot.
    pub fn rebuild_snapshot(&self, order_id: &str) -> ManagerResult<OrderSnapshot> {
        let events = self.get_events_for_order(order_id)?;

        let mut snapshot = OrderSnapshot::new(order_id.to_string());
        for event in &events {
            let applier: EventAction = event.into();
            applier.apply(&mut snapshot, event);
        }

        Ok(snapshot)
    }

    pub fn storage_stats(&self) -> StorageStats {
        self.store.lock().get_stats()
    }
}

/// The applied event must move the order along one edge of the workflow graph
fn check_transition(
    before: Option<WorkflowStatus>,
    after: &OrderSnapshot,
    event: &OrderEvent,
) -> ManagerResult<()> {
    let to = after.workflow_status();
    let legal = match before {
        None => to == WorkflowStatus::WaiterCreated,
        Some(from) => from.can_transition_to(to),
    };
    if legal {
        return Ok(());
    }
    Err(ManagerError::Internal(format!(
        "event {} moved order {} from {} to {}",
        event.event_type,
        event.order_id,
        before.map_or("nothing", |s| s.as_str()),
        to
    )))
}

#[cfg(test)]
mod tests;
