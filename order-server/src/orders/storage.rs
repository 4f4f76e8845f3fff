//! In-memory storage for order events and snapshots
//!
//! # Layout
//!
//! | Collection | Key | Value | Purpose |
//! |------------|-----|-------|---------|
//! | events | position | OrderEvent | Event stream in sequence order |
//! | order_events | order_id | positions | Per-order event index |
//! | snapshots | order_id | OrderSnapshot | Current order state |
//! | processed_commands | command_id | - | Idempotency check |
//!
//! The store has no locking of its own. [`OrdersManager`](super::OrdersManager)
//! owns it behind a single mutex, which is what makes commands linearizable.

use std::collections::{HashMap, HashSet};

use shared::order::{OrderEvent, OrderSnapshot};

/// Storage statistics
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct StorageStats {
    pub event_count: usize,
    pub snapshot_count: usize,
    pub processed_commands: usize,
    pub current_sequence: u64,
}

/// Event and snapshot store
#[derive(Debug, Default)]
pub struct OrderStore {
    events: Vec<OrderEvent>,
    order_events: HashMap<String, Vec<usize>>,
    snapshots: HashMap<String, OrderSnapshot>,
    processed_commands: HashSet<String>,
    sequence: u64,
    order_count: u64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Sequence ==========

    /// Last sequence number handed out
    pub fn get_current_sequence(&self) -> u64 {
        self.sequence
    }

    pub fn set_sequence(&mut self, sequence: u64) {
        self.sequence = self.sequence.max(sequence);
    }

    /// Number of orders ever placed (drives order numbers)
    pub fn get_order_count(&self) -> u64 {
        self.order_count
    }

    pub fn set_order_count(&mut self, count: u64) {
        self.order_count = self.order_count.max(count);
    }

    // ========== Idempotency ==========

    pub fn is_command_processed(&self, command_id: &str) -> bool {
        self.processed_commands.contains(command_id)
    }

    pub fn mark_command_processed(&mut self, command_id: &str) {
        self.processed_commands.insert(command_id.to_string());
    }

    // ========== Events ==========

    pub fn store_event(&mut self, event: OrderEvent) {
        let position = self.events.len();
        self.order_events
            .entry(event.order_id.clone())
            .or_default()
            .push(position);
        self.events.push(event);
    }

    pub fn get_events_for_order(&self, order_id: &str) -> Vec<OrderEvent> {
        self.order_events
            .get(order_id)
            .map(|positions| positions.iter().map(|&p| self.events[p].clone()).collect())
            .unwrap_or_default()
    }

    /// Events with a sequence strictly greater than `since_sequence`
    pub fn get_events_since(&self, since_sequence: u64) -> Vec<OrderEvent> {
        let start = self.events.partition_point(|e| e.sequence <= since_sequence);
        self.events[start..].to_vec()
    }

    // ========== Snapshots ==========

    pub fn store_snapshot(&mut self, snapshot: OrderSnapshot) {
        self.snapshots.insert(snapshot.order_id.clone(), snapshot);
    }

    pub fn get_snapshot(&self, order_id: &str) -> Option<&OrderSnapshot> {
        self.snapshots.get(order_id)
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &OrderSnapshot> {
        self.snapshots.values()
    }

    pub fn get_stats(&self) -> StorageStats {
        StorageStats {
            event_count: self.events.len(),
            snapshot_count: self.snapshots.len(),
            processed_commands: self.processed_commands.len(),
            current_sequence: self.sequence,
        }
    }
}
