//! Order snapshot - computed state from event stream
//!
//! The snapshot includes a `state_checksum` field for drift detection.
//! Clients can compare their locally computed checksum with the server's
//! to detect that they missed an event.

use super::state::{OrderState, WorkflowStatus};
use super::types::{FulfillmentStatus, GuestInfo, OrderItem, OrderLocation, OrderTotals, PaymentStatus};
use crate::models::ChefType;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Order snapshot - computed from event stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    /// Order ID (assigned by server)
    pub order_id: String,
    /// Human readable number (ORD-001)
    pub order_number: String,
    pub guest: GuestInfo,
    pub location: OrderLocation,
    pub items: Vec<OrderItem>,
    pub totals: OrderTotals,
    pub payment_status: PaymentStatus,
    /// Workflow position
    pub state: OrderState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_waiter: Option<String>,
    /// Time the waiter took the order
    pub order_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<i64>,
    /// Creation timestamp
    pub created_at: i64,
    /// Last update timestamp
    pub updated_at: i64,
    /// Last applied event sequence
    pub last_sequence: u64,
    /// State checksum for drift detection (hex string)
    #[serde(default)]
    pub state_checksum: String,
}

impl OrderSnapshot {
    /// Create a new empty order
    pub fn new(order_id: String) -> Self {
        let now = crate::util::now_millis();
        let mut snapshot = Self {
            order_id,
            order_number: String::new(),
            guest: GuestInfo::default(),
            location: OrderLocation::Takeaway,
            items: Vec::new(),
            totals: OrderTotals::default(),
            payment_status: PaymentStatus::Pending,
            state: OrderState::WaiterCreated,
            special_requests: None,
            assigned_waiter: None,
            order_time: now,
            estimated_delivery: None,
            created_at: now,
            updated_at: now,
            last_sequence: 0,
            state_checksum: String::new(),
        };
        snapshot.update_checksum();
        snapshot
    }

    pub fn workflow_status(&self) -> WorkflowStatus {
        self.state.status()
    }

    /// Guest-facing status
    pub fn fulfillment_status(&self) -> FulfillmentStatus {
        self.state.fulfillment()
    }

    pub fn chef_type(&self) -> Option<ChefType> {
        self.state.chef_type()
    }

    /// Time the order was handed to the guest
    pub fn actual_delivery(&self) -> Option<i64> {
        self.state.delivered_at()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Longest preparation time among the items, in minutes
    pub fn max_preparation_time(&self) -> u32 {
        self.items
            .iter()
            .map(|item| item.menu_item.preparation_time)
            .max()
            .unwrap_or(0)
    }

    /// Time by which the kitchen should be done, once cooking started
    pub fn preparation_deadline(&self) -> Option<i64> {
        match &self.state {
            OrderState::ChefPreparing { preparation, .. } => Some(
                preparation.started_at + crate::util::minutes_to_millis(self.max_preparation_time()),
            ),
            _ => None,
        }
    }

    /// Total number of portions
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Compute state checksum for drift detection
    ///
    /// Fields included:
    /// - items.len() - number of lines
    /// - total (cents) - order total in cents
    /// - payment status
    /// - last_sequence - last applied event sequence
    /// - workflow status rank
    pub fn compute_checksum(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher as _;

        let mut hasher = DefaultHasher::new();

        self.items.len().hash(&mut hasher);
        (self.totals.total * rust_decimal::Decimal::ONE_HUNDRED)
            .round()
            .to_string()
            .hash(&mut hasher);
        (self.payment_status as u8).hash(&mut hasher);
        self.last_sequence.hash(&mut hasher);
        self.workflow_status().rank().hash(&mut hasher);

        format!("{:016x}", hasher.finish())
    }

    /// Update the state_checksum field based on current state
    pub fn update_checksum(&mut self) {
        self.state_checksum = self.compute_checksum();
    }

    /// Verify that the state_checksum matches computed checksum
    pub fn verify_checksum(&self) -> bool {
        self.state_checksum == self.compute_checksum()
    }
}

impl Default for OrderSnapshot {
    fn default() -> Self {
        Self::new(String::new())
    }
}
