//! Order events - immutable facts recorded after command processing

use super::types::{GuestInfo, OrderItem, OrderLocation, OrderTotals};
use crate::models::ChefType;
use serde::{Deserialize, Serialize};

/// Order event - immutable audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Event unique ID
    pub event_id: String,
    /// Global sequence number (for ordering and replay)
    pub sequence: u64,
    /// Order this event belongs to
    pub order_id: String,
    /// Server timestamp (Unix milliseconds) - authoritative for state evolution
    pub timestamp: i64,
    /// Client timestamp (Unix milliseconds) - for audit only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<i64>,
    /// Operator who triggered this event
    pub operator_id: String,
    /// Operator name (snapshot for audit)
    pub operator_name: String,
    /// Command that triggered this event
    pub command_id: String,
    /// Event type
    pub event_type: OrderEventType,
    /// Event payload
    pub payload: EventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEventType {
    // Waiter
    OrderPlaced,
    SubmittedToCashier,

    // Cashier
    OrderApproved,
    OrderRejected,

    // Kitchen
    ChefAssigned,
    PreparationStarted,
    PreparationCompleted,

    // Delivery
    ReadyAcknowledged,
    OrderDelivered,
}

impl std::fmt::Display for OrderEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderEventType::OrderPlaced => write!(f, "ORDER_PLACED"),
            OrderEventType::SubmittedToCashier => write!(f, "SUBMITTED_TO_CASHIER"),
            OrderEventType::OrderApproved => write!(f, "ORDER_APPROVED"),
            OrderEventType::OrderRejected => write!(f, "ORDER_REJECTED"),
            OrderEventType::ChefAssigned => write!(f, "CHEF_ASSIGNED"),
            OrderEventType::PreparationStarted => write!(f, "PREPARATION_STARTED"),
            OrderEventType::PreparationCompleted => write!(f, "PREPARATION_COMPLETED"),
            OrderEventType::ReadyAcknowledged => write!(f, "READY_ACKNOWLEDGED"),
            OrderEventType::OrderDelivered => write!(f, "ORDER_DELIVERED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    OrderPlaced {
        order_number: String,
        guest: GuestInfo,
        location: OrderLocation,
        items: Vec<OrderItem>,
        totals: OrderTotals,
        #[serde(skip_serializing_if = "Option::is_none")]
        special_requests: Option<String>,
        assigned_waiter: String,
    },

    SubmittedToCashier {},

    OrderApproved {
        approved_by: String,
        chef_type: ChefType,
    },

    OrderRejected {
        rejected_by: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        /// The order had been paid and the payment is returned
        refunded: bool,
    },

    ChefAssigned {
        chef_name: String,
    },

    PreparationStarted {
        chef: String,
        chef_type: ChefType,
    },

    PreparationCompleted {
        chef: String,
    },

    ReadyAcknowledged {
        waiter: String,
    },

    OrderDelivered {
        waiter: String,
    },
}

impl OrderEvent {
    /// Create a new event
    ///
    /// # Arguments
    /// * `sequence` - Global sequence number (authoritative ordering)
    /// * `order_id` - Order this event belongs to
    /// * `operator_id` - Operator who triggered this event
    /// * `operator_name` - Operator name (snapshot for audit)
    /// * `command_id` - Command that triggered this event
    /// * `client_timestamp` - Client-provided timestamp (for audit, may have clock skew)
    /// * `event_type` - Event type
    /// * `payload` - Event payload
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sequence: u64,
        order_id: String,
        operator_id: String,
        operator_name: String,
        command_id: String,
        client_timestamp: Option<i64>,
        event_type: OrderEventType,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_id: crate::util::new_id(),
            sequence,
            order_id,
            timestamp: crate::util::now_millis(),
            client_timestamp,
            operator_id,
            operator_name,
            command_id,
            event_type,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_display_matches_serde() {
        let json = serde_json::to_string(&OrderEventType::PreparationCompleted).unwrap();
        assert_eq!(json, format!("\"{}\"", OrderEventType::PreparationCompleted));
    }

    #[test]
    fn test_event_new_sets_server_timestamp() {
        let before = crate::util::now_millis();
        let event = OrderEvent::new(
            7,
            "order-1".to_string(),
            "cashier-1".to_string(),
            "John Cashier".to_string(),
            "cmd-1".to_string(),
            Some(0),
            OrderEventType::OrderApproved,
            EventPayload::OrderApproved {
                approved_by: "John Cashier".to_string(),
                chef_type: ChefType::Beverage,
            },
        );
        assert_eq!(event.sequence, 7);
        assert!(event.timestamp >= before);
        assert_eq!(event.client_timestamp, Some(0));
        assert!(!event.event_id.is_empty());
    }

    #[test]
    fn test_payload_tag() {
        let payload = EventPayload::OrderDelivered {
            waiter: "Mike Waiter".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "ORDER_DELIVERED");
        assert_eq!(json["waiter"], "Mike Waiter");
    }
}
