//! Order commands - requests from staff to change an order

use super::types::{GuestInfo, OrderItemInput, OrderLocation};
use crate::models::{ChefType, Role};
use serde::{Deserialize, Serialize};

/// Order command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCommand {
    /// Client generated id (idempotency key)
    pub command_id: String,
    /// Operator issuing the command
    pub operator_id: String,
    /// Operator name (snapshot for audit)
    pub operator_name: String,
    /// Role the operator acts in
    pub operator_role: Role,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub payload: OrderCommandPayload,
}

impl OrderCommand {
    pub fn new(
        operator_id: impl Into<String>,
        operator_name: impl Into<String>,
        operator_role: Role,
        payload: OrderCommandPayload,
    ) -> Self {
        Self {
            command_id: crate::util::new_id(),
            operator_id: operator_id.into(),
            operator_name: operator_name.into(),
            operator_role,
            timestamp: crate::util::now_millis(),
            payload,
        }
    }

    /// Target order, `None` for commands that create one
    pub fn order_id(&self) -> Option<&str> {
        self.payload.order_id()
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCommandPayload {
    /// Waiter takes a new order
    PlaceOrder {
        guest: GuestInfo,
        location: OrderLocation,
        items: Vec<OrderItemInput>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        special_requests: Option<String>,
        /// Defaults to the operator
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assigned_waiter: Option<String>,
    },
    /// Waiter hands the order to the cashier
    SubmitToCashier { order_id: String },
    /// Cashier accepts payment and releases the order to the kitchen
    ApproveOrder { order_id: String },
    /// Cashier rejects the order
    RejectOrder {
        order_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    /// Kitchen lead assigns a named chef
    AssignChef { order_id: String, chef_name: String },
    /// Chef of the given station starts cooking
    StartPreparation { order_id: String, chef_type: ChefType },
    /// Chef finishes cooking
    CompletePreparation { order_id: String },
    /// Waiter acknowledges the ready notification
    AcknowledgeReady { order_id: String },
    /// Waiter hands the order to the guest
    DeliverOrder { order_id: String },
}

impl OrderCommandPayload {
    pub fn order_id(&self) -> Option<&str> {
        match self {
            OrderCommandPayload::PlaceOrder { .. } => None,
            OrderCommandPayload::SubmitToCashier { order_id }
            | OrderCommandPayload::ApproveOrder { order_id }
            | OrderCommandPayload::RejectOrder { order_id, .. }
            | OrderCommandPayload::AssignChef { order_id, .. }
            | OrderCommandPayload::StartPreparation { order_id, .. }
            | OrderCommandPayload::CompletePreparation { order_id }
            | OrderCommandPayload::AcknowledgeReady { order_id }
            | OrderCommandPayload::DeliverOrder { order_id } => Some(order_id),
        }
    }

    /// Name used in logs and error messages
    pub fn action_name(&self) -> &'static str {
        match self {
            OrderCommandPayload::PlaceOrder { .. } => "place",
            OrderCommandPayload::SubmitToCashier { .. } => "submit",
            OrderCommandPayload::ApproveOrder { .. } => "approve",
            OrderCommandPayload::RejectOrder { .. } => "reject",
            OrderCommandPayload::AssignChef { .. } => "assign",
            OrderCommandPayload::StartPreparation { .. } => "start",
            OrderCommandPayload::CompletePreparation { .. } => "complete",
            OrderCommandPayload::AcknowledgeReady { .. } => "acknowledge",
            OrderCommandPayload::DeliverOrder { .. } => "deliver",
        }
    }
}
