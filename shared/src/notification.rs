//! Workflow notifications
//!
//! Appended by the server when an order changes hands between roles and read
//! back per role by the dashboards.

use crate::models::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    /// Kitchen finished, waiter should pick up
    OrderReady,
    /// Cashier approved, kitchen may start
    PaymentApproved,
    /// A named chef took the order
    ChefAssigned,
    /// Guest received the order
    OrderCompleted,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderReady => "order-ready",
            Self::PaymentApproved => "payment-approved",
            Self::ChefAssigned => "chef-assigned",
            Self::OrderCompleted => "order-completed",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message addressed to a role (and optionally one person in it)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub order_id: String,
    pub recipient_role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    pub created_at: i64,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// New unread notification stamped with the current time
    pub fn new(
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
        order_id: impl Into<String>,
        recipient_role: Role,
        recipient_id: Option<String>,
    ) -> Self {
        Self {
            id: crate::util::new_id(),
            notification_type,
            title: title.into(),
            message: message.into(),
            order_id: order_id.into(),
            recipient_role,
            recipient_id,
            created_at: crate::util::now_millis(),
            read: false,
        }
    }

    /// Whether `recipient` should see this notification
    ///
    /// Notifications without a recipient id are visible to the whole role.
    pub fn is_for(&self, role: Role, recipient: Option<&str>) -> bool {
        if self.recipient_role != role {
            return false;
        }
        match (self.recipient_id.as_deref(), recipient) {
            (Some(target), Some(who)) => target == who,
            _ => true,
        }
    }
}
