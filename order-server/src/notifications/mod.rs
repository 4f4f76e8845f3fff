//! 角色通知
//!
//! 工作流每次交接时追加通知，按角色读取。只保存在内存中。

mod rules;

pub use rules::notifications_for;

use parking_lot::RwLock;
use shared::error::ErrorCode;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};
use shared::{Notification, NotificationType, Role};
use thiserror::Error;

use crate::utils::AppError;

#[derive(Debug, Error, PartialEq)]
pub enum NotificationError {
    #[error("Notification not found: {0}")]
    NotFound(String),
}

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::NotFound(id) => AppError::with_message(
                ErrorCode::NotificationNotFound,
                format!("Notification {id} not found"),
            )
            .with_detail("notification_id", id),
        }
    }
}

/// Append-only notification list
#[derive(Debug, Default)]
pub struct NotificationFeed {
    items: RwLock<Vec<Notification>>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: Notification) {
        tracing::debug!(
            id = %notification.id,
            kind = %notification.notification_type,
            role = %notification.recipient_role,
            order_id = %notification.order_id,
            "Notification posted"
        );
        self.items.write().push(notification);
    }

    /// Post what an applied event means for the other roles
    ///
    /// A waiter acknowledging an order consumes their ready notification.
    pub fn record(&self, event: &OrderEvent, snapshot: &OrderSnapshot) {
        for notification in notifications_for(event, snapshot) {
            self.push(notification);
        }
        if let EventPayload::ReadyAcknowledged { waiter } = &event.payload {
            self.mark_order_read(&event.order_id, Role::Waiter, Some(waiter));
        }
    }

    /// Notifications visible to `role` (and `recipient`, if given), newest first
    pub fn for_role(&self, role: Role, recipient: Option<&str>) -> Vec<Notification> {
        let items = self.items.read();
        items
            .iter()
            .rev()
            .filter(|n| n.is_for(role, recipient))
            .cloned()
            .collect()
    }

    pub fn unread_count(&self, role: Role, recipient: Option<&str>) -> usize {
        self.items
            .read()
            .iter()
            .filter(|n| !n.read && n.is_for(role, recipient))
            .count()
    }

    pub fn mark_read(&self, id: &str) -> Result<(), NotificationError> {
        let mut items = self.items.write();
        let notification = items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotificationError::NotFound(id.to_string()))?;
        notification.read = true;
        Ok(())
    }

    /// Mark every unread notification of a role read, returning how many flipped
    pub fn mark_all_read(&self, role: Role, recipient: Option<&str>) -> usize {
        let mut items = self.items.write();
        let mut flipped = 0;
        for n in items.iter_mut().filter(|n| !n.read && n.is_for(role, recipient)) {
            n.read = true;
            flipped += 1;
        }
        flipped
    }

    /// Mark the unread order-ready notifications of one order read
    pub fn mark_order_read(&self, order_id: &str, role: Role, recipient: Option<&str>) -> usize {
        let mut items = self.items.write();
        let mut flipped = 0;
        for n in items.iter_mut().filter(|n| {
            !n.read
                && n.order_id == order_id
                && n.notification_type == NotificationType::OrderReady
                && n.is_for(role, recipient)
        }) {
            n.read = true;
            flipped += 1;
        }
        flipped
    }

    /// Every notification about one order, oldest first
    pub fn for_order(&self, order_id: &str) -> Vec<Notification> {
        self.items
            .read()
            .iter()
            .filter(|n| n.order_id == order_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
