//! Which role hears about which workflow event

use shared::order::{EventPayload, OrderEvent, OrderLocation, OrderSnapshot};
use shared::{Notification, NotificationType, Role};

fn destination(location: &OrderLocation) -> String {
    match location {
        OrderLocation::Takeaway => "takeaway pickup".to_string(),
        other => other.describe(),
    }
}

/// Notifications caused by `event`, given the snapshot after it was applied
pub fn notifications_for(event: &OrderEvent, snapshot: &OrderSnapshot) -> Vec<Notification> {
    let number = &snapshot.order_number;
    let notification = match &event.payload {
        EventPayload::OrderApproved { chef_type, .. } => Notification::new(
            NotificationType::PaymentApproved,
            "Payment Approved",
            format!(
                "Order {number} payment approved, sent to kitchen ({})",
                chef_type.display_name()
            ),
            &event.order_id,
            Role::Chef,
            None,
        ),
        EventPayload::ChefAssigned { chef_name } => Notification::new(
            NotificationType::ChefAssigned,
            "Order Assigned",
            format!("Order {number} has been assigned to you"),
            &event.order_id,
            Role::Chef,
            Some(chef_name.clone()),
        ),
        EventPayload::PreparationCompleted { .. } => Notification::new(
            NotificationType::OrderReady,
            "Order Ready for Pickup",
            format!(
                "Order {number} is ready for delivery to {}",
                destination(&snapshot.location)
            ),
            &event.order_id,
            Role::Waiter,
            snapshot.assigned_waiter.clone(),
        ),
        EventPayload::OrderDelivered { waiter } => Notification::new(
            NotificationType::OrderCompleted,
            "Order Delivered",
            format!(
                "Order {number} delivered to {} by {waiter}",
                destination(&snapshot.location)
            ),
            &event.order_id,
            Role::Cashier,
            None,
        ),
        _ => return Vec::new(),
    };
    vec![notification]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{approval, order_in, preparation};
    use shared::ChefType;
    use shared::order::{OrderEventType, OrderState};

    fn event(event_type: OrderEventType, payload: EventPayload) -> OrderEvent {
        OrderEvent::new(
            9,
            "order-1".to_string(),
            "chef-maria".to_string(),
            "Chef Maria".to_string(),
            "cmd-9".to_string(),
            None,
            event_type,
            payload,
        )
    }

    #[test]
    fn test_completion_notifies_assigned_waiter() {
        let snapshot = order_in(OrderState::ChefCompleted {
            approval: approval(ChefType::Food),
            preparation: preparation("Chef Maria"),
            completed_at: 3_000,
        });
        let notes = notifications_for(
            &event(
                OrderEventType::PreparationCompleted,
                EventPayload::PreparationCompleted {
                    chef: "Chef Maria".to_string(),
                },
            ),
            &snapshot,
        );

        assert_eq!(notes.len(), 1);
        let note = &notes[0];
        assert_eq!(note.notification_type, NotificationType::OrderReady);
        assert_eq!(note.title, "Order Ready for Pickup");
        assert_eq!(note.message, "Order ORD-001 is ready for delivery to Room 102");
        assert_eq!(note.recipient_role, Role::Waiter);
        assert_eq!(note.recipient_id.as_deref(), Some("Mike Waiter"));
        assert!(!note.read);
    }

    #[test]
    fn test_approval_notifies_kitchen() {
        let snapshot = order_in(OrderState::CashierApproved {
            approval: approval(ChefType::Beverage),
        });
        let notes = notifications_for(
            &event(
                OrderEventType::OrderApproved,
                EventPayload::OrderApproved {
                    approved_by: "John Cashier".to_string(),
                    chef_type: ChefType::Beverage,
                },
            ),
            &snapshot,
        );
        assert_eq!(notes[0].notification_type, NotificationType::PaymentApproved);
        assert_eq!(notes[0].recipient_role, Role::Chef);
        assert!(notes[0].message.contains("Beverage Chef"));
    }

    #[test]
    fn test_submission_is_silent() {
        let snapshot = order_in(OrderState::CashierPending { submitted_at: 1 });
        let notes = notifications_for(
            &event(
                OrderEventType::SubmittedToCashier,
                EventPayload::SubmittedToCashier {},
            ),
            &snapshot,
        );
        assert!(notes.is_empty());
    }
}
