//! OrderDelivered event applier

use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, OrderState};

/// OrderDelivered applier
pub struct OrderDeliveredApplier;

impl EventApplier for OrderDeliveredApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::OrderDelivered { waiter } = &event.payload {
            let (approval, preparation, completed_at) = match &snapshot.state {
                OrderState::ChefCompleted {
                    approval,
                    preparation,
                    completed_at,
                }
                | OrderState::WaiterNotified {
                    approval,
                    preparation,
                    completed_at,
                    ..
                } => (approval.clone(), preparation.clone(), *completed_at),
                _ => {
                    super::skip(snapshot, event);
                    return;
                }
            };
            snapshot.state = OrderState::Delivered {
                approval,
                preparation,
                completed_at,
                delivered_by: waiter.clone(),
                // Never before the order was taken
                delivered_at: event.timestamp.max(snapshot.order_time),
            };
            super::stamp(snapshot, event);
        }
    }
}
