//! OrderRejected event applier

use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, OrderState, PaymentStatus};

/// OrderRejected applier
pub struct OrderRejectedApplier;

impl EventApplier for OrderRejectedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::OrderRejected {
            rejected_by,
            reason,
            refunded,
        } = &event.payload
        {
            let previous = snapshot.workflow_status();
            snapshot.state = OrderState::Cancelled {
                cancelled_by: rejected_by.clone(),
                cancelled_at: event.timestamp,
                reason: reason.clone(),
                previous,
            };
            if *refunded {
                snapshot.payment_status = PaymentStatus::Refunded;
            }
            super::stamp(snapshot, event);
        }
    }
}
