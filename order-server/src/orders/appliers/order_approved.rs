//! OrderApproved event applier
//!
//! Payment is taken on approval.

use crate::orders::traits::EventApplier;
use shared::order::{Approval, EventPayload, OrderEvent, OrderSnapshot, OrderState, PaymentStatus};

/// OrderApproved applier
pub struct OrderApprovedApplier;

impl EventApplier for OrderApprovedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::OrderApproved {
            approved_by,
            chef_type,
        } = &event.payload
        {
            snapshot.state = OrderState::CashierApproved {
                approval: Approval {
                    approved_by: approved_by.clone(),
                    approved_at: event.timestamp,
                    chef_type: *chef_type,
                },
            };
            snapshot.payment_status = PaymentStatus::Paid;
            super::stamp(snapshot, event);
        }
    }
}
