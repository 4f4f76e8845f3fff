//! SubmittedToCashier event applier

use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, OrderState};

/// SubmittedToCashier applier
pub struct SubmittedToCashierApplier;

impl EventApplier for SubmittedToCashierApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::SubmittedToCashier {} = &event.payload {
            snapshot.state = OrderState::CashierPending {
                submitted_at: event.timestamp,
            };
            super::stamp(snapshot, event);
        }
    }
}
