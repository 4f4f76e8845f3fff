//! ReadyAcknowledged event applier

use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, OrderState};

/// ReadyAcknowledged applier
pub struct ReadyAcknowledgedApplier;

impl EventApplier for ReadyAcknowledgedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ReadyAcknowledged { .. } = &event.payload {
            let OrderState::ChefCompleted {
                approval,
                preparation,
                completed_at,
            } = &snapshot.state
            else {
                super::skip(snapshot, event);
                return;
            };
            snapshot.state = OrderState::WaiterNotified {
                approval: approval.clone(),
                preparation: preparation.clone(),
                completed_at: *completed_at,
                notified_at: event.timestamp,
            };
            super::stamp(snapshot, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::appliers::test_events::event;
    use crate::orders::fixtures::{approval, order_in, preparation};
    use shared::ChefType;
    use shared::order::{FulfillmentStatus, OrderEventType, WorkflowStatus};

    #[test]
    fn test_ready_acknowledged_sets_flag() {
        let mut snapshot = order_in(OrderState::ChefCompleted {
            approval: approval(ChefType::Snack),
            preparation: preparation("Chef Lina"),
            completed_at: 3_000,
        });
        let event = event(
            9,
            OrderEventType::ReadyAcknowledged,
            EventPayload::ReadyAcknowledged {
                waiter: "Mike Waiter".to_string(),
            },
        );
        ReadyAcknowledgedApplier.apply(&mut snapshot, &event);

        assert_eq!(snapshot.workflow_status(), WorkflowStatus::WaiterNotified);
        assert_eq!(snapshot.fulfillment_status(), FulfillmentStatus::Ready);
        assert!(snapshot.state.waiter_notified());
        assert_eq!(snapshot.state.completed_at(), Some(3_000));
    }
}
