//! PreparationCompleted event applier

use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, OrderState};

/// PreparationCompleted applier
pub struct PreparationCompletedApplier;

impl EventApplier for PreparationCompletedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::PreparationCompleted { .. } = &event.payload {
            let OrderState::ChefPreparing {
                approval,
                preparation,
            } = &snapshot.state
            else {
                super::skip(snapshot, event);
                return;
            };
            snapshot.state = OrderState::ChefCompleted {
                approval: approval.clone(),
                preparation: preparation.clone(),
                completed_at: event.timestamp,
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

    fn completed() -> OrderEvent {
        event(
            8,
            OrderEventType::PreparationCompleted,
            EventPayload::PreparationCompleted {
                chef: "Chef Maria".to_string(),
            },
        )
    }

    #[test]
    fn test_preparation_completed_is_ready() {
        let mut snapshot = order_in(OrderState::ChefPreparing {
            approval: approval(ChefType::Food),
            preparation: preparation("Chef Maria"),
        });
        let event = completed();
        PreparationCompletedApplier.apply(&mut snapshot, &event);

        assert_eq!(snapshot.workflow_status(), WorkflowStatus::ChefCompleted);
        assert_eq!(snapshot.fulfillment_status(), FulfillmentStatus::Ready);
        assert_eq!(snapshot.state.completed_at(), Some(event.timestamp));
        assert_eq!(snapshot.state.preparation().unwrap().started_at, 2_000);
        assert!(!snapshot.state.waiter_notified());
    }

    #[test]
    fn test_completed_before_start_is_ignored() {
        let mut snapshot = order_in(OrderState::CashierApproved {
            approval: approval(ChefType::Food),
        });
        let before = snapshot.clone();
        PreparationCompletedApplier.apply(&mut snapshot, &completed());
        assert_eq!(snapshot, before);
    }
}
