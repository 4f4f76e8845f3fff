//! ChefAssigned event applier

use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, OrderState};

/// ChefAssigned applier
pub struct ChefAssignedApplier;

impl EventApplier for ChefAssignedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ChefAssigned { chef_name } = &event.payload {
            let Some(approval) = snapshot.state.approval().cloned() else {
                super::skip(snapshot, event);
                return;
            };
            snapshot.state = OrderState::ChefAssigned {
                approval,
                assigned_chef: chef_name.clone(),
                assigned_at: event.timestamp,
            };
            super::stamp(snapshot, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::appliers::test_events::event;
    use crate::orders::fixtures::{approval, order_in};
    use shared::ChefType;
    use shared::order::{FulfillmentStatus, OrderEventType, WorkflowStatus};

    fn assigned() -> OrderEvent {
        event(
            6,
            OrderEventType::ChefAssigned,
            EventPayload::ChefAssigned {
                chef_name: "Chef Roberto".to_string(),
            },
        )
    }

    #[test]
    fn test_chef_assigned_keeps_approval() {
        let mut snapshot = order_in(OrderState::CashierApproved {
            approval: approval(ChefType::Beverage),
        });
        ChefAssignedApplier.apply(&mut snapshot, &assigned());

        assert_eq!(snapshot.workflow_status(), WorkflowStatus::ChefAssigned);
        assert_eq!(snapshot.fulfillment_status(), FulfillmentStatus::Confirmed);
        assert_eq!(snapshot.chef_type(), Some(ChefType::Beverage));
        assert_eq!(snapshot.state.assigned_chef(), Some("Chef Roberto"));
        assert_eq!(snapshot.last_sequence, 6);
    }

    #[test]
    fn test_chef_assigned_without_approval_is_ignored() {
        let mut snapshot = order_in(OrderState::CashierPending { submitted_at: 1 });
        let before = snapshot.clone();
        ChefAssignedApplier.apply(&mut snapshot, &assigned());
        assert_eq!(snapshot, before);
    }
}
