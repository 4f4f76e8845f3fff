//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions: the outcome depends
//! only on the snapshot and the event, so replaying the stream of an order
//! rebuilds the same snapshot.

use enum_dispatch::enum_dispatch;

use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};

mod chef_assigned;
mod order_approved;
mod order_delivered;
mod order_placed;
mod order_rejected;
mod preparation_completed;
mod preparation_started;
mod ready_acknowledged;
mod submitted_to_cashier;

pub use chef_assigned::ChefAssignedApplier;
pub use order_approved::OrderApprovedApplier;
pub use order_delivered::OrderDeliveredApplier;
pub use order_placed::OrderPlacedApplier;
pub use order_rejected::OrderRejectedApplier;
pub use preparation_completed::PreparationCompletedApplier;
pub use preparation_started::PreparationStartedApplier;
pub use ready_acknowledged::ReadyAcknowledgedApplier;
pub use submitted_to_cashier::SubmittedToCashierApplier;

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    OrderPlaced(OrderPlacedApplier),
    SubmittedToCashier(SubmittedToCashierApplier),
    OrderApproved(OrderApprovedApplier),
    OrderRejected(OrderRejectedApplier),
    ChefAssigned(ChefAssignedApplier),
    PreparationStarted(PreparationStartedApplier),
    PreparationCompleted(PreparationCompletedApplier),
    ReadyAcknowledged(ReadyAcknowledgedApplier),
    OrderDelivered(OrderDeliveredApplier),
}

/// Convert OrderEvent reference to EventAction
///
/// This is the ONLY place with a match on EventPayload.
impl From<&OrderEvent> for EventAction {
    fn from(event: &OrderEvent) -> Self {
        match &event.payload {
            EventPayload::OrderPlaced { .. } => EventAction::OrderPlaced(OrderPlacedApplier),
            EventPayload::SubmittedToCashier { .. } => {
                EventAction::SubmittedToCashier(SubmittedToCashierApplier)
            }
            EventPayload::OrderApproved { .. } => EventAction::OrderApproved(OrderApprovedApplier),
            EventPayload::OrderRejected { .. } => EventAction::OrderRejected(OrderRejectedApplier),
            EventPayload::ChefAssigned { .. } => EventAction::ChefAssigned(ChefAssignedApplier),
            EventPayload::PreparationStarted { .. } => {
                EventAction::PreparationStarted(PreparationStartedApplier)
            }
            EventPayload::PreparationCompleted { .. } => {
                EventAction::PreparationCompleted(PreparationCompletedApplier)
            }
            EventPayload::ReadyAcknowledged { .. } => {
                EventAction::ReadyAcknowledged(ReadyAcknowledgedApplier)
            }
            EventPayload::OrderDelivered { .. } => {
                EventAction::OrderDelivered(OrderDeliveredApplier)
            }
        }
    }
}

/// Record that `event` has been applied
pub(crate) fn stamp(snapshot: &mut OrderSnapshot, event: &OrderEvent) {
    snapshot.last_sequence = event.sequence;
    snapshot.updated_at = event.timestamp;
    snapshot.update_checksum();
}

/// Log an event that does not fit the state it was applied to
pub(crate) fn skip(snapshot: &OrderSnapshot, event: &OrderEvent) {
    tracing::warn!(
        order_id = %snapshot.order_id,
        event_type = %event.event_type,
        status = %snapshot.workflow_status(),
        "Event does not apply to current state, ignored"
    );
}
