//! OrderPlaced event applier

use crate::orders::money::estimated_delivery;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, OrderState, PaymentStatus};

/// OrderPlaced applier
pub struct OrderPlacedApplier;

impl EventApplier for OrderPlacedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::OrderPlaced {
            order_number,
            guest,
            location,
            items,
            totals,
            special_requests,
            assigned_waiter,
        } = &event.payload
        {
            snapshot.order_number = order_number.clone();
            snapshot.guest = guest.clone();
            snapshot.location = location.clone();
            snapshot.items = items.clone();
            snapshot.totals = *totals;
            snapshot.special_requests = special_requests.clone();
            snapshot.assigned_waiter = Some(assigned_waiter.clone());
            snapshot.payment_status = PaymentStatus::Pending;
            snapshot.state = OrderState::WaiterCreated;

            // Server time of the event is the order time
            snapshot.order_time = event.timestamp;
            snapshot.created_at = event.timestamp;
            snapshot.estimated_delivery = Some(estimated_delivery(
                event.timestamp,
                snapshot.max_preparation_time(),
            ));

            super::stamp(snapshot, event);
        }
    }
}
