//! PreparationStarted event applier

use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, OrderState, Preparation};

/// PreparationStarted applier
pub struct PreparationStartedApplier;

impl EventApplier for PreparationStartedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::PreparationStarted { chef, .. } = &event.payload {
            let Some(approval) = snapshot.state.approval().cloned() else {
                super::skip(snapshot, event);
                return;
            };
            snapshot.state = OrderState::ChefPreparing {
                approval,
                preparation: Preparation {
                    chef: chef.clone(),
                    started_at: event.timestamp,
                },
            };
            super::stamp(snapshot, event);
        }
    }
}
