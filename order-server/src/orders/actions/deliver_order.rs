//! DeliverOrder command handler
//!
//! Deliverable once the kitchen is done, whether or not the waiter
//! acknowledged the ready notification first.

use async_trait::async_trait;

use super::{require_status, single_event};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderEventType, WorkflowStatus};

/// DeliverOrder action
#[derive(Debug, Clone)]
pub struct DeliverOrderAction {
    pub order_id: String,
}

#[async_trait]
impl CommandHandler for DeliverOrderAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.load_snapshot(&self.order_id)?;
        require_status(
            &snapshot,
            &[WorkflowStatus::ChefCompleted, WorkflowStatus::WaiterNotified],
            "deliver",
        )?;

        Ok(single_event(
            ctx,
            metadata,
            &self.order_id,
            OrderEventType::OrderDelivered,
            EventPayload::OrderDelivered {
                waiter: metadata.operator_name.clone(),
            },
        ))
    }
}
