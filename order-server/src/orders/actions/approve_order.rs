//! ApproveOrder command handler
//!
//! The cashier takes payment and releases the order to the kitchen queue
//! chosen from its items.

use async_trait::async_trait;

use super::{require_status, single_event};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{
    EventPayload, OrderEvent, OrderEventType, WorkflowStatus, determine_chef_type,
};

/// ApproveOrder action
#[derive(Debug, Clone)]
pub struct ApproveOrderAction {
    pub order_id: String,
}

#[async_trait]
impl CommandHandler for ApproveOrderAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.load_snapshot(&self.order_id)?;
        require_status(&snapshot, &[WorkflowStatus::CashierPending], "approve")?;

        let chef_type = determine_chef_type(&snapshot.items);
        tracing::debug!(order_id = %self.order_id, chef_type = %chef_type, "Routing approved order");

        Ok(single_event(
            ctx,
            metadata,
            &self.order_id,
            OrderEventType::OrderApproved,
            EventPayload::OrderApproved {
                approved_by: metadata.operator_name.clone(),
                chef_type,
            },
        ))
    }
}
