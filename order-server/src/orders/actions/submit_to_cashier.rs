//! SubmitToCashier command handler

use async_trait::async_trait;

use super::{require_status, single_event};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderEventType, WorkflowStatus};

/// SubmitToCashier action
#[derive(Debug, Clone)]
pub struct SubmitToCashierAction {
    pub order_id: String,
}

#[async_trait]
impl CommandHandler for SubmitToCashierAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.load_snapshot(&self.order_id)?;
        require_status(&snapshot, &[WorkflowStatus::WaiterCreated], "submit")?;

        Ok(single_event(
            ctx,
            metadata,
            &self.order_id,
            OrderEventType::SubmittedToCashier,
            EventPayload::SubmittedToCashier {},
        ))
    }
}
