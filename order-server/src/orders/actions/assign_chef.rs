//! AssignChef command handler

use async_trait::async_trait;

use super::{require_status, single_event};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderEventType, WorkflowStatus};

/// AssignChef action
#[derive(Debug, Clone)]
pub struct AssignChefAction {
    pub order_id: String,
    pub chef_name: String,
}

#[async_trait]
impl CommandHandler for AssignChefAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let chef_name = self.chef_name.trim();
        if chef_name.is_empty() {
            return Err(OrderError::Validation("chef name is required".to_string()));
        }

        let snapshot = ctx.load_snapshot(&self.order_id)?;
        require_status(&snapshot, &[WorkflowStatus::CashierApproved], "assign")?;

        Ok(single_event(
            ctx,
            metadata,
            &self.order_id,
            OrderEventType::ChefAssigned,
            EventPayload::ChefAssigned {
                chef_name: chef_name.to_string(),
            },
        ))
    }
}
