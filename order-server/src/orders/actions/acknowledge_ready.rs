//! AcknowledgeReady command handler

use async_trait::async_trait;

use super::{require_status, single_event};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderEventType, WorkflowStatus};

/// AcknowledgeReady action
#[derive(Debug, Clone)]
pub struct AcknowledgeReadyAction {
    pub order_id: String,
}

#[async_trait]
impl CommandHandler for AcknowledgeReadyAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.load_snapshot(&self.order_id)?;
        require_status(&snapshot, &[WorkflowStatus::ChefCompleted], "acknowledge")?;

        Ok(single_event(
            ctx,
            metadata,
            &self.order_id,
            OrderEventType::ReadyAcknowledged,
            EventPayload::ReadyAcknowledged {
                waiter: metadata.operator_name.clone(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{
        ORDER_ID, approval, catalog, metadata, order_in, preparation, store_with,
    };
    use crate::orders::money::ChargeRates;
    use shared::order::OrderState;
    use shared::{ChefType, Role};

    #[tokio::test]
    async fn test_acknowledge_completed_order() {
        let store = store_with(order_in(OrderState::ChefCompleted {
            approval: approval(ChefType::Food),
            preparation: preparation("Chef Maria"),
            completed_at: 3_000,
        }));
        let catalog = catalog();
        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());

        let action = AcknowledgeReadyAction {
            order_id: ORDER_ID.to_string(),
        };
        let events = action
            .execute(&mut ctx, &metadata(Role::Waiter, "Mike Waiter"))
            .await
            .unwrap();
        assert_eq!(events[0].event_type, OrderEventType::ReadyAcknowledged);
    }

    #[tokio::test]
    async fn test_acknowledge_twice() {
        let store = store_with(order_in(OrderState::WaiterNotified {
            approval: approval(ChefType::Food),
            preparation: preparation("Chef Maria"),
            completed_at: 3_000,
            notified_at: 3_500,
        }));
        let catalog = catalog();
        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());

        let action = AcknowledgeReadyAction {
            order_id: ORDER_ID.to_string(),
        };
        let result = action
            .execute(&mut ctx, &metadata(Role::Waiter, "Mike Waiter"))
            .await;
        assert!(matches!(result, Err(OrderError::InvalidTransition { .. })));
    }
}
