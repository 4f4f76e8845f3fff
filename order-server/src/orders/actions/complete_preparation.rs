//! CompletePreparation command handler
//!
//! Only the chef cooking the order, or a supervisor, may finish it.

use async_trait::async_trait;

use super::{require_status, single_event};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderEventType, WorkflowStatus};

/// CompletePreparation action
#[derive(Debug, Clone)]
pub struct CompletePreparationAction {
    pub order_id: String,
}

#[async_trait]
impl CommandHandler for CompletePreparationAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.load_snapshot(&self.order_id)?;
        require_status(&snapshot, &[WorkflowStatus::ChefPreparing], "complete")?;

        let chef = snapshot
            .state
            .preparation()
            .map(|p| p.chef.clone())
            .ok_or_else(|| {
                OrderError::Internal(format!("order {} preparing without a chef", self.order_id))
            })?;
        // The cook of record stays the chef who started the order
        if chef != metadata.operator_name && !metadata.operator_role.is_supervisor() {
            return Err(OrderError::ChefNotAssigned {
                assigned: chef,
                actual: metadata.operator_name.clone(),
            });
        }

        Ok(single_event(
            ctx,
            metadata,
            &self.order_id,
            OrderEventType::PreparationCompleted,
            EventPayload::PreparationCompleted { chef },
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
    async fn test_complete_keeps_cook_of_record() {
        let store = store_with(order_in(OrderState::ChefPreparing {
            approval: approval(ChefType::Food),
            preparation: preparation("Chef Roberto"),
        }));
        let catalog = catalog();
        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());

        let action = CompletePreparationAction {
            order_id: ORDER_ID.to_string(),
        };
        let events = action
            .execute(&mut ctx, &metadata(Role::Manager, "Maya Manager"))
            .await
            .unwrap();
        assert!(matches!(
            &events[0].payload,
            EventPayload::PreparationCompleted { chef } if chef == "Chef Roberto"
        ));
    }

    #[tokio::test]
    async fn test_other_chef_cannot_complete() {
        let store = store_with(order_in(OrderState::ChefPreparing {
            approval: approval(ChefType::Food),
            preparation: preparation("Chef Roberto"),
        }));
        let catalog = catalog();
        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());

        let action = CompletePreparationAction {
            order_id: ORDER_ID.to_string(),
        };
        let result = action
            .execute(&mut ctx, &metadata(Role::Chef, "Chef Ana"))
            .await;
        assert!(matches!(
            result,
            Err(OrderError::ChefNotAssigned { ref assigned, ref actual })
                if assigned == "Chef Roberto" && actual == "Chef Ana"
        ));
    }

    #[tokio::test]
    async fn test_complete_before_start() {
        let store = store_with(order_in(OrderState::CashierApproved {
            approval: approval(ChefType::Food),
        }));
        let catalog = catalog();
        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());

        let action = CompletePreparationAction {
            order_id: ORDER_ID.to_string(),
        };
        let result = action
            .execute(&mut ctx, &metadata(Role::Chef, "Chef Maria"))
            .await;
        assert!(matches!(
            result,
            Err(OrderError::InvalidTransition {
                from: WorkflowStatus::CashierApproved,
                ..
            })
        ));
    }
}
