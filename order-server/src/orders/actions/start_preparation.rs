//! StartPreparation command handler
//!
//! A chef may only pick up orders routed to their own station. Once a chef
//! has been assigned, nobody else at the station may start the order, but a
//! supervisor may start it on that chef's behalf.

use async_trait::async_trait;

use super::{require_status, single_event};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::ChefType;
use shared::order::{EventPayload, OrderEvent, OrderEventType, OrderState, WorkflowStatus};

/// StartPreparation action
#[derive(Debug, Clone)]
pub struct StartPreparationAction {
    pub order_id: String,
    /// Station of the acting chef
    pub chef_type: ChefType,
}

#[async_trait]
impl CommandHandler for StartPreparationAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.load_snapshot(&self.order_id)?;
        require_status(
            &snapshot,
            &[WorkflowStatus::CashierApproved, WorkflowStatus::ChefAssigned],
            "start",
        )?;

        let expected = snapshot.chef_type().ok_or_else(|| {
            OrderError::Internal(format!("order {} approved without a chef type", self.order_id))
        })?;
        if expected != self.chef_type {
            return Err(OrderError::ChefTypeMismatch {
                expected,
                actual: self.chef_type,
            });
        }

        let chef = match &snapshot.state {
            OrderState::ChefAssigned { assigned_chef, .. } => {
                if *assigned_chef != metadata.operator_name && !metadata.operator_role.is_supervisor()
                {
                    return Err(OrderError::ChefNotAssigned {
                        assigned: assigned_chef.clone(),
                        actual: metadata.operator_name.clone(),
                    });
                }
                assigned_chef.clone()
            }
            _ => metadata.operator_name.clone(),
        };

        Ok(single_event(
            ctx,
            metadata,
            &self.order_id,
            OrderEventType::PreparationStarted,
            EventPayload::PreparationStarted {
                chef,
                chef_type: self.chef_type,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{ORDER_ID, approval, catalog, metadata, order_in, store_with};
    use crate::orders::money::ChargeRates;
    use crate::orders::traits::CommandMetadata;
    use shared::Role;

    fn assigned_to(chef: &str) -> OrderState {
        OrderState::ChefAssigned {
            approval: approval(ChefType::Food),
            assigned_chef: chef.to_string(),
            assigned_at: 1_500,
        }
    }

    async fn start(
        state: OrderState,
        chef_type: ChefType,
        metadata: CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let store = store_with(order_in(state));
        let catalog = catalog();
        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());
        StartPreparationAction {
            order_id: ORDER_ID.to_string(),
            chef_type,
        }
        .execute(&mut ctx, &metadata)
        .await
    }

    #[tokio::test]
    async fn test_start_matching_station() {
        let events = start(
            OrderState::CashierApproved {
                approval: approval(ChefType::Food),
            },
            ChefType::Food,
            metadata(Role::Chef, "Chef Maria"),
        )
        .await
        .unwrap();
        assert!(matches!(
            &events[0].payload,
            EventPayload::PreparationStarted { chef, chef_type: ChefType::Food } if chef == "Chef Maria"
        ));
    }

    #[tokio::test]
    async fn test_start_wrong_station() {
        let result = start(
            OrderState::CashierApproved {
                approval: approval(ChefType::Food),
            },
            ChefType::Beverage,
            metadata(Role::Chef, "Chef Bruno"),
        )
        .await;
        assert_eq!(
            result.unwrap_err(),
            OrderError::ChefTypeMismatch {
                expected: ChefType::Food,
                actual: ChefType::Beverage,
            }
        );
    }

    #[tokio::test]
    async fn test_start_by_assigned_chef() {
        let events = start(
            assigned_to("Chef Roberto"),
            ChefType::Food,
            metadata(Role::Chef, "Chef Roberto"),
        )
        .await
        .unwrap();
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn test_start_by_other_chef() {
        let result = start(
            assigned_to("Chef Roberto"),
            ChefType::Food,
            metadata(Role::Chef, "Chef Maria"),
        )
        .await;
        assert_eq!(
            result.unwrap_err(),
            OrderError::ChefNotAssigned {
                assigned: "Chef Roberto".to_string(),
                actual: "Chef Maria".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_supervisor_starts_for_assigned_chef() {
        let events = start(
            assigned_to("Chef Roberto"),
            ChefType::Food,
            metadata(Role::Manager, "Maya Manager"),
        )
        .await
        .unwrap();
        assert!(matches!(
            &events[0].payload,
            EventPayload::PreparationStarted { chef, .. } if chef == "Chef Roberto"
        ));
    }

    #[tokio::test]
    async fn test_start_pending_order() {
        let result = start(
            OrderState::CashierPending { submitted_at: 1 },
            ChefType::Food,
            metadata(Role::Chef, "Chef Maria"),
        )
        .await;
        assert!(matches!(result, Err(OrderError::InvalidTransition { .. })));
    }
}
