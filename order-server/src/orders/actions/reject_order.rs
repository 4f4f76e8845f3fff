//! RejectOrder command handler
//!
//! Cancels an order before the kitchen starts on it. A paid order is refunded.

use async_trait::async_trait;

use super::{require_status, single_event};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderEventType, PaymentStatus, WorkflowStatus};

/// RejectOrder action
#[derive(Debug, Clone)]
pub struct RejectOrderAction {
    pub order_id: String,
    pub reason: Option<String>,
}

#[async_trait]
impl CommandHandler for RejectOrderAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.load_snapshot(&self.order_id)?;
        require_status(
            &snapshot,
            &[WorkflowStatus::CashierPending, WorkflowStatus::CashierApproved],
            "reject",
        )?;

        let refunded = snapshot.payment_status == PaymentStatus::Paid;

        Ok(single_event(
            ctx,
            metadata,
            &self.order_id,
            OrderEventType::OrderRejected,
            EventPayload::OrderRejected {
                rejected_by: metadata.operator_name.clone(),
                reason: self.reason.clone().filter(|r| !r.trim().is_empty()),
                refunded,
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

    async fn reject(state: OrderState) -> Result<Vec<OrderEvent>, OrderError> {
        let store = store_with(order_in(state));
        let catalog = catalog();
        let mut ctx = CommandContext::new(&store, &catalog, ChargeRates::default());
        RejectOrderAction {
            order_id: ORDER_ID.to_string(),
            reason: Some("Card declined".to_string()),
        }
        .execute(&mut ctx, &metadata(Role::Cashier, "John Cashier"))
        .await
    }

    #[tokio::test]
    async fn test_reject_pending_order() {
        let events = reject(OrderState::CashierPending { submitted_at: 1 })
            .await
            .unwrap();
        if let EventPayload::OrderRejected {
            rejected_by,
            reason,
            refunded,
        } = &events[0].payload
        {
            assert_eq!(rejected_by, "John Cashier");
            assert_eq!(reason.as_deref(), Some("Card declined"));
            assert!(!refunded);
        } else {
            panic!("Expected OrderRejected payload");
        }
    }

    #[tokio::test]
    async fn test_reject_approved_order_refunds() {
        let events = reject(OrderState::CashierApproved {
            approval: approval(ChefType::Food),
        })
        .await
        .unwrap();
        assert!(matches!(
            events[0].payload,
            EventPayload::OrderRejected { refunded: true, .. }
        ));
    }

    #[tokio::test]
    async fn test_reject_after_kitchen_started_fails() {
        let result = reject(OrderState::ChefPreparing {
            approval: approval(ChefType::Food),
            preparation: preparation("Chef Maria"),
        })
        .await;
        assert!(matches!(
            result,
            Err(OrderError::InvalidTransition {
                from: WorkflowStatus::ChefPreparing,
                action: "reject",
                ..
            })
        ));
    }
}
