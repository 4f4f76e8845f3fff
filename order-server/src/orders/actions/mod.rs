//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use async_trait::async_trait;

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{
    EventPayload, OrderCommand, OrderCommandPayload, OrderEvent, OrderEventType, OrderSnapshot,
    WorkflowStatus,
};

mod acknowledge_ready;
mod approve_order;
mod assign_chef;
mod complete_preparation;
mod deliver_order;
mod place_order;
mod reject_order;
mod start_preparation;
mod submit_to_cashier;

pub use acknowledge_ready::AcknowledgeReadyAction;
pub use approve_order::ApproveOrderAction;
pub use assign_chef::AssignChefAction;
pub use complete_preparation::CompletePreparationAction;
pub use deliver_order::DeliverOrderAction;
pub use place_order::PlaceOrderAction;
pub use reject_order::RejectOrderAction;
pub use start_preparation::StartPreparationAction;
pub use submit_to_cashier::SubmitToCashierAction;

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    PlaceOrder(PlaceOrderAction),
    SubmitToCashier(SubmitToCashierAction),
    ApproveOrder(ApproveOrderAction),
    RejectOrder(RejectOrderAction),
    AssignChef(AssignChefAction),
    StartPreparation(StartPreparationAction),
    CompletePreparation(CompletePreparationAction),
    AcknowledgeReady(AcknowledgeReadyAction),
    DeliverOrder(DeliverOrderAction),
}

#[async_trait]
impl CommandHandler for CommandAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        match self {
            CommandAction::PlaceOrder(action) => action.execute(ctx, metadata).await,
            CommandAction::SubmitToCashier(action) => action.execute(ctx, metadata).await,
            CommandAction::ApproveOrder(action) => action.execute(ctx, metadata).await,
            CommandAction::RejectOrder(action) => action.execute(ctx, metadata).await,
            CommandAction::AssignChef(action) => action.execute(ctx, metadata).await,
            CommandAction::StartPreparation(action) => action.execute(ctx, metadata).await,
            CommandAction::CompletePreparation(action) => action.execute(ctx, metadata).await,
            CommandAction::AcknowledgeReady(action) => action.execute(ctx, metadata).await,
            CommandAction::DeliverOrder(action) => action.execute(ctx, metadata).await,
        }
    }
}

/// Convert OrderCommand to CommandAction
///
/// This is the ONLY place with a match on OrderCommandPayload.
impl From<&OrderCommand> for CommandAction {
    fn from(cmd: &OrderCommand) -> Self {
        match &cmd.payload {
            OrderCommandPayload::PlaceOrder {
                guest,
                location,
                items,
                special_requests,
                assigned_waiter,
            } => CommandAction::PlaceOrder(PlaceOrderAction {
                guest: guest.clone(),
                location: location.clone(),
                items: items.clone(),
                special_requests: special_requests.clone(),
                assigned_waiter: assigned_waiter.clone(),
            }),
            OrderCommandPayload::SubmitToCashier { order_id } => {
                CommandAction::SubmitToCashier(SubmitToCashierAction {
                    order_id: order_id.clone(),
                })
            }
            OrderCommandPayload::ApproveOrder { order_id } => {
                CommandAction::ApproveOrder(ApproveOrderAction {
                    order_id: order_id.clone(),
                })
            }
            OrderCommandPayload::RejectOrder { order_id, reason } => {
                CommandAction::RejectOrder(RejectOrderAction {
                    order_id: order_id.clone(),
                    reason: reason.clone(),
                })
            }
            OrderCommandPayload::AssignChef {
                order_id,
                chef_name,
            } => CommandAction::AssignChef(AssignChefAction {
                order_id: order_id.clone(),
                chef_name: chef_name.clone(),
            }),
            OrderCommandPayload::StartPreparation {
                order_id,
                chef_type,
            } => CommandAction::StartPreparation(StartPreparationAction {
                order_id: order_id.clone(),
                chef_type: *chef_type,
            }),
            OrderCommandPayload::CompletePreparation { order_id } => {
                CommandAction::CompletePreparation(CompletePreparationAction {
                    order_id: order_id.clone(),
                })
            }
            OrderCommandPayload::AcknowledgeReady { order_id } => {
                CommandAction::AcknowledgeReady(AcknowledgeReadyAction {
                    order_id: order_id.clone(),
                })
            }
            OrderCommandPayload::DeliverOrder { order_id } => {
                CommandAction::DeliverOrder(DeliverOrderAction {
                    order_id: order_id.clone(),
                })
            }
        }
    }
}

/// Fail unless the order is in one of `allowed`
pub(crate) fn require_status(
    snapshot: &OrderSnapshot,
    allowed: &[WorkflowStatus],
    action: &'static str,
) -> Result<(), OrderError> {
    let from = snapshot.workflow_status();
    if allowed.contains(&from) {
        Ok(())
    } else {
        Err(OrderError::InvalidTransition {
            order_id: snapshot.order_id.clone(),
            from,
            action,
        })
    }
}

/// Build the single event most actions emit
pub(crate) fn single_event(
    ctx: &mut CommandContext<'_>,
    metadata: &CommandMetadata,
    order_id: &str,
    event_type: OrderEventType,
    payload: EventPayload,
) -> Vec<OrderEvent> {
    let seq = ctx.next_sequence();
    vec![OrderEvent::new(
        seq,
        order_id.to_string(),
        metadata.operator_id.clone(),
        metadata.operator_name.clone(),
        metadata.command_id.clone(),
        Some(metadata.timestamp),
        event_type,
        payload,
    )]
}
