//! PlaceOrder command handler
//!
//! Resolves the requested lines against the menu, prices them and opens a new
//! order in `waiter-created`.

use async_trait::async_trait;
use tracing::info;

use crate::orders::money::{calculate_totals, validate_quantity};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{
    EventPayload, GuestInfo, OrderEvent, OrderEventType, OrderItem, OrderItemInput, OrderLocation,
};
use shared::util::new_id;

/// PlaceOrder action
#[derive(Debug, Clone)]
pub struct PlaceOrderAction {
    pub guest: GuestInfo,
    pub location: OrderLocation,
    pub items: Vec<OrderItemInput>,
    pub special_requests: Option<String>,
    pub assigned_waiter: Option<String>,
}

impl PlaceOrderAction {
    fn validate_header(&self) -> Result<(), OrderError> {
        if self.guest.name.trim().is_empty() {
            return Err(OrderError::Validation("guest name is required".to_string()));
        }
        match &self.location {
            OrderLocation::Room { room_number } if room_number.trim().is_empty() => Err(
                OrderError::Validation("room number is required for room service".to_string()),
            ),
            OrderLocation::Table { table_number } if table_number.trim().is_empty() => Err(
                OrderError::Validation("table number is required for restaurant orders".to_string()),
            ),
            _ => Ok(()),
        }
    }

    fn resolve_items(&self, ctx: &CommandContext<'_>) -> Result<Vec<OrderItem>, OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        self.items
            .iter()
            .map(|input| {
                validate_quantity(input.quantity)?;
                let menu_item = ctx
                    .catalog()
                    .get(&input.menu_item_id)
                    .ok_or_else(|| OrderError::MenuItemNotFound(input.menu_item_id.clone()))?;
                if !menu_item.available {
                    return Err(OrderError::MenuItemUnavailable(menu_item.name.clone()));
                }
                Ok(OrderItem {
                    menu_item: menu_item.clone(),
                    quantity: input.quantity,
                    special_instructions: input
                        .special_instructions
                        .clone()
                        .filter(|s| !s.trim().is_empty()),
                })
            })
            .collect()
    }
}

#[async_trait]
impl CommandHandler for PlaceOrderAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        // 1. Validate guest, location and lines
        self.validate_header()?;
        let items = self.resolve_items(ctx)?;

        // 2. Price the order
        let totals = calculate_totals(&items, ctx.rates());

        // 3. Allocate identity
        let order_id = new_id();
        let order_number = ctx.next_order_number();
        let assigned_waiter = self
            .assigned_waiter
            .clone()
            .filter(|w| !w.trim().is_empty())
            .unwrap_or_else(|| metadata.operator_name.clone());

        info!(
            order_id = %order_id,
            order_number = %order_number,
            lines = items.len(),
            total = %totals.total,
            "Placing new order"
        );

        let seq = ctx.next_sequence();
        let event = OrderEvent::new(
            seq,
            order_id,
            metadata.operator_id.clone(),
            metadata.operator_name.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            OrderEventType::OrderPlaced,
            EventPayload::OrderPlaced {
                order_number,
                guest: self.guest.clone(),
                location: self.location.clone(),
                items,
                totals,
                special_requests: self.special_requests.clone().filter(|s| !s.trim().is_empty()),
                assigned_waiter,
            },
        );

        Ok(vec![event])
    }
}
