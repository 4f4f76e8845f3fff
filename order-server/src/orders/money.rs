//! Money calculation utilities using rust_decimal for precision
//!
//! Subtotal, tax and service charge are each rounded to cents (half-up) and the
//! total is the sum of the rounded parts, so the receipt always adds up.

use rust_decimal::prelude::*;
use shared::order::{OrderItem, OrderTotals};
use shared::util::minutes_to_millis;

use crate::orders::traits::OrderError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: u32 = 99;

/// Minutes added on top of the longest preparation time for delivery
pub const DELIVERY_BUFFER_MINUTES: u32 = 10;

/// Tax and service charge rates applied to the subtotal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeRates {
    pub tax_rate: Decimal,
    pub service_charge_rate: Decimal,
}

impl Default for ChargeRates {
    fn default() -> Self {
        Self {
            // 10%
            tax_rate: Decimal::new(10, 2),
            // 12.5%
            service_charge_rate: Decimal::new(125, 3),
        }
    }
}

/// Round to cents, half away from zero
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate a line quantity
pub fn validate_quantity(quantity: u32) -> Result<(), OrderError> {
    if quantity == 0 {
        return Err(OrderError::Validation(
            "quantity must be positive, got 0".to_string(),
        ));
    }
    if quantity > MAX_QUANTITY {
        return Err(OrderError::Validation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(())
}

/// Compute the totals of a list of order lines
pub fn calculate_totals(items: &[OrderItem], rates: &ChargeRates) -> OrderTotals {
    let subtotal = round_money(items.iter().map(OrderItem::line_total).sum());
    let tax = round_money(subtotal * rates.tax_rate);
    let service_charge = round_money(subtotal * rates.service_charge_rate);
    OrderTotals {
        subtotal,
        tax,
        service_charge,
        total: subtotal + tax + service_charge,
    }
}

/// Estimated delivery time for an order taken at `order_time`
pub fn estimated_delivery(order_time: i64, max_preparation_minutes: u32) -> i64 {
    order_time + minutes_to_millis(max_preparation_minutes + DELIVERY_BUFFER_MINUTES)
}
