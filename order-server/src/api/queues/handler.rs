//! Work queue handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::order::OrderSnapshot;
use shared::{ApiResponse, ChefType};

use crate::core::ServerState;
use crate::orders::{KitchenStats, WaiterStats};
use crate::utils::{AppError, AppResult, ok};

fn parse_chef_type(raw: &str) -> Result<ChefType, AppError> {
    raw.parse().map_err(AppError::validation)
}

/// Cashier dashboard
#[derive(Debug, Serialize)]
pub struct CashierQueue {
    pub pending: Vec<OrderSnapshot>,
    pub approved: Vec<OrderSnapshot>,
}

pub async fn cashier(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<CashierQueue>>> {
    Ok(ok(CashierQueue {
        pending: state.orders.cashier_queue(),
        approved: state.orders.approved_orders(),
    }))
}

pub async fn chef(
    State(state): State<ServerState>,
    Path(chef_type): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<OrderSnapshot>>>> {
    let chef_type = parse_chef_type(&chef_type)?;
    Ok(ok(state.orders.chef_queue(chef_type)))
}

/// Waiter dashboard
#[derive(Debug, Serialize)]
pub struct WaiterQueue {
    pub ready: Vec<OrderSnapshot>,
    pub in_preparation: Vec<OrderSnapshot>,
    pub delivered: Vec<OrderSnapshot>,
    pub stats: WaiterStats,
}

pub async fn waiter(
    State(state): State<ServerState>,
    Path(waiter): Path<String>,
) -> AppResult<Json<ApiResponse<WaiterQueue>>> {
    let orders = &state.orders;
    Ok(ok(WaiterQueue {
        ready: orders.ready_for_delivery(&waiter),
        in_preparation: orders.in_preparation(&waiter),
        delivered: orders.delivered(&waiter),
        stats: orders.waiter_stats(&waiter),
    }))
}

pub async fn kitchen_stats(
    State(state): State<ServerState>,
    Path(chef_type): Path<String>,
) -> AppResult<Json<ApiResponse<KitchenStats>>> {
    let chef_type = parse_chef_type(&chef_type)?;
    Ok(ok(state.orders.kitchen_stats(chef_type)))
}
