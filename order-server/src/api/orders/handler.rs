//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::ApiResponse;
use shared::order::{CommandResponse, OrderCommand, OrderEvent, OrderSnapshot, WorkflowStatus};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ok};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Workflow status, e.g. `cashier-pending`
    pub status: Option<String>,
}

/// List orders, oldest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<OrderSnapshot>>>> {
    let orders = match query.status.as_deref() {
        Some(raw) => {
            let status: WorkflowStatus = raw.parse().map_err(AppError::validation)?;
            state.orders.orders_by_status(status)
        }
        None => state.orders.list_orders(),
    };
    Ok(ok(orders))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderSnapshot>>> {
    let order = state.orders.get_order(&id).ok_or_else(|| {
        AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
    })?;
    Ok(ok(order))
}

/// Event history of one order
pub async fn events_for_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<OrderEvent>>>> {
    let events = state.orders.get_events_for_order(&id)?;
    Ok(ok(events))
}

#[derive(Debug, Deserialize)]
pub struct SinceQuery {
    #[serde(default)]
    pub since: u64,
}

/// Events after a sequence number (reconnect catch-up)
pub async fn events_since(
    State(state): State<ServerState>,
    Query(query): Query<SinceQuery>,
) -> AppResult<Json<ApiResponse<Vec<OrderEvent>>>> {
    Ok(ok(state.orders.get_events_since(query.since)))
}

/// Execute an order command
///
/// The body is always a `CommandResponse`; the status code follows its error.
pub async fn execute_command(
    State(state): State<ServerState>,
    Json(cmd): Json<OrderCommand>,
) -> (StatusCode, Json<CommandResponse>) {
    let response = state.orders.execute_command(cmd);
    let status = response
        .error
        .as_ref()
        .map_or(StatusCode::OK, |err| err.code.error_code().http_status());
    (status, Json(response))
}
