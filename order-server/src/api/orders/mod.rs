//! Order API Module
//!
//! Snapshots and event history are read-only. Every mutation is an
//! `OrderCommand` posted to `/api/orders/commands` and executed by the
//! OrdersManager.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/commands", post(handler::execute_command))
        .route("/events", get(handler::events_since))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/events", get(handler::events_for_order))
}
