//! Notification handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::{ApiResponse, Notification, Role};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ok};

/// Whose notifications
#[derive(Debug, Deserialize)]
pub struct RecipientQuery {
    pub role: String,
    /// Operator name; omitted means the whole role
    pub recipient: Option<String>,
}

impl RecipientQuery {
    fn role(&self) -> Result<Role, AppError> {
        self.role.parse().map_err(AppError::validation)
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationList {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

/// Notifications for a role, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RecipientQuery>,
) -> AppResult<Json<ApiResponse<NotificationList>>> {
    let role = query.role()?;
    let recipient = query.recipient.as_deref();
    Ok(ok(NotificationList {
        notifications: state.notifications.for_role(role, recipient),
        unread_count: state.notifications.unread_count(role, recipient),
    }))
}

pub async fn mark_read(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<String>>> {
    state.notifications.mark_read(&id)?;
    Ok(ok(id))
}

#[derive(Debug, Serialize)]
pub struct MarkedRead {
    pub marked: usize,
}

pub async fn mark_all_read(
    State(state): State<ServerState>,
    Query(query): Query<RecipientQuery>,
) -> AppResult<Json<ApiResponse<MarkedRead>>> {
    let role = query.role()?;
    let marked = state
        .notifications
        .mark_all_read(role, query.recipient.as_deref());
    tracing::debug!(role = %role, marked, "Notifications marked read");
    Ok(ok(MarkedRead { marked }))
}
