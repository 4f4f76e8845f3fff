//! Notification API
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/notifications?role=&recipient= | GET | 角色通知和未读数 |
//! | /api/notifications/{id}/read | POST | 标记已读 |
//! | /api/notifications/read-all?role=&recipient= | POST | 全部标记已读 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/notifications", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/read-all", post(handler::mark_all_read))
        .route("/{id}/read", post(handler::mark_read))
}
