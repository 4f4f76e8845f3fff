//! Work queue API
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/queues/cashier | GET | 待收银批准 |
//! | /api/queues/chef/{chef_type} | GET | 厨房工位队列 |
//! | /api/queues/waiter/{waiter} | GET | 服务员待取、制作中、已送达 |
//! | /api/stats/kitchen/{chef_type} | GET | 厨房统计 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/queues/cashier", get(handler::cashier))
        .route("/api/queues/chef/{chef_type}", get(handler::chef))
        .route("/api/queues/waiter/{waiter}", get(handler::waiter))
        .route("/api/stats/kitchen/{chef_type}", get(handler::kitchen_stats))
}
