//! 工作流心跳
//!
//! 周期性记录各角色队列深度，并对超出最长备餐时间仍在制作的订单发出警告。
//! 只读，不改变任何订单状态。

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use shared::ChefType;
use shared::order::WorkflowStatus;
use tokio_util::sync::CancellationToken;

use super::manager::OrdersManager;

/// Prep-overdue order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueOrder {
    pub order_id: String,
    pub order_number: String,
    pub chef: String,
    /// Minutes past the preparation deadline
    pub overdue_minutes: i64,
}

/// One heartbeat worth of queue depths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeartbeatReport {
    pub drafts: usize,
    pub cashier_pending: usize,
    /// Waiting for a chef, per station
    pub kitchen_pending: Vec<(ChefType, usize)>,
    pub preparing: usize,
    pub ready: usize,
    pub overdue: Vec<OverdueOrder>,
}

impl HeartbeatReport {
    /// Build the report at `now` (Unix millis)
    pub fn collect(manager: &OrdersManager, now: i64) -> Self {
        let orders = manager.list_orders();
        let count = |status: WorkflowStatus| {
            orders
                .iter()
                .filter(|o| o.workflow_status() == status)
                .count()
        };

        let kitchen_pending = ChefType::ALL
            .into_iter()
            .map(|chef_type| {
                let waiting = orders
                    .iter()
                    .filter(|o| {
                        o.chef_type() == Some(chef_type)
                            && matches!(
                                o.workflow_status(),
                                WorkflowStatus::CashierApproved | WorkflowStatus::ChefAssigned
                            )
                    })
                    .count();
                (chef_type, waiting)
            })
            .collect();

        let overdue = orders
            .iter()
            .filter_map(|o| {
                let deadline = o.preparation_deadline()?;
                if now <= deadline {
                    return None;
                }
                Some(OverdueOrder {
                    order_id: o.order_id.clone(),
                    order_number: o.order_number.clone(),
                    chef: o.state.preparation()?.chef.clone(),
                    overdue_minutes: (now - deadline) / 60_000,
                })
            })
            .collect();

        Self {
            drafts: count(WorkflowStatus::WaiterCreated),
            cashier_pending: count(WorkflowStatus::CashierPending),
            kitchen_pending,
            preparing: count(WorkflowStatus::ChefPreparing),
            ready: count(WorkflowStatus::ChefCompleted) + count(WorkflowStatus::WaiterNotified),
            overdue,
        }
    }
}

/// 心跳任务
///
/// 注册为 `TaskKind::Periodic`，在 `start_background_tasks()` 中启动。
pub struct Heartbeat {
    orders: Arc<OrdersManager>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl Heartbeat {
    pub fn new(orders: Arc<OrdersManager>, interval: Duration, shutdown: CancellationToken) -> Self {
        Self {
            orders,
            interval,
            shutdown,
        }
    }

    /// 主循环
    pub async fn run(self) {
        tracing::info!(interval_secs = self.interval.as_secs(), "Heartbeat started");

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.beat(),
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Heartbeat received shutdown signal");
                    break;
                }
            }
        }

        tracing::info!("Heartbeat stopped");
    }

    fn beat(&self) {
        let report = HeartbeatReport::collect(&self.orders, shared::util::now_millis());

        tracing::info!(
            drafts = report.drafts,
            cashier_pending = report.cashier_pending,
            kitchen_pending = ?report.kitchen_pending,
            preparing = report.preparing,
            ready = report.ready,
            "Workflow heartbeat"
        );

        for order in &report.overdue {
            tracing::warn!(
                order_id = %order.order_id,
                order_number = %order.order_number,
                chef = %order.chef,
                overdue_minutes = order.overdue_minutes,
                "Preparation overdue"
            );
        }
    }
}
