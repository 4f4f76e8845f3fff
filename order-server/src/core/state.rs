use std::sync::Arc;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::catalog::MenuCatalog;
use crate::core::{BackgroundTasks, Config, Result, TaskKind};
use crate::notifications::NotificationFeed;
use crate::orders::{Heartbeat, OrdersManager};
use crate::seed;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是 `Arc` 或可廉价克隆的值，axum 每个请求克隆一次。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 启动时的配置 |
/// | catalog | 菜单 (只读) |
/// | orders | 订单管理器 (命令处理、查询、事件广播) |
/// | notifications | 角色通知 |
/// | started_at | 启动时间 (Unix millis) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<MenuCatalog>,
    pub orders: Arc<OrdersManager>,
    pub notifications: Arc<NotificationFeed>,
    pub started_at: i64,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 载入菜单
    /// 2. 创建通知和订单管理器
    /// 3. 按配置写入演示订单
    pub fn initialize(config: &Config) -> Result<Self> {
        let catalog = Arc::new(MenuCatalog::new(seed::demo_menu()));
        let notifications = Arc::new(NotificationFeed::new());
        let orders = Arc::new(OrdersManager::new(
            catalog.clone(),
            config.charge_rates(),
            notifications.clone(),
        ));

        if config.seed_demo_data {
            seed::seed_demo_orders(&orders)?;
        }

        tracing::info!(
            menu_items = catalog.len(),
            orders = orders.list_orders().len(),
            "Server state initialized"
        );

        Ok(Self {
            config: config.clone(),
            catalog,
            orders,
            notifications,
            started_at: shared::util::now_millis(),
        })
    }

    /// 启动后台任务
    ///
    /// - 事件日志 (Listener)
    /// - 工作流心跳 (Periodic)
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();
        let token = tasks.shutdown_token();

        tasks.spawn(
            "event_logger",
            TaskKind::Listener,
            log_events(self.orders.subscribe(), token.clone()),
        );

        let heartbeat = Heartbeat::new(
            self.orders.clone(),
            self.config.heartbeat_interval(),
            token,
        );
        tasks.spawn("workflow_heartbeat", TaskKind::Periodic, heartbeat.run());

        tasks.log_summary();
        tasks
    }

    /// 运行时长 (秒)
    pub fn uptime_secs(&self) -> i64 {
        (shared::util::now_millis() - self.started_at) / 1000
    }
}

/// 订单事件审计日志
async fn log_events(
    mut rx: broadcast::Receiver<shared::order::OrderEvent>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(event) => {
                    tracing::debug!(
                        sequence = event.sequence,
                        order_id = %event.order_id,
                        event_type = %event.event_type,
                        operator = %event.operator_name,
                        "Order event"
                    );
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event logger lagged behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            _ = shutdown.cancelled() => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_with_seed() {
        let config = Config::with_overrides(0, true);
        let state = ServerState::initialize(&config).unwrap();
        assert_eq!(state.catalog.len(), 11);
        assert_eq!(state.orders.list_orders().len(), 3);
        assert!(!state.notifications.is_empty());
    }

    #[test]
    fn test_initialize_without_seed() {
        let config = Config::with_overrides(0, false);
        let state = ServerState::initialize(&config).unwrap();
        assert!(state.orders.list_orders().is_empty());
        assert!(state.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_background_tasks_start_and_stop() {
        let config = Config::with_overrides(0, false);
        let state = ServerState::initialize(&config).unwrap();

        let tasks = state.start_background_tasks();
        assert_eq!(tasks.len(), 2);
        tasks.shutdown().await;
    }
}
