//! Hotel order workflow server
//!
//! # 架构概述
//!
//! A waiter places an order, a cashier approves it, a chef of the matching
//! station cooks it and a waiter delivers it. Every step is an
//! [`OrderCommand`](shared::order::OrderCommand) executed by the single
//! [`OrdersManager`], which turns it into events, applies them to the order
//! snapshot and posts notifications for the next role.
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/           # 配置、状态、服务器、后台任务
//! ├── api/            # HTTP 路由和处理器
//! ├── orders/         # 命令 → 事件 → 快照 工作流
//! ├── notifications/  # 角色通知
//! ├── catalog.rs      # 菜单
//! ├── seed.rs         # 演示数据
//! └── utils/          # 日志、错误
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod notifications;
pub mod orders;
pub mod seed;
pub mod utils;

// Re-export 公共类型
pub use catalog::MenuCatalog;
pub use core::{Config, Server, ServerState};
pub use notifications::NotificationFeed;
pub use orders::OrdersManager;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
///
/// Returns the configuration so `main` does not read the environment twice.
pub fn setup_environment() -> Result<Config, AppError> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    config.validate()?;

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    __  __      __       __   ____           __
   / / / /___  / /____  / /  / __ \_________/ /__  __________
  / /_/ / __ \/ __/ _ \/ /  / / / / ___/ __  / _ \/ ___/ ___/
 / __  / /_/ / /_/  __/ /  / /_/ / /  / /_/ /  __/ /  (__  )
/_/ /_/\____/\__/\___/_/   \____/_/   \__,_/\___/_/  /____/
        v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
