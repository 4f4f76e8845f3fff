use thiserror::Error;

use crate::orders::manager::ManagerError;
use crate::utils::AppError;

/// 启动与运行阶段的服务器错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] AppError),

    #[error("网络错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("演示数据载入失败: {0}")]
    Seed(#[from] ManagerError),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
