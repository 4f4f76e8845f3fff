//! 统一错误处理
//!
//! 错误类型定义在 `shared::error`，这里重新导出并提供响应辅助函数。
//!
//! # 错误码规范
//!
//! | 范围 | 分类 | 示例 |
//! |------|------|------|
//! | 0xxx | 通用错误 | 2 校验失败 |
//! | 2xxx | 权限错误 | 2001 无权限 |
//! | 4xxx | 订单错误 | 4011 厨师类型不匹配 |
//! | 6xxx | 菜单错误 | 6001 菜品不存在 |
//! | 7xxx | 通知错误 | 7001 通知不存在 |
//! | 9xxx | 系统错误 | 9001 内部错误 |
//!
//! ```ignore
//! Err(AppError::not_found("Order ORD-404"))
//!
//! Ok(ok(snapshot))
//! ```

use axum::Json;
use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};

/// 成功响应
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

/// 带消息的成功响应
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success_with_message(message, data))
}
