use super::super::traits::OrderError;
use shared::order::{CommandError, CommandErrorCode, WorkflowStatus};
use thiserror::Error;

use crate::utils::AppError;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order already delivered: {0}")]
    OrderAlreadyDelivered(String),

    #[error("Order cancelled: {0}")]
    OrderCancelled(String),

    #[error("{0}")]
    InvalidTransition(String),

    #[error("{0}")]
    ChefTypeMismatch(String),

    #[error("{0}")]
    ChefNotAssigned(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Menu item unavailable: {0}")]
    MenuItemUnavailable(String),

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Order already exists: {0}")]
    DuplicateOrder(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ManagerError {
    pub fn code(&self) -> CommandErrorCode {
        match self {
            ManagerError::OrderNotFound(_) => CommandErrorCode::OrderNotFound,
            ManagerError::OrderAlreadyDelivered(_) => CommandErrorCode::OrderAlreadyDelivered,
            ManagerError::OrderCancelled(_) => CommandErrorCode::OrderCancelled,
            ManagerError::InvalidTransition(_) => CommandErrorCode::InvalidTransition,
            ManagerError::ChefTypeMismatch(_) => CommandErrorCode::ChefTypeMismatch,
            ManagerError::ChefNotAssigned(_) => CommandErrorCode::ChefNotAssigned,
            ManagerError::PermissionDenied(_) => CommandErrorCode::PermissionDenied,
            ManagerError::MenuItemNotFound(_) => CommandErrorCode::MenuItemNotFound,
            ManagerError::MenuItemUnavailable(_) => CommandErrorCode::MenuItemUnavailable,
            ManagerError::EmptyOrder => CommandErrorCode::OrderEmpty,
            ManagerError::DuplicateOrder(_) => CommandErrorCode::DuplicateOrder,
            ManagerError::Validation(_) => CommandErrorCode::ValidationFailed,
            ManagerError::Internal(_) => CommandErrorCode::InternalError,
        }
    }
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        let code = err.code();
        if let ManagerError::Internal(msg) = &err {
            tracing::error!(error = %msg, "Internal error while processing command");
        }
        CommandError::new(code, err.to_string())
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        AppError::with_message(err.code().error_code(), err.to_string())
    }
}

impl From<OrderError> for ManagerError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::OrderNotFound(id) => ManagerError::OrderNotFound(id),
            // Terminal states have dedicated codes
            OrderError::InvalidTransition {
                order_id,
                from: WorkflowStatus::Delivered,
                ..
            } => ManagerError::OrderAlreadyDelivered(order_id),
            OrderError::InvalidTransition {
                order_id,
                from: WorkflowStatus::Cancelled,
                ..
            } => ManagerError::OrderCancelled(order_id),
            e @ OrderError::InvalidTransition { .. } => ManagerError::InvalidTransition(e.to_string()),
            e @ OrderError::ChefTypeMismatch { .. } => ManagerError::ChefTypeMismatch(e.to_string()),
            e @ OrderError::ChefNotAssigned { .. } => ManagerError::ChefNotAssigned(e.to_string()),
            e @ OrderError::PermissionDenied { .. } => ManagerError::PermissionDenied(e.to_string()),
            OrderError::MenuItemNotFound(id) => ManagerError::MenuItemNotFound(id),
            OrderError::MenuItemUnavailable(name) => ManagerError::MenuItemUnavailable(name),
            OrderError::EmptyOrder => ManagerError::EmptyOrder,
            OrderError::Validation(msg) => ManagerError::Validation(msg),
            OrderError::Internal(msg) => ManagerError::Internal(msg),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
