//! Shared types for the order workflow

use crate::models::{ChefType, MenuItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Location
// ============================================================================

/// Where the order is served
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OrderLocation {
    /// Room service
    Room { room_number: String },
    /// Restaurant table
    Table { table_number: String },
    /// Picked up by the guest
    Takeaway,
}

impl OrderLocation {
    pub fn describe(&self) -> String {
        match self {
            OrderLocation::Room { room_number } => format!("Room {room_number}"),
            OrderLocation::Table { table_number } => table_number.clone(),
            OrderLocation::Takeaway => "Takeaway".to_string(),
        }
    }
}

/// Guest identity captured by the waiter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GuestInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// ============================================================================
// Status projections
// ============================================================================

/// Payment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

/// Guest-facing order status, derived from the workflow state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

// ============================================================================
// Order Items
// ============================================================================

/// Order line as requested by the waiter (references the menu by id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Order line with its menu item snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.menu_item.price * Decimal::from(self.quantity)
    }
}

/// Route a list of items to a kitchen queue
pub fn determine_chef_type(items: &[OrderItem]) -> ChefType {
    ChefType::classify(items.iter().map(|item| item.menu_item.category))
}

/// Monetary totals of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub service_charge: Decimal,
    pub total: Decimal,
}

// ============================================================================
// Command Response
// ============================================================================

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// New order ID (only for PlaceOrder)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, order_id: Option<String>) -> Self {
        Self {
            command_id,
            success: true,
            order_id,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            order_id: None,
            error: Some(error),
        }
    }

    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            order_id: None,
            error: None,
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    OrderNotFound,
    OrderAlreadyDelivered,
    OrderCancelled,
    OrderEmpty,
    DuplicateOrder,
    InvalidTransition,
    ChefTypeMismatch,
    ChefNotAssigned,
    PermissionDenied,
    MenuItemNotFound,
    MenuItemUnavailable,
    ValidationFailed,
    InternalError,
}

impl CommandErrorCode {
    /// Map onto the unified error code space
    pub fn error_code(&self) -> crate::error::ErrorCode {
        use crate::error::ErrorCode;
        match self {
            CommandErrorCode::OrderNotFound => ErrorCode::OrderNotFound,
            CommandErrorCode::OrderAlreadyDelivered => ErrorCode::OrderAlreadyDelivered,
            CommandErrorCode::OrderCancelled => ErrorCode::OrderCancelled,
            CommandErrorCode::OrderEmpty => ErrorCode::OrderEmpty,
            CommandErrorCode::DuplicateOrder => ErrorCode::DuplicateOrder,
            CommandErrorCode::InvalidTransition => ErrorCode::InvalidTransition,
            CommandErrorCode::ChefTypeMismatch => ErrorCode::ChefTypeMismatch,
            CommandErrorCode::ChefNotAssigned => ErrorCode::ChefNotAssigned,
            CommandErrorCode::PermissionDenied => ErrorCode::PermissionDenied,
            CommandErrorCode::MenuItemNotFound => ErrorCode::MenuItemNotFound,
            CommandErrorCode::MenuItemUnavailable => ErrorCode::MenuItemUnavailable,
            CommandErrorCode::ValidationFailed => ErrorCode::ValidationFailed,
            CommandErrorCode::InternalError => ErrorCode::InternalError,
        }
    }
}
