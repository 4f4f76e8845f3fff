//! Workflow state of an order
//!
//! The workflow position and the data gathered along the way are one sum
//! type. Each variant carries exactly the records that exist at that point
//! (an order cannot be "preparing" without an approval and a chef), and the
//! guest-facing status is projected from it instead of being stored twice.
//!
//! ```text
//! waiter-created → cashier-pending → cashier-approved → chef-assigned
//!                        │                  │  │             │
//!                        └──→ cancelled ←───┘  └──→ chef-preparing ←┘
//!                                                         │
//!                   delivered ← waiter-notified ← chef-completed
//!                       ↑                                 │
//!                       └─────────────────────────────────┘
//! ```

use super::types::FulfillmentStatus;
use crate::models::ChefType;
use serde::{Deserialize, Serialize};

/// Flat workflow status (discriminant of [`OrderState`])
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStatus {
    WaiterCreated,
    CashierPending,
    CashierApproved,
    ChefAssigned,
    ChefPreparing,
    ChefCompleted,
    WaiterNotified,
    Delivered,
    Cancelled,
}

impl WorkflowStatus {
    pub const ALL: [WorkflowStatus; 9] = [
        WorkflowStatus::WaiterCreated,
        WorkflowStatus::CashierPending,
        WorkflowStatus::CashierApproved,
        WorkflowStatus::ChefAssigned,
        WorkflowStatus::ChefPreparing,
        WorkflowStatus::ChefCompleted,
        WorkflowStatus::WaiterNotified,
        WorkflowStatus::Delivered,
        WorkflowStatus::Cancelled,
    ];

    /// Position along the workflow. Every legal transition strictly increases it.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Legal next states
    pub fn successors(&self) -> &'static [WorkflowStatus] {
        use WorkflowStatus::*;
        match self {
            WaiterCreated => &[CashierPending],
            CashierPending => &[CashierApproved, Cancelled],
            CashierApproved => &[ChefAssigned, ChefPreparing, Cancelled],
            ChefAssigned => &[ChefPreparing],
            ChefPreparing => &[ChefCompleted],
            ChefCompleted => &[WaiterNotified, Delivered],
            WaiterNotified => &[Delivered],
            Delivered | Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: WorkflowStatus) -> bool {
        self.successors().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::WaiterCreated => "waiter-created",
            WorkflowStatus::CashierPending => "cashier-pending",
            WorkflowStatus::CashierApproved => "cashier-approved",
            WorkflowStatus::ChefAssigned => "chef-assigned",
            WorkflowStatus::ChefPreparing => "chef-preparing",
            WorkflowStatus::ChefCompleted => "chef-completed",
            WorkflowStatus::WaiterNotified => "waiter-notified",
            WorkflowStatus::Delivered => "delivered",
            WorkflowStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkflowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkflowStatus::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| format!("unknown workflow status: {s}"))
    }
}

/// Cashier approval record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Approval {
    pub approved_by: String,
    pub approved_at: i64,
    /// Kitchen queue chosen at approval time
    pub chef_type: ChefType,
}

/// Kitchen preparation record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preparation {
    pub chef: String,
    pub started_at: i64,
}

/// Workflow state of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum OrderState {
    #[default]
    WaiterCreated,
    CashierPending {
        submitted_at: i64,
    },
    CashierApproved {
        approval: Approval,
    },
    ChefAssigned {
        approval: Approval,
        assigned_chef: String,
        assigned_at: i64,
    },
    ChefPreparing {
        approval: Approval,
        preparation: Preparation,
    },
    ChefCompleted {
        approval: Approval,
        preparation: Preparation,
        completed_at: i64,
    },
    WaiterNotified {
        approval: Approval,
        preparation: Preparation,
        completed_at: i64,
        notified_at: i64,
    },
    Delivered {
        approval: Approval,
        preparation: Preparation,
        completed_at: i64,
        delivered_by: String,
        delivered_at: i64,
    },
    Cancelled {
        cancelled_by: String,
        cancelled_at: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        /// Status the order was rejected from
        previous: WorkflowStatus,
    },
}

impl OrderState {
    pub fn status(&self) -> WorkflowStatus {
        match self {
            OrderState::WaiterCreated => WorkflowStatus::WaiterCreated,
            OrderState::CashierPending { .. } => WorkflowStatus::CashierPending,
            OrderState::CashierApproved { .. } => WorkflowStatus::CashierApproved,
            OrderState::ChefAssigned { .. } => WorkflowStatus::ChefAssigned,
            OrderState::ChefPreparing { .. } => WorkflowStatus::ChefPreparing,
            OrderState::ChefCompleted { .. } => WorkflowStatus::ChefCompleted,
            OrderState::WaiterNotified { .. } => WorkflowStatus::WaiterNotified,
            OrderState::Delivered { .. } => WorkflowStatus::Delivered,
            OrderState::Cancelled { .. } => WorkflowStatus::Cancelled,
        }
    }

    /// Guest-facing status
    pub fn fulfillment(&self) -> FulfillmentStatus {
        match self {
            OrderState::WaiterCreated | OrderState::CashierPending { .. } => {
                FulfillmentStatus::Pending
            }
            OrderState::CashierApproved { .. } | OrderState::ChefAssigned { .. } => {
                FulfillmentStatus::Confirmed
            }
            OrderState::ChefPreparing { .. } => FulfillmentStatus::Preparing,
            OrderState::ChefCompleted { .. } | OrderState::WaiterNotified { .. } => {
                FulfillmentStatus::Ready
            }
            OrderState::Delivered { .. } => FulfillmentStatus::Delivered,
            OrderState::Cancelled { .. } => FulfillmentStatus::Cancelled,
        }
    }

    pub fn approval(&self) -> Option<&Approval> {
        match self {
            OrderState::CashierApproved { approval }
            | OrderState::ChefAssigned { approval, .. }
            | OrderState::ChefPreparing { approval, .. }
            | OrderState::ChefCompleted { approval, .. }
            | OrderState::WaiterNotified { approval, .. }
            | OrderState::Delivered { approval, .. } => Some(approval),
            _ => None,
        }
    }

    /// Kitchen queue, known once the cashier approved the order
    pub fn chef_type(&self) -> Option<ChefType> {
        self.approval().map(|a| a.chef_type)
    }

    pub fn preparation(&self) -> Option<&Preparation> {
        match self {
            OrderState::ChefPreparing { preparation, .. }
            | OrderState::ChefCompleted { preparation, .. }
            | OrderState::WaiterNotified { preparation, .. }
            | OrderState::Delivered { preparation, .. } => Some(preparation),
            _ => None,
        }
    }

    /// Chef responsible for the order: the assigned one, or the one cooking it
    pub fn assigned_chef(&self) -> Option<&str> {
        match self {
            OrderState::ChefAssigned { assigned_chef, .. } => Some(assigned_chef),
            other => other.preparation().map(|p| p.chef.as_str()),
        }
    }

    pub fn completed_at(&self) -> Option<i64> {
        match self {
            OrderState::ChefCompleted { completed_at, .. }
            | OrderState::WaiterNotified { completed_at, .. }
            | OrderState::Delivered { completed_at, .. } => Some(*completed_at),
            _ => None,
        }
    }

    pub fn delivered_at(&self) -> Option<i64> {
        match self {
            OrderState::Delivered { delivered_at, .. } => Some(*delivered_at),
            _ => None,
        }
    }

    /// The waiter has been told the order is ready
    pub fn waiter_notified(&self) -> bool {
        matches!(
            self,
            OrderState::WaiterNotified { .. } | OrderState::Delivered { .. }
        )
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}
