//! Permission Definitions
//!
//! 每个工作流动作对应一个权限，按角色授予。
//! admin 和 manager 拥有全部权限，可以代任何岗位操作。

use shared::Role;
use shared::order::OrderCommandPayload;

use crate::orders::traits::OrderError;

/// 全部工作流权限
pub const ALL_PERMISSIONS: &[&str] = &[
    "orders:place",       // 下单
    "orders:submit",      // 提交收银
    "orders:approve",     // 收银审核通过
    "orders:reject",      // 收银拒单
    "orders:assign",      // 指派厨师
    "orders:prepare",     // 开始/完成制作
    "orders:acknowledge", // 确认出餐通知
    "orders:deliver",     // 送达
];

/// 服务员
pub const WAITER_PERMISSIONS: &[&str] = &[
    "orders:place",
    "orders:submit",
    "orders:acknowledge",
    "orders:deliver",
];

/// 前台（可代客下单）
pub const RECEPTIONIST_PERMISSIONS: &[&str] = &["orders:place", "orders:submit"];

/// 收银
pub const CASHIER_PERMISSIONS: &[&str] = &["orders:approve", "orders:reject"];

/// 厨师
pub const CHEF_PERMISSIONS: &[&str] = &["orders:assign", "orders:prepare"];

/// Permissions granted to a role
pub fn role_permissions(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin | Role::Manager => ALL_PERMISSIONS,
        Role::Waiter => WAITER_PERMISSIONS,
        Role::Receptionist => RECEPTIONIST_PERMISSIONS,
        Role::Cashier => CASHIER_PERMISSIONS,
        Role::Chef => CHEF_PERMISSIONS,
        Role::Customer => &[],
    }
}

/// Permission needed to execute a command
pub fn required_permission(payload: &OrderCommandPayload) -> &'static str {
    match payload {
        OrderCommandPayload::PlaceOrder { .. } => "orders:place",
        OrderCommandPayload::SubmitToCashier { .. } => "orders:submit",
        OrderCommandPayload::ApproveOrder { .. } => "orders:approve",
        OrderCommandPayload::RejectOrder { .. } => "orders:reject",
        OrderCommandPayload::AssignChef { .. } => "orders:assign",
        OrderCommandPayload::StartPreparation { .. }
        | OrderCommandPayload::CompletePreparation { .. } => "orders:prepare",
        OrderCommandPayload::AcknowledgeReady { .. } => "orders:acknowledge",
        OrderCommandPayload::DeliverOrder { .. } => "orders:deliver",
    }
}

pub fn has_permission(role: Role, permission: &str) -> bool {
    role_permissions(role).contains(&permission)
}

/// Reject commands the operator's role may not issue
pub fn check_permission(role: Role, payload: &OrderCommandPayload) -> Result<(), OrderError> {
    if has_permission(role, required_permission(payload)) {
        Ok(())
    } else {
        Err(OrderError::PermissionDenied {
            role,
            action: payload.action_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approve() -> OrderCommandPayload {
        OrderCommandPayload::ApproveOrder {
            order_id: "order-1".to_string(),
        }
    }

    #[test]
    fn test_supervisors_can_do_everything() {
        for permission in ALL_PERMISSIONS {
            assert!(has_permission(Role::Admin, permission));
            assert!(has_permission(Role::Manager, permission));
        }
    }

    #[test]
    fn test_customer_has_no_permissions() {
        assert!(role_permissions(Role::Customer).is_empty());
    }

    #[test]
    fn test_only_cashier_approves() {
        assert!(check_permission(Role::Cashier, &approve()).is_ok());
        let err = check_permission(Role::Waiter, &approve()).unwrap_err();
        assert_eq!(
            err,
            OrderError::PermissionDenied {
                role: Role::Waiter,
                action: "approve"
            }
        );
        assert!(check_permission(Role::Chef, &approve()).is_err());
    }

    #[test]
    fn test_role_tables_are_subsets() {
        for role in Role::ALL {
            for permission in role_permissions(role) {
                assert!(ALL_PERMISSIONS.contains(permission), "{role}: {permission}");
            }
        }
    }

    #[test]
    fn test_chef_prepares_but_does_not_deliver() {
        let start = OrderCommandPayload::StartPreparation {
            order_id: "order-1".to_string(),
            chef_type: shared::ChefType::Food,
        };
        let deliver = OrderCommandPayload::DeliverOrder {
            order_id: "order-1".to_string(),
        };
        assert!(check_permission(Role::Chef, &start).is_ok());
        assert!(check_permission(Role::Chef, &deliver).is_err());
        assert!(check_permission(Role::Waiter, &deliver).is_ok());
    }
}
