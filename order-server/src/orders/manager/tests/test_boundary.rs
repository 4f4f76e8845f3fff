use super::*;

// ========================================================================
//  边界与拒绝路径
// ========================================================================

#[test]
fn test_unknown_order() {
    let manager = create_test_manager();
    let resp = submit(&manager, "missing");
    assert_eq!(error_code(&resp), CommandErrorCode::OrderNotFound);
    assert!(manager.get_events_for_order("missing").is_err());
    assert!(manager.rebuild_snapshot("missing").is_err());
}

#[test]
fn test_empty_order_rejected() {
    let manager = create_test_manager();
    let resp = manager.execute_command(place_cmd(vec![]));
    assert_eq!(error_code(&resp), CommandErrorCode::OrderEmpty);
    assert!(manager.list_orders().is_empty());
    assert_eq!(manager.get_current_sequence(), 0);
}

#[test]
fn test_quantity_limits() {
    let manager = create_test_manager();
    let resp = manager.execute_command(place_cmd(vec![item("5", 0)]));
    assert_eq!(error_code(&resp), CommandErrorCode::ValidationFailed);

    let resp = manager.execute_command(place_cmd(vec![item("5", 100)]));
    assert_eq!(error_code(&resp), CommandErrorCode::ValidationFailed);

    let resp = manager.execute_command(place_cmd(vec![item("5", 99)]));
    assert!(resp.success);
}

#[test]
fn test_unknown_menu_item() {
    let manager = create_test_manager();
    let resp = manager.execute_command(place_cmd(vec![item("404", 1)]));
    assert_eq!(error_code(&resp), CommandErrorCode::MenuItemNotFound);
}

#[test]
fn test_skipping_cashier_is_invalid() {
    let manager = create_test_manager();
    let order_id = place(&manager, vec![item("5", 1)]);

    let resp = approve(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::InvalidTransition);
    assert_eq!(status_of(&manager, &order_id), WorkflowStatus::WaiterCreated);
}

#[test]
fn test_double_submit_is_invalid() {
    let manager = create_test_manager();
    let order_id = place(&manager, vec![item("5", 1)]);
    assert!(submit(&manager, &order_id).success);

    let resp = submit(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::InvalidTransition);
}

#[test]
fn test_mismatched_station_leaves_order_unchanged() {
    let manager = create_test_manager();
    let order_id = approved_order(&manager);
    let before = manager.get_order(&order_id).unwrap();
    let sequence = manager.get_current_sequence();

    let resp = start_as(&manager, &order_id, "Chef Ana", ChefType::Beverage);
    assert_eq!(error_code(&resp), CommandErrorCode::ChefTypeMismatch);

    assert_eq!(manager.get_order(&order_id).unwrap(), before);
    assert_eq!(manager.get_current_sequence(), sequence);
}

#[test]
fn test_only_assigned_chef_may_start() {
    let manager = create_test_manager();
    let order_id = approved_order(&manager);
    assert!(assign(&manager, &order_id, "Chef Maria").success);

    let resp = start_as(&manager, &order_id, "Chef Luis", ChefType::Food);
    assert_eq!(error_code(&resp), CommandErrorCode::ChefNotAssigned);

    // 经理代为开始，记录指派的厨师
    let resp = manager.execute_command(cmd(
        Role::Manager,
        "Sarah Manager",
        OrderCommandPayload::StartPreparation {
            order_id: order_id.clone(),
            chef_type: ChefType::Food,
        },
    ));
    assert!(resp.success, "{:?}", resp.error);
    let snapshot = manager.get_order(&order_id).unwrap();
    assert_eq!(snapshot.state.preparation().unwrap().chef, "Chef Maria");
}

#[test]
fn test_only_preparing_chef_may_complete() {
    let manager = create_test_manager();
    let order_id = approved_order(&manager);
    assert!(start_as(&manager, &order_id, "Chef Luis", ChefType::Food).success);

    let resp = complete(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::ChefNotAssigned);
    assert_eq!(status_of(&manager, &order_id), WorkflowStatus::ChefPreparing);

    let resp = manager.execute_command(cmd(
        Role::Manager,
        "Sarah Manager",
        OrderCommandPayload::CompletePreparation {
            order_id: order_id.clone(),
        },
    ));
    assert!(resp.success, "{:?}", resp.error);
    let snapshot = manager.get_order(&order_id).unwrap();
    assert_eq!(snapshot.workflow_status(), WorkflowStatus::ChefCompleted);
    assert_eq!(snapshot.state.preparation().unwrap().chef, "Chef Luis");
}

#[test]
fn test_complete_requires_preparing() {
    let manager = create_test_manager();
    let order_id = approved_order(&manager);

    let resp = complete(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::InvalidTransition);
}

#[test]
fn test_deliver_before_kitchen_done() {
    let manager = create_test_manager();
    let order_id = approved_order(&manager);

    let resp = deliver(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::InvalidTransition);
}

#[test]
fn test_delivered_order_is_final() {
    let manager = create_test_manager();
    let order_id = completed_order(&manager);
    assert!(deliver(&manager, &order_id).success);

    let resp = deliver(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::OrderAlreadyDelivered);
    let resp = reject(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::OrderAlreadyDelivered);
}

#[test]
fn test_cancelled_order_is_final() {
    let manager = create_test_manager();
    let order_id = approved_order(&manager);
    assert!(reject(&manager, &order_id).success);

    let resp = start_as(&manager, &order_id, "Chef Maria", ChefType::Food);
    assert_eq!(error_code(&resp), CommandErrorCode::OrderCancelled);
    let resp = reject(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::OrderCancelled);
}

#[test]
fn test_reject_after_kitchen_started_is_invalid() {
    let manager = create_test_manager();
    let order_id = approved_order(&manager);
    assert!(start_as(&manager, &order_id, "Chef Maria", ChefType::Food).success);

    let resp = reject(&manager, &order_id);
    assert_eq!(error_code(&resp), CommandErrorCode::InvalidTransition);
}

// ------------------------------------------------------------------------
// 权限
// ------------------------------------------------------------------------
#[test]
fn test_role_permissions_enforced() {
    let manager = create_test_manager();
    let order_id = place(&manager, vec![item("5", 1)]);
    assert!(submit(&manager, &order_id).success);

    // 服务员不能批准
    let resp = manager.execute_command(cmd(
        Role::Waiter,
        "Mike Waiter",
        OrderCommandPayload::ApproveOrder {
            order_id: order_id.clone(),
        },
    ));
    assert_eq!(error_code(&resp), CommandErrorCode::PermissionDenied);

    // 客人不能下单
    let mut guest_cmd = place_cmd(vec![item("5", 1)]);
    guest_cmd.operator_role = Role::Customer;
    let resp = manager.execute_command(guest_cmd);
    assert_eq!(error_code(&resp), CommandErrorCode::PermissionDenied);

    // 管理员可以
    let resp = manager.execute_command(cmd(
        Role::Admin,
        "Admin",
        OrderCommandPayload::ApproveOrder {
            order_id: order_id.clone(),
        },
    ));
    assert!(resp.success);
}

// ------------------------------------------------------------------------
// 幂等
// ------------------------------------------------------------------------
#[test]
fn test_duplicate_command_is_not_reapplied() {
    let manager = create_test_manager();
    let command = place_cmd(vec![item("5", 1)]);

    let first = manager.execute_command(command.clone());
    assert!(first.success);
    let second = manager.execute_command(command);
    assert!(second.success);
    assert!(second.order_id.is_none());

    assert_eq!(manager.list_orders().len(), 1);
    assert_eq!(manager.get_current_sequence(), 1);
}

#[test]
fn test_failed_command_can_be_retried() {
    let manager = create_test_manager();
    let order_id = place(&manager, vec![item("5", 1)]);
    let approve_cmd = cmd(
        Role::Cashier,
        "John Cashier",
        OrderCommandPayload::ApproveOrder {
            order_id: order_id.clone(),
        },
    );

    let resp = manager.execute_command(approve_cmd.clone());
    assert!(!resp.success);

    assert!(submit(&manager, &order_id).success);
    let resp = manager.execute_command(approve_cmd);
    assert!(resp.success, "{:?}", resp.error);
}
