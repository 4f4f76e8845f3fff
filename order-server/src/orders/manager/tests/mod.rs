use super::*;
use crate::seed::demo_menu;
use shared::order::{
    CommandErrorCode, GuestInfo, OrderCommandPayload, OrderItemInput, OrderLocation,
    PaymentStatus,
};
use shared::{ChefType, NotificationType, Role};

fn create_test_manager() -> OrdersManager {
    OrdersManager::new(
        Arc::new(MenuCatalog::new(demo_menu())),
        ChargeRates::default(),
        Arc::new(NotificationFeed::new()),
    )
}

fn cmd(role: Role, name: &str, payload: OrderCommandPayload) -> OrderCommand {
    OrderCommand::new(name.to_lowercase().replace(' ', "-"), name, role, payload)
}

fn item(menu_item_id: &str, quantity: u32) -> OrderItemInput {
    OrderItemInput {
        menu_item_id: menu_item_id.to_string(),
        quantity,
        special_instructions: None,
    }
}

fn room(number: &str) -> OrderLocation {
    OrderLocation::Room {
        room_number: number.to_string(),
    }
}

fn place_cmd(items: Vec<OrderItemInput>) -> OrderCommand {
    cmd(
        Role::Waiter,
        "Mike Waiter",
        OrderCommandPayload::PlaceOrder {
            guest: GuestInfo {
                name: "Bob Smith".to_string(),
                email: Some("bob@email.com".to_string()),
                phone: None,
            },
            location: room("102"),
            items,
            special_requests: None,
            assigned_waiter: None,
        },
    )
}

// ========================================================================
// Helper: drive an order through the workflow
// ========================================================================

fn place(manager: &OrdersManager, items: Vec<OrderItemInput>) -> String {
    let resp = manager.execute_command(place_cmd(items));
    assert!(resp.success, "PlaceOrder failed: {:?}", resp.error);
    resp.order_id.unwrap()
}

fn submit(manager: &OrdersManager, order_id: &str) -> CommandResponse {
    manager.execute_command(cmd(
        Role::Waiter,
        "Mike Waiter",
        OrderCommandPayload::SubmitToCashier {
            order_id: order_id.to_string(),
        },
    ))
}

fn approve(manager: &OrdersManager, order_id: &str) -> CommandResponse {
    manager.execute_command(cmd(
        Role::Cashier,
        "John Cashier",
        OrderCommandPayload::ApproveOrder {
            order_id: order_id.to_string(),
        },
    ))
}

fn reject(manager: &OrdersManager, order_id: &str) -> CommandResponse {
    manager.execute_command(cmd(
        Role::Cashier,
        "John Cashier",
        OrderCommandPayload::RejectOrder {
            order_id: order_id.to_string(),
            reason: Some("Card declined".to_string()),
        },
    ))
}

fn assign(manager: &OrdersManager, order_id: &str, chef: &str) -> CommandResponse {
    manager.execute_command(cmd(
        Role::Chef,
        "Chef Roberto",
        OrderCommandPayload::AssignChef {
            order_id: order_id.to_string(),
            chef_name: chef.to_string(),
        },
    ))
}

fn start_as(
    manager: &OrdersManager,
    order_id: &str,
    chef: &str,
    chef_type: ChefType,
) -> CommandResponse {
    manager.execute_command(cmd(
        Role::Chef,
        chef,
        OrderCommandPayload::StartPreparation {
            order_id: order_id.to_string(),
            chef_type,
        },
    ))
}

fn complete(manager: &OrdersManager, order_id: &str) -> CommandResponse {
    manager.execute_command(cmd(
        Role::Chef,
        "Chef Maria",
        OrderCommandPayload::CompletePreparation {
            order_id: order_id.to_string(),
        },
    ))
}

fn acknowledge(manager: &OrdersManager, order_id: &str) -> CommandResponse {
    manager.execute_command(cmd(
        Role::Waiter,
        "Mike Waiter",
        OrderCommandPayload::AcknowledgeReady {
            order_id: order_id.to_string(),
        },
    ))
}

fn deliver(manager: &OrdersManager, order_id: &str) -> CommandResponse {
    manager.execute_command(cmd(
        Role::Waiter,
        "Mike Waiter",
        OrderCommandPayload::DeliverOrder {
            order_id: order_id.to_string(),
        },
    ))
}

/// Place, submit and approve a salmon + wine order (food station)
fn approved_order(manager: &OrdersManager) -> String {
    let order_id = place(manager, vec![item("5", 1), item("10", 1)]);
    assert!(submit(manager, &order_id).success);
    assert!(approve(manager, &order_id).success);
    order_id
}

/// Approved order cooked by Chef Maria
fn completed_order(manager: &OrdersManager) -> String {
    let order_id = approved_order(manager);
    assert!(start_as(manager, &order_id, "Chef Maria", ChefType::Food).success);
    assert!(complete(manager, &order_id).success);
    order_id
}

fn status_of(manager: &OrdersManager, order_id: &str) -> WorkflowStatus {
    manager.get_order(order_id).unwrap().workflow_status()
}

fn error_code(resp: &CommandResponse) -> CommandErrorCode {
    resp.error.as_ref().expect("command should fail").code
}

mod test_boundary;
