//! 演示数据
//!
//! 菜单和三个处于不同阶段的订单。订单通过正常的命令流程创建，
//! 因此事件日志、通知和快照与真实操作完全一致。

use rust_decimal::Decimal;
use shared::order::{
    GuestInfo, OrderCommand, OrderCommandPayload, OrderItemInput, OrderLocation,
};
use shared::{ChefType, MenuCategory, MenuItem, Role};

use crate::orders::{ManagerError, ManagerResult, OrdersManager};

fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    category: MenuCategory,
    preparation_time: u32,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from(price),
        category,
        available: true,
        preparation_time,
    }
}

/// The hotel menu
pub fn demo_menu() -> Vec<MenuItem> {
    use MenuCategory::*;
    vec![
        menu_item("1", "Continental Breakfast", "Fresh pastries, fruits, coffee, and juice", 18, Breakfast, 15),
        menu_item("2", "Full English Breakfast", "Eggs, bacon, sausages, beans, toast, and grilled tomatoes", 24, Breakfast, 20),
        menu_item("3", "Caesar Salad", "Crisp romaine lettuce with parmesan and croutons", 14, Appetizer, 10),
        menu_item("4", "Soup of the Day", "Chef's special soup served with fresh bread", 12, Appetizer, 5),
        menu_item("5", "Grilled Salmon", "Fresh Atlantic salmon with seasonal vegetables", 32, Main, 25),
        menu_item("6", "Beef Tenderloin", "Premium beef with mashed potatoes and red wine sauce", 45, Main, 30),
        menu_item("7", "Chicken Parmesan", "Breaded chicken breast with marinara and mozzarella", 28, Main, 20),
        menu_item("8", "Chocolate Lava Cake", "Warm chocolate cake with vanilla ice cream", 12, Dessert, 15),
        menu_item("9", "Tiramisu", "Classic Italian dessert with coffee and mascarpone", 10, Dessert, 5),
        menu_item("10", "House Wine", "Red or white wine by the glass", 8, Beverage, 2),
        menu_item("11", "Fresh Coffee", "Freshly brewed coffee or espresso", 5, Beverage, 3),
    ]
}

const WAITER: &str = "Mike Waiter";
const CASHIER: &str = "John Cashier";

fn line(menu_item_id: &str, quantity: u32) -> OrderItemInput {
    OrderItemInput {
        menu_item_id: menu_item_id.to_string(),
        quantity,
        special_instructions: None,
    }
}

/// Execute one command, turning a refusal into an error
fn run(
    manager: &OrdersManager,
    name: &str,
    role: Role,
    payload: OrderCommandPayload,
) -> ManagerResult<Option<String>> {
    let operator_id = name.to_lowercase().replace(' ', "-");
    let response = manager.execute_command(OrderCommand::new(operator_id, name, role, payload));
    match response.error {
        None => Ok(response.order_id),
        Some(err) => Err(ManagerError::Internal(format!(
            "seed command failed ({:?}): {}",
            err.code, err.message
        ))),
    }
}

fn place(
    manager: &OrdersManager,
    guest: GuestInfo,
    location: OrderLocation,
    items: Vec<OrderItemInput>,
    special_requests: Option<&str>,
) -> ManagerResult<String> {
    let payload = OrderCommandPayload::PlaceOrder {
        guest,
        location,
        items,
        special_requests: special_requests.map(str::to_string),
        assigned_waiter: None,
    };
    run(manager, WAITER, Role::Waiter, payload)?
        .ok_or_else(|| ManagerError::Internal("seed order was not created".to_string()))
}

/// Submit and approve
fn approve(manager: &OrdersManager, order_id: &str) -> ManagerResult<()> {
    submit(manager, order_id)?;
    run(
        manager,
        CASHIER,
        Role::Cashier,
        OrderCommandPayload::ApproveOrder {
            order_id: order_id.to_string(),
        },
    )?;
    Ok(())
}

fn submit(manager: &OrdersManager, order_id: &str) -> ManagerResult<()> {
    run(
        manager,
        WAITER,
        Role::Waiter,
        OrderCommandPayload::SubmitToCashier {
            order_id: order_id.to_string(),
        },
    )?;
    Ok(())
}

fn start(manager: &OrdersManager, order_id: &str, chef: &str) -> ManagerResult<()> {
    run(
        manager,
        chef,
        Role::Chef,
        OrderCommandPayload::StartPreparation {
            order_id: order_id.to_string(),
            chef_type: ChefType::Food,
        },
    )?;
    Ok(())
}

/// Seed three orders: one delivered, one cooking, one waiting for the cashier
pub fn seed_demo_orders(manager: &OrdersManager) -> ManagerResult<()> {
    // ORD-001: delivered
    let alice = place(
        manager,
        GuestInfo {
            name: "Alice Johnson".to_string(),
            email: Some("alice@email.com".to_string()),
            phone: Some("+1234567895".to_string()),
        },
        OrderLocation::Room {
            room_number: "101".to_string(),
        },
        vec![line("1", 1), line("11", 2)],
        None,
    )?;
    approve(manager, &alice)?;
    start(manager, &alice, "Chef Maria")?;
    run(
        manager,
        "Chef Maria",
        Role::Chef,
        OrderCommandPayload::CompletePreparation {
            order_id: alice.clone(),
        },
    )?;
    run(
        manager,
        WAITER,
        Role::Waiter,
        OrderCommandPayload::DeliverOrder { order_id: alice },
    )?;

    // ORD-002: in the kitchen
    let bob = place(
        manager,
        GuestInfo {
            name: "Bob Smith".to_string(),
            email: Some("bob@email.com".to_string()),
            phone: None,
        },
        OrderLocation::Room {
            room_number: "102".to_string(),
        },
        vec![line("5", 1), line("10", 1)],
        Some("Medium rare, no vegetables"),
    )?;
    approve(manager, &bob)?;
    start(manager, &bob, "Chef Roberto")?;

    // ORD-003: waiting for payment
    let carol = place(
        manager,
        GuestInfo {
            name: "Carol Davis".to_string(),
            email: None,
            phone: None,
        },
        OrderLocation::Table {
            table_number: "Table 5".to_string(),
        },
        vec![line("3", 2), line("7", 1)],
        None,
    )?;
    submit(manager, &carol)?;

    tracing::info!(orders = 3, "Demo orders seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::notifications::NotificationFeed;
    use crate::orders::ChargeRates;
    use shared::order::{PaymentStatus, WorkflowStatus};
    use std::sync::Arc;

    #[test]
    fn test_seed_orders_reach_their_stages() {
        let manager = OrdersManager::new(
            Arc::new(MenuCatalog::new(demo_menu())),
            ChargeRates::default(),
            Arc::new(NotificationFeed::new()),
        );
        seed_demo_orders(&manager).unwrap();

        let orders = manager.list_orders();
        let stages: Vec<(&str, WorkflowStatus)> = orders
            .iter()
            .map(|o| (o.order_number.as_str(), o.workflow_status()))
            .collect();
        assert_eq!(
            stages,
            vec![
                ("ORD-001", WorkflowStatus::Delivered),
                ("ORD-002", WorkflowStatus::ChefPreparing),
                ("ORD-003", WorkflowStatus::CashierPending),
            ]
        );
        assert_eq!(orders[0].payment_status, PaymentStatus::Paid);
        assert_eq!(
            orders[1].special_requests.as_deref(),
            Some("Medium rare, no vegetables")
        );
        assert_eq!(orders[1].state.preparation().unwrap().chef, "Chef Roberto");
    }

    #[test]
    fn test_demo_menu_is_available() {
        let menu = demo_menu();
        assert_eq!(menu.len(), 11);
        assert!(menu.iter().all(|item| item.available));
    }
}
