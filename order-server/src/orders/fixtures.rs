//! Builders shared by the order pipeline tests

use shared::Role;
use shared::order::{
    Approval, GuestInfo, OrderItem, OrderLocation, OrderSnapshot, OrderState, PaymentStatus,
    Preparation,
};
use shared::ChefType;

use crate::catalog::MenuCatalog;
use crate::orders::money::{ChargeRates, calculate_totals};
use crate::orders::storage::OrderStore;
use crate::orders::traits::CommandMetadata;
use crate::seed::demo_menu;

pub const ORDER_ID: &str = "order-1";

pub fn catalog() -> MenuCatalog {
    MenuCatalog::new(demo_menu())
}

pub fn metadata(role: Role, name: &str) -> CommandMetadata {
    CommandMetadata {
        command_id: "cmd-1".to_string(),
        operator_id: name.to_lowercase().replace(' ', "-"),
        operator_name: name.to_string(),
        operator_role: role,
        timestamp: 1_705_220_400_000,
    }
}

pub fn line(menu_item_id: &str, quantity: u32) -> OrderItem {
    let catalog = catalog();
    OrderItem {
        menu_item: catalog.get(menu_item_id).cloned().expect("demo menu item"),
        quantity,
        special_instructions: None,
    }
}

pub fn approval(chef_type: ChefType) -> Approval {
    Approval {
        approved_by: "John Cashier".to_string(),
        approved_at: 1_000,
        chef_type,
    }
}

pub fn preparation(chef: &str) -> Preparation {
    Preparation {
        chef: chef.to_string(),
        started_at: 2_000,
    }
}

/// Room service order for Grilled Salmon and House Wine in the given state
pub fn order_in(state: OrderState) -> OrderSnapshot {
    let mut snapshot = OrderSnapshot::new(ORDER_ID.to_string());
    snapshot.order_number = "ORD-001".to_string();
    snapshot.guest = GuestInfo {
        name: "Bob Smith".to_string(),
        email: Some("bob@email.com".to_string()),
        phone: None,
    };
    snapshot.location = OrderLocation::Room {
        room_number: "102".to_string(),
    };
    snapshot.items = vec![line("5", 1), line("10", 1)];
    snapshot.totals = calculate_totals(&snapshot.items, &ChargeRates::default());
    snapshot.assigned_waiter = Some("Mike Waiter".to_string());
    snapshot.order_time = 500;
    snapshot.created_at = 500;
    if state.approval().is_some() {
        snapshot.payment_status = PaymentStatus::Paid;
    }
    snapshot.state = state;
    snapshot.last_sequence = 3;
    snapshot.update_checksum();
    snapshot
}

pub fn store_with(snapshot: OrderSnapshot) -> OrderStore {
    let mut store = OrderStore::new();
    store.set_sequence(snapshot.last_sequence);
    store.set_order_count(1);
    store.store_snapshot(snapshot);
    store
}
