//! Role work queues
//!
//! Read-only views over the order snapshots, one per dashboard: what the
//! cashier has to approve, what each kitchen station has to cook and what a
//! waiter has to carry.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::ChefType;
use shared::order::{OrderSnapshot, WorkflowStatus};

use super::manager::OrdersManager;

/// Kitchen station counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KitchenStats {
    /// Approved or assigned, not started
    pub pending: usize,
    pub preparing: usize,
    /// Finished and waiting for a waiter
    pub completed: usize,
}

/// Per-waiter counters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WaiterStats {
    pub active: usize,
    pub ready: usize,
    pub delivered: usize,
    /// Sum of delivered order totals
    pub delivered_revenue: Decimal,
}

fn waits_for_kitchen(status: WorkflowStatus) -> bool {
    matches!(
        status,
        WorkflowStatus::CashierApproved | WorkflowStatus::ChefAssigned
    )
}

fn is_ready(status: WorkflowStatus) -> bool {
    matches!(
        status,
        WorkflowStatus::ChefCompleted | WorkflowStatus::WaiterNotified
    )
}

fn served_by(snapshot: &OrderSnapshot, waiter: &str) -> bool {
    snapshot.assigned_waiter.as_deref() == Some(waiter)
}

impl OrdersManager {
    /// Orders waiting for payment approval
    pub fn cashier_queue(&self) -> Vec<OrderSnapshot> {
        self.orders_by_status(WorkflowStatus::CashierPending)
    }

    /// Orders the cashier released to the kitchen and nobody started yet
    pub fn approved_orders(&self) -> Vec<OrderSnapshot> {
        self.filter_orders(|s| waits_for_kitchen(s.workflow_status()))
    }

    /// Open work for one kitchen station
    pub fn chef_queue(&self, chef_type: ChefType) -> Vec<OrderSnapshot> {
        self.filter_orders(|s| {
            s.chef_type() == Some(chef_type)
                && (waits_for_kitchen(s.workflow_status())
                    || s.workflow_status() == WorkflowStatus::ChefPreparing)
        })
    }

    pub fn kitchen_stats(&self, chef_type: ChefType) -> KitchenStats {
        let mut stats = KitchenStats::default();
        for order in self.filter_orders(|s| s.chef_type() == Some(chef_type)) {
            let status = order.workflow_status();
            if waits_for_kitchen(status) {
                stats.pending += 1;
            } else if status == WorkflowStatus::ChefPreparing {
                stats.preparing += 1;
            } else if is_ready(status) {
                stats.completed += 1;
            }
        }
        stats
    }

    /// Orders cooked and waiting for `waiter` to pick up
    pub fn ready_for_delivery(&self, waiter: &str) -> Vec<OrderSnapshot> {
        self.filter_orders(|s| served_by(s, waiter) && is_ready(s.workflow_status()))
    }

    /// Orders of `waiter` that are still with the cashier or the kitchen
    pub fn in_preparation(&self, waiter: &str) -> Vec<OrderSnapshot> {
        self.filter_orders(|s| {
            let status = s.workflow_status();
            served_by(s, waiter)
                && !s.is_terminal()
                && !is_ready(status)
                && status != WorkflowStatus::WaiterCreated
        })
    }

    /// Orders placed by `waiter` and not yet submitted
    pub fn drafts(&self, waiter: &str) -> Vec<OrderSnapshot> {
        self.filter_orders(|s| {
            served_by(s, waiter) && s.workflow_status() == WorkflowStatus::WaiterCreated
        })
    }

    pub fn delivered(&self, waiter: &str) -> Vec<OrderSnapshot> {
        self.filter_orders(|s| {
            served_by(s, waiter) && s.workflow_status() == WorkflowStatus::Delivered
        })
    }

    pub fn waiter_stats(&self, waiter: &str) -> WaiterStats {
        let mut stats = WaiterStats::default();
        for order in self.filter_orders(|s| served_by(s, waiter)) {
            let status = order.workflow_status();
            if status == WorkflowStatus::Delivered {
                stats.delivered += 1;
                stats.delivered_revenue += order.totals.total;
            } else if is_ready(status) {
                stats.ready += 1;
            } else if !order.is_terminal() {
                stats.active += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::notifications::NotificationFeed;
    use crate::orders::money::ChargeRates;
    use crate::seed::{demo_menu, seed_demo_orders};
    use std::sync::Arc;

    fn seeded() -> OrdersManager {
        let manager = OrdersManager::new(
            Arc::new(MenuCatalog::new(demo_menu())),
            ChargeRates::default(),
            Arc::new(NotificationFeed::new()),
        );
        seed_demo_orders(&manager).unwrap();
        manager
    }

    #[test]
    fn test_cashier_queue() {
        let manager = seeded();
        let queue = manager.cashier_queue();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].order_number, "ORD-003");
        assert!(manager.approved_orders().is_empty());
    }

    #[test]
    fn test_chef_queue_by_station() {
        let manager = seeded();
        let food = manager.chef_queue(ChefType::Food);
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].order_number, "ORD-002");
        assert!(manager.chef_queue(ChefType::Beverage).is_empty());

        assert_eq!(
            manager.kitchen_stats(ChefType::Food),
            KitchenStats {
                pending: 0,
                preparing: 1,
                completed: 0,
            }
        );
    }

    #[test]
    fn test_waiter_views() {
        let manager = seeded();
        assert!(manager.ready_for_delivery("Mike Waiter").is_empty());
        assert_eq!(manager.in_preparation("Mike Waiter").len(), 2);
        assert_eq!(manager.delivered("Mike Waiter").len(), 1);
        assert!(manager.drafts("Mike Waiter").is_empty());
        assert!(manager.delivered("Someone Else").is_empty());

        let stats = manager.waiter_stats("Mike Waiter");
        assert_eq!(stats.active, 2);
        assert_eq!(stats.ready, 0);
        assert_eq!(stats.delivered, 1);
        // 18 + 2 * 5 = 28, tax 2.80, service 3.50
        assert_eq!(stats.delivered_revenue, Decimal::new(3430, 2));
    }
}
