//! Chef routing
//!
//! Every approved order is routed to exactly one kitchen queue. The queue is
//! picked from the categories of the ordered items with a fixed priority:
//! food beats beverage beats snack.

use super::menu::MenuCategory;
use serde::{Deserialize, Serialize};

/// Kitchen queue an order is routed to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChefType {
    Food,
    Beverage,
    Snack,
}

impl ChefType {
    pub const ALL: [ChefType; 3] = [ChefType::Food, ChefType::Beverage, ChefType::Snack];

    /// Classify a set of item categories.
    ///
    /// Total: an empty set, or one holding only desserts, falls through to `Snack`.
    pub fn classify<I>(categories: I) -> ChefType
    where
        I: IntoIterator<Item = MenuCategory>,
    {
        let mut has_beverage = false;
        for category in categories {
            if category.is_food() {
                return ChefType::Food;
            }
            if category == MenuCategory::Beverage {
                has_beverage = true;
            }
        }
        if has_beverage {
            ChefType::Beverage
        } else {
            ChefType::Snack
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChefType::Food => "food",
            ChefType::Beverage => "beverage",
            ChefType::Snack => "snack",
        }
    }

    /// Human readable station name
    pub fn display_name(&self) -> &'static str {
        match self {
            ChefType::Food => "Food Chef",
            ChefType::Beverage => "Beverage Chef",
            ChefType::Snack => "Snack Chef",
        }
    }
}

impl std::fmt::Display for ChefType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChefType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChefType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown chef type: {s}"))
    }
}
