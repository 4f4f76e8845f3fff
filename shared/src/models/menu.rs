//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Appetizer,
    Main,
    Dessert,
    Beverage,
    Breakfast,
    Lunch,
    Dinner,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 7] = [
        MenuCategory::Appetizer,
        MenuCategory::Main,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
        MenuCategory::Breakfast,
        MenuCategory::Lunch,
        MenuCategory::Dinner,
    ];

    /// Categories cooked by the food kitchen
    pub fn is_food(&self) -> bool {
        matches!(
            self,
            MenuCategory::Appetizer
                | MenuCategory::Main
                | MenuCategory::Breakfast
                | MenuCategory::Lunch
                | MenuCategory::Dinner
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Appetizer => "appetizer",
            MenuCategory::Main => "main",
            MenuCategory::Dessert => "dessert",
            MenuCategory::Beverage => "beverage",
            MenuCategory::Breakfast => "breakfast",
            MenuCategory::Lunch => "lunch",
            MenuCategory::Dinner => "dinner",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MenuCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown menu category: {s}"))
    }
}

/// Menu item entity (immutable reference data)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: MenuCategory,
    pub available: bool,
    /// Preparation time in minutes
    pub preparation_time: u32,
}
