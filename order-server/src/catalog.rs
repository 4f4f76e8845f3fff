//! 菜单目录
//!
//! 只读参考数据。下单时通过它解析菜品 id，订单中保存菜品快照，
//! 之后菜单的变化不会影响已下的订单。

use std::collections::HashMap;

use shared::{MenuCategory, MenuItem};

/// 内存中的菜单
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    index: HashMap<String, usize>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id.clone(), pos))
            .collect();
        Self { items, index }
    }

    /// 按 id 查找菜品
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn all(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn by_category(&self, category: MenuCategory) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.category == category).collect()
    }

    /// 当前可点的菜品
    pub fn available(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.available).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
