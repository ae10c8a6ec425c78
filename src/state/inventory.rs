use crate::models::{Dish, Menu, MenuKind, TimeOfDay};

/// An ordered collection of menus.
#[derive(Debug, Default)]
pub struct MenuInventory {
    menus: Vec<Menu>,
}

impl MenuInventory {
    /// Create an inventory from menus, keeping their order.
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus }
    }

    /// Append a menu.
    pub fn add_menu(&mut self, menu: Menu) {
        self.menus.push(menu);
    }

    /// All menus in insertion order.
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// First menu of the given kind.
    pub fn get(&self, kind: MenuKind) -> Option<&Menu> {
        self.menus.iter().find(|m| m.kind() == kind)
    }

    /// Mutable access to the first menu of the given kind.
    pub fn get_mut(&mut self, kind: MenuKind) -> Option<&mut Menu> {
        self.menus.iter_mut().find(|m| m.kind() == kind)
    }

    /// Remove and return the first menu of the given kind.
    pub fn take(&mut self, kind: MenuKind) -> Option<Menu> {
        let index = self.menus.iter().position(|m| m.kind() == kind)?;
        Some(self.menus.remove(index))
    }

    /// Menus open at `time`, in inventory order.
    pub fn available_at(&self, time: TimeOfDay) -> Vec<&Menu> {
        self.menus
            .iter()
            .filter(|m| m.is_available_at(time))
            .collect()
    }

    /// Every dish on every menu, in menu order.
    pub fn all_dishes(&self) -> Vec<&Dish> {
        self.menus.iter().flat_map(|m| m.dishes()).collect()
    }

    /// Total number of dishes across all menus.
    pub fn dish_count(&self) -> usize {
        self.menus.iter().map(|m| m.dishes().count()).sum()
    }

    /// Find a dish anywhere in the inventory by exact name.
    pub fn find_dish(&self, name: &str) -> Option<&Dish> {
        self.menus
            .iter()
            .flat_map(|m| m.dishes())
            .find(|d| d.name() == name)
    }

    /// Count of menus in the inventory.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Check if the inventory has no menus.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
