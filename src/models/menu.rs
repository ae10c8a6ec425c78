use std::fmt;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::models::time::hm;
use crate::models::{Category, Dish, TimeOfDay};
use crate::notify::{ChangeNotifier, MenuObserver};

/// Which meal a menu serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum MenuKind {
    Breakfast,
    Lunch,
    Dinner,
}

/// Fixed opening window and label of a menu kind. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub label: &'static str,
}

const BREAKFAST_WINDOW: MenuWindow = MenuWindow {
    start: hm(8, 0),
    end: hm(10, 0),
    label: "Breakfast Menu",
};

const LUNCH_WINDOW: MenuWindow = MenuWindow {
    start: hm(12, 0),
    end: hm(16, 0),
    label: "Lunch Menu",
};

const DINNER_WINDOW: MenuWindow = MenuWindow {
    start: hm(18, 0),
    end: hm(22, 0),
    label: "Dinner Menu",
};

impl MenuKind {
    pub const ALL: [MenuKind; 3] = [MenuKind::Breakfast, MenuKind::Lunch, MenuKind::Dinner];

    /// Opening window and label for this kind.
    pub fn window(&self) -> MenuWindow {
        match self {
            MenuKind::Breakfast => BREAKFAST_WINDOW,
            MenuKind::Lunch => LUNCH_WINDOW,
            MenuKind::Dinner => DINNER_WINDOW,
        }
    }

    /// Short name ("Breakfast", "Lunch", "Dinner").
    pub fn name(&self) -> &'static str {
        match self {
            MenuKind::Breakfast => "Breakfast",
            MenuKind::Lunch => "Lunch",
            MenuKind::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A time-windowed collection of categories.
///
/// Category additions and removals are announced to attached observers.
#[derive(Debug)]
pub struct Menu {
    kind: MenuKind,
    categories: Vec<Category>,
    notifier: ChangeNotifier,
}

impl Menu {
    /// Create a menu of the given kind with no observers attached.
    pub fn new(kind: MenuKind, categories: Vec<Category>) -> Self {
        Self {
            kind,
            categories,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Shorthand for `Menu::new(MenuKind::Breakfast, ..)`.
    pub fn breakfast(categories: Vec<Category>) -> Self {
        Self::new(MenuKind::Breakfast, categories)
    }

    /// Shorthand for `Menu::new(MenuKind::Lunch, ..)`.
    pub fn lunch(categories: Vec<Category>) -> Self {
        Self::new(MenuKind::Lunch, categories)
    }

    /// Shorthand for `Menu::new(MenuKind::Dinner, ..)`.
    pub fn dinner(categories: Vec<Category>) -> Self {
        Self::new(MenuKind::Dinner, categories)
    }

    /// Which meal this menu serves.
    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    /// Opening window of this menu's kind.
    pub fn window(&self) -> MenuWindow {
        self.kind.window()
    }

    /// Fixed label, e.g. "Lunch Menu".
    pub fn description(&self) -> &'static str {
        self.kind.window().label
    }

    /// True when `time` falls inside the window, both ends included.
    pub fn is_available_at(&self, time: TimeOfDay) -> bool {
        let window = self.window();
        time.is_within(window.start, window.end)
    }

    /// Parse `HH:MM` and check availability. Malformed input is an error.
    pub fn is_available_at_str(&self, time: &str) -> Result<bool> {
        Ok(self.is_available_at(TimeOfDay::parse(time)?))
    }

    /// Read-only view of the categories in their current order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Owned copy of the categories; changing it does not affect the menu.
    pub fn category(&self) -> Vec<Category> {
        self.categories.clone()
    }

    /// Sort the dishes of every category by name.
    pub fn sort_categories(&mut self) {
        for category in self.categories.iter_mut() {
            category.sort_dishes_alphabetically();
        }
        debug!("Sorted {} categories of {}", self.categories.len(), self.description());
    }

    /// Register an observer for category changes. Duplicates are kept.
    pub fn attach(&mut self, observer: Box<dyn MenuObserver>) {
        self.notifier.attach(observer);
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.notifier.len()
    }

    /// Append a category, then notify observers.
    ///
    /// An observer error is returned after the category has been appended.
    pub fn add_category(&mut self, category: Category) -> Result<()> {
        let message = format!("Category added: {}", category.name());
        self.categories.push(category);
        debug!("{} now has {} categories", self.description(), self.categories.len());
        self.notifier.notify(&message)
    }

    /// Remove every category named exactly `name`. Notifies once, and only if
    /// something was removed. An observer error is returned after the removal.
    pub fn remove_category(&mut self, name: &str) -> Result<()> {
        let before = self.categories.len();
        self.categories.retain(|c| c.name() != name);
        let removed = before - self.categories.len();

        if removed == 0 {
            debug!("No category named '{}' in {}", name, self.description());
            return Ok(());
        }

        debug!("Removed {} categories named '{}'", removed, name);
        self.notifier.notify(&format!("Category removed: {}", name))
    }

    /// Sum of prices over any list of dishes, whether or not they are on this menu.
    pub fn calculate_total_price(dishes: &[Dish]) -> f64 {
        dishes.iter().map(Dish::price).sum()
    }

    /// Every dish of every category, in category order.
    pub fn dishes(&self) -> impl Iterator<Item = &Dish> {
        self.categories.iter().flat_map(|c| c.dishes().iter())
    }

    /// Look up a dish by exact name.
    pub fn find_dish(&self, name: &str) -> Result<&Dish> {
        self.dishes().find(|d| d.name() == name).ok_or_else(|| {
            MenuError::InvalidDish(format!("'{}' is not on the {}", name, self.description()))
        })
    }

    /// True when every dish on the menu is vegetarian.
    pub fn is_vegetarian(&self) -> bool {
        self.dishes().all(Dish::is_vegetarian)
    }

    /// Fails with `EmptyMenu` when no category holds a dish.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.dishes().next().is_none() {
            return Err(MenuError::EmptyMenu(format!(
                "The {} has no dishes.",
                self.description()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.description())?;
        for category in &self.categories {
            write!(f, "{}", category)?;
        }
        Ok(())
    }
}
