use log::debug;

use crate::models::Menu;

/// Holds the current menu, if any.
///
/// Create one at startup and pass it by reference to whatever needs it.
#[derive(Debug, Default)]
pub struct MenuManager {
    menu: Option<Menu>,
}

impl MenuManager {
    /// Create a manager, optionally holding a menu already.
    pub fn new(initial: Option<Menu>) -> Self {
        Self { menu: initial }
    }

    /// Replace the current menu, handing back the one it held.
    pub fn set_menu(&mut self, menu: Menu) -> Option<Menu> {
        debug!("Current menu set to {}", menu.description());
        self.menu.replace(menu)
    }

    /// The current menu, if set.
    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    /// Check if a menu is set.
    pub fn has_menu(&self) -> bool {
        self.menu.is_some()
    }

    /// Text of the current menu, if set.
    pub fn render_menu(&self) -> Option<String> {
        self.menu.as_ref().map(|m| m.to_string())
    }

    /// Print the current menu. Does nothing when no menu is set.
    pub fn display_menu(&self) {
        if let Some(menu) = self.menu.as_ref() {
            crate::interface::display_menu(menu);
        }
    }

    /// Sort the current menu's categories. Does nothing when no menu is set.
    pub fn sort_categories(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.sort_categories();
        }
    }
}
