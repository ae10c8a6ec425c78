use crate::models::{Dish, Menu, MenuKind, TimeOfDay};
use crate::pricing::{average_price, total_price};
use crate::state::MenuInventory;

/// Print one menu: header, then each category with its dishes.
pub fn display_menu(menu: &Menu) {
    print!("{}", menu);
}

/// Print every menu in the inventory, separated by blank lines.
pub fn display_menus(inventory: &MenuInventory, title: &str) {
    if inventory.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!("=== {} ({} menus) ===", title, inventory.len());
    for menu in inventory.menus() {
        display_menu(menu);
        println!();
    }
}

/// One "is / is not available" line per menu.
pub fn availability_lines(inventory: &MenuInventory, time: TimeOfDay) -> Vec<String> {
    inventory
        .menus()
        .iter()
        .map(|menu| {
            let verb = if menu.is_available_at(time) { "is" } else { "is not" };
            format!("{} menu {} available at {}.", menu.kind(), verb, time)
        })
        .collect()
}

pub fn display_availability(inventory: &MenuInventory, time: TimeOfDay) {
    println!("---------- Availability Check at {} ----------", time);
    for line in availability_lines(inventory, time) {
        println!("{}", line);
    }
}

pub fn vegetarian_lines(inventory: &MenuInventory) -> Vec<String> {
    inventory
        .menus()
        .iter()
        .map(|menu| {
            let answer = if menu.is_vegetarian() { "Yes" } else { "No" };
            format!(
                "Is the {} menu vegetarian? {}",
                menu.kind().name().to_lowercase(),
                answer
            )
        })
        .collect()
}

pub fn display_vegetarian_check(inventory: &MenuInventory) {
    println!("---------- Vegetarian Check ----------");
    for line in vegetarian_lines(inventory) {
        println!("{}", line);
    }
}

/// Print an order as a list followed by its total and average price.
pub fn display_order_total(dishes: &[Dish]) {
    if dishes.is_empty() {
        println!("Nothing ordered.");
        return;
    }

    let width = dishes.iter().map(|d| d.name().len()).max().unwrap_or(10);
    for (i, dish) in dishes.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} {:>7.2} RON",
            i + 1,
            dish.name(),
            dish.price(),
            width = width
        );
    }

    println!();
    println!("Total price for ordered dishes: {} RON", total_price(dishes));
    if let Some(avg) = average_price(dishes) {
        println!("Average price per dish: {:.2} RON", avg);
    }
}

/// Picks how a menu banner is worded, one style per menu kind.
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext {
    style: MenuKind,
}

impl DisplayContext {
    pub fn new(style: MenuKind) -> Self {
        Self { style }
    }

    /// Switch to another kind's wording.
    pub fn set_style(&mut self, style: MenuKind) {
        self.style = style;
    }

    /// Banner line for `menu_name` in the current style.
    pub fn banner(&self, menu_name: &str) -> String {
        format!(
            "Displaying {} menu with {} items!",
            menu_name,
            self.style.name().to_lowercase()
        )
    }

    pub fn display_menu(&self, menu_name: &str) {
        println!("{}", self.banner(menu_name));
    }
}
