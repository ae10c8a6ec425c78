use log::info;

use crate::error::{MenuError, Result};
use crate::interface::{
    display_availability, display_menu, display_menus, display_vegetarian_check, DisplayContext,
};
use crate::models::{Category, Dish, Menu, MenuKind, TimeOfDay};
use crate::notify::MenuChangeLogger;
use crate::pricing::{average, concatenate_names, total_price};
use crate::state::{MenuInventory, MenuManager};

/// Time used for the availability part of the walk-through.
pub const DEMO_TIME: &str = "14:00";

fn simulate_invalid_time() -> Result<()> {
    Err(MenuError::InvalidTime(
        "The specified time for the menu is invalid.".to_string(),
    ))
}

fn simulate_empty_menu() -> Result<()> {
    Err(MenuError::EmptyMenu("The menu is empty.".to_string()))
}

fn simulate_invalid_dish() -> Result<()> {
    Err(MenuError::InvalidDish(
        "The specified dish does not exist.".to_string(),
    ))
}

/// Line printed for a handled error, or `None` on success.
pub fn error_report(result: Result<()>) -> Option<String> {
    result
        .err()
        .map(|e| format!("An error occurred: {}", e.message()))
}

/// Produce one error of each domain kind and report it.
pub fn error_showcase() -> Vec<String> {
    [
        simulate_invalid_time(),
        simulate_empty_menu(),
        simulate_invalid_dish(),
    ]
    .into_iter()
    .filter_map(error_report)
    .collect()
}

/// Run the real checks against a menu: time format, non-empty, and a dish lookup.
pub fn check_menu(menu: &Menu, time: &str, dish: &str) -> Result<()> {
    menu.is_available_at_str(time)?;
    menu.ensure_not_empty()?;
    menu.find_dish(dish)?;
    Ok(())
}

/// Look up each name across the inventory and clone the matches.
pub fn order_by_names(inventory: &MenuInventory, names: &[&str]) -> Result<Vec<Dish>> {
    names
        .iter()
        .map(|name| {
            inventory.find_dish(name).cloned().ok_or_else(|| {
                MenuError::InvalidDish(format!("The dish '{}' does not exist.", name))
            })
        })
        .collect()
}

/// Full walk-through over the given inventory.
pub fn run_demo(mut inventory: MenuInventory) -> Result<()> {
    println!("---------- Menus ----------");
    display_menus(&inventory, "Menus");
    println!("Number of dishes: {}", inventory.dish_count());

    let prices: Vec<f64> = inventory.all_dishes().iter().map(|d| d.price()).collect();
    if let Some(avg) = average(&prices) {
        println!("Average price of dishes: {:.2} RON", avg);
    }
    if let Some(avg) = average(&[10_i32, 20, 15, 12, 25]) {
        println!("Average integer price: {}", avg as i64);
    }
    println!(
        "Concatenated dish names: {}",
        concatenate_names(&["Margherita Pizza", "Chicken Caesar Salad", "Chocolate Cake"])
    );

    let ordered = order_by_names(&inventory, &["Margherita Pizza", "Chocolate Cake"])?;
    println!("Total price for ordered dishes: {} RON", total_price(&ordered));
    println!();

    display_vegetarian_check(&inventory);
    println!();

    let time = TimeOfDay::parse(DEMO_TIME)?;
    display_availability(&inventory, time);

    let mut context = DisplayContext::new(MenuKind::Breakfast);
    for kind in MenuKind::ALL {
        context.set_style(kind);
        println!();
        println!("---------- Display Style: {} Menu ----------", kind);
        context.display_menu(kind.name());
    }
    println!();

    for line in error_showcase() {
        println!("{}", line);
    }

    if let Some(breakfast) = inventory.get_mut(MenuKind::Breakfast) {
        breakfast.attach(Box::new(MenuChangeLogger));
        breakfast.add_category(Category::new("Pancakes", Vec::new()))?;
        breakfast.remove_category("Pancakes")?;
    }

    let breakfast_inventory = MenuInventory::new(vec![
        Menu::breakfast(vec![Category::new(
            "Pancakes",
            vec![Dish::new("Pancake", 10.0, 150.0, Vec::new())],
        )]),
        Menu::breakfast(vec![Category::new(
            "Eggs",
            vec![Dish::new("Scrambled Eggs", 15.0, 200.0, Vec::new())],
        )]),
    ]);
    println!();
    display_menus(&breakfast_inventory, "Breakfast Inventory");

    let mut manager = MenuManager::default();
    if let Some(breakfast) = inventory.take(MenuKind::Breakfast) {
        manager.set_menu(breakfast);
    }
    manager.sort_categories();
    println!("Current menu, sorted:");
    manager.display_menu();

    if let Some(menu) = manager.menu() {
        if let Some(line) = error_report(check_menu(menu, "10:00", "Pizza")) {
            println!("{}", line);
        }
    }

    info!("Demo finished");
    Ok(())
}

/// Print one menu, optionally sorted first.
pub fn show_menu(menu: &mut Menu, sorted: bool, details: bool) {
    if sorted {
        menu.sort_categories();
    }
    if !details {
        display_menu(menu);
        return;
    }

    println!("{}:", menu.description());
    for category in menu.categories() {
        println!("Category: {}", category.name());
        for dish in category.dishes() {
            print!("{}", dish.detailed());
        }
    }
}
