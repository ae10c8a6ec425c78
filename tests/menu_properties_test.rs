use std::cell::RefCell;
use std::rc::Rc;

use assert_float_eq::*;

use restaurant_menu_rs::error::Result;
use restaurant_menu_rs::models::{Category, Dish, FoodType, Ingredient, Menu, TimeOfDay};

fn dish(name: &str, price: f64, types: &[FoodType]) -> Dish {
    let ingredients = types
        .iter()
        .enumerate()
        .map(|(i, &t)| Ingredient::new(format!("ingredient-{}", i), t))
        .collect();
    Dish::new(name, price, 100.0, ingredients)
}

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

fn category_names(menu: &Menu) -> Vec<String> {
    menu.categories().iter().map(|c| c.name().to_string()).collect()
}

fn recording_menu() -> (Menu, Rc<RefCell<Vec<String>>>) {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&messages);

    let mut menu = Menu::breakfast(vec![Category::new(
        "Breakfast",
        vec![dish("Pancakes", 12.0, &[FoodType::Cereal])],
    )]);
    menu.attach(Box::new(move |msg: &str| -> Result<()> {
        sink.borrow_mut().push(msg.to_string());
        Ok(())
    }));
    (menu, messages)
}

#[test]
fn test_total_price_is_sum_of_prices() {
    let dishes = vec![
        dish("Margherita Pizza", 20.0, &[]),
        dish("Chocolate Cake", 15.0, &[]),
        dish("Espresso", 7.3, &[]),
    ];
    assert_float_absolute_eq!(Menu::calculate_total_price(&dishes), 42.3, 1e-9);
    assert_float_absolute_eq!(Menu::calculate_total_price(&[]), 0.0, 1e-12);
}

#[test]
fn test_total_price_ignores_menu_contents() {
    // Dishes need not belong to any menu.
    let outside = vec![dish("Off-menu Special", 99.0, &[])];
    assert_float_absolute_eq!(Menu::calculate_total_price(&outside), 99.0, 1e-12);
}

#[test]
fn test_vegetarian_iff_no_meat() {
    let all_types = [
        FoodType::Vegetable,
        FoodType::Dairy,
        FoodType::Spice,
        FoodType::Sauce,
        FoodType::Dessert,
        FoodType::Cereal,
    ];
    assert!(dish("Veggie", 10.0, &all_types).is_vegetarian());
    assert!(dish("Nothing", 10.0, &[]).is_vegetarian());

    for position in 0..=all_types.len() {
        let mut types = all_types.to_vec();
        types.insert(position, FoodType::Meat);
        assert!(!dish("Meaty", 10.0, &types).is_vegetarian());
    }
}

#[test]
fn test_sort_is_idempotent_permutation() {
    let unsorted = vec![
        dish("Soup", 9.0, &[]),
        dish("Bread", 3.0, &[]),
        dish("Pasta", 22.0, &[]),
        dish("Bread", 4.0, &[]),
    ];
    let mut category = Category::new("Lunch", unsorted.clone());

    category.sort_dishes_alphabetically();
    let once = category.dishes().to_vec();
    category.sort_dishes_alphabetically();
    assert_eq!(category.dishes(), once.as_slice());

    assert_eq!(once.len(), unsorted.len());
    for d in &unsorted {
        assert!(once.contains(d));
    }
    let names: Vec<&str> = once.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["Bread", "Bread", "Pasta", "Soup"]);
}

#[test]
fn test_availability_boundaries() {
    let breakfast = Menu::breakfast(Vec::new());
    assert!(breakfast.is_available_at(t("08:00")));
    assert!(breakfast.is_available_at(t("09:59")));
    assert!(!breakfast.is_available_at(t("10:01")));
    assert!(!breakfast.is_available_at(t("07:59")));

    let lunch = Menu::lunch(Vec::new());
    assert!(lunch.is_available_at(t("12:00")));
    assert!(lunch.is_available_at(t("16:00")));
    assert!(!lunch.is_available_at(t("16:01")));

    let dinner = Menu::dinner(Vec::new());
    assert!(dinner.is_available_at(t("18:00")));
    assert!(dinner.is_available_at(t("22:00")));
    assert!(!dinner.is_available_at(t("22:01")));
    assert!(!dinner.is_available_at(t("17:59")));
}

#[test]
fn test_add_then_remove_restores_and_notifies_twice() {
    let (mut menu, messages) = recording_menu();
    let before = category_names(&menu);

    menu.add_category(Category::new("Pancakes", Vec::new())).unwrap();
    menu.remove_category("Pancakes").unwrap();

    assert_eq!(category_names(&menu), before);
    assert_eq!(
        *messages.borrow(),
        ["Category added: Pancakes", "Category removed: Pancakes"]
    );
}

#[test]
fn test_remove_missing_category_is_silent() {
    let (mut menu, messages) = recording_menu();
    let before = category_names(&menu);

    menu.remove_category("Brunch").unwrap();

    assert_eq!(category_names(&menu), before);
    assert!(messages.borrow().is_empty());
}

#[test]
fn test_category_copy_does_not_alias() {
    let (menu, _) = recording_menu();
    let mut copy = menu.category();
    copy.push(Category::new("Extra", Vec::new()));
    assert_eq!(menu.categories().len(), 1);
}
