use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{MenuError, Result};
use crate::models::{Category, Dish, FoodType, Ingredient, Menu, MenuKind};
use crate::state::MenuInventory;

/// The bundled sample restaurant.
pub const SAMPLE_CATALOG_JSON: &str = include_str!("../../data/sample_menu.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "Ingredients", default)]
    ingredients: Vec<Ingredient>,

    #[serde(rename = "Dishes", default)]
    dishes: Vec<DishEntry>,

    #[serde(rename = "Categories", default)]
    categories: Vec<CategoryEntry>,

    #[serde(rename = "Menus", default)]
    menus: Vec<MenuEntry>,
}

#[derive(Debug, Deserialize)]
struct DishEntry {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Price")]
    price: f64,

    #[serde(rename = "Weight", default)]
    weight: f64,

    #[serde(rename = "Ingredients", default)]
    ingredients: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Dishes", default)]
    dishes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MenuEntry {
    #[serde(rename = "Kind")]
    kind: MenuKind,

    #[serde(rename = "Categories", default)]
    categories: Vec<String>,
}

/// Build an inventory from catalog JSON.
///
/// Dishes refer to ingredients, categories to dishes and menus to categories,
/// all by exact name. When a name is defined twice the last definition wins.
pub fn parse_catalog(json: &str) -> Result<MenuInventory> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let ingredients: HashMap<String, FoodType> = file
        .ingredients
        .into_iter()
        .map(|i| (i.name().to_string(), i.food_type()))
        .collect();

    let mut dishes: HashMap<String, Dish> = HashMap::new();
    for entry in file.dishes {
        let parts = entry
            .ingredients
            .iter()
            .map(|name| {
                ingredients
                    .get(name)
                    .map(|&food_type| Ingredient::new(name.clone(), food_type))
                    .ok_or_else(|| {
                        MenuError::NotFound(format!(
                            "ingredient '{}' used by dish '{}'",
                            name, entry.name
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let dish = Dish::new(entry.name.clone(), entry.price, entry.weight, parts);
        dishes.insert(entry.name, dish);
    }

    let mut categories: HashMap<String, Category> = HashMap::new();
    for entry in file.categories {
        let members = entry
            .dishes
            .iter()
            .map(|name| {
                dishes.get(name).cloned().ok_or_else(|| {
                    MenuError::InvalidDish(format!(
                        "'{}' listed in category '{}' is not defined",
                        name, entry.name
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        categories.insert(entry.name.clone(), Category::new(entry.name, members));
    }

    let mut inventory = MenuInventory::default();
    for entry in file.menus {
        let sections = entry
            .categories
            .iter()
            .map(|name| {
                categories.get(name).cloned().ok_or_else(|| {
                    MenuError::NotFound(format!(
                        "category '{}' used by the {} menu",
                        name, entry.kind
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        inventory.add_menu(Menu::new(entry.kind, sections));
    }

    Ok(inventory)
}

/// The bundled sample restaurant: breakfast, lunch and dinner.
pub fn sample_catalog() -> Result<MenuInventory> {
    parse_catalog(SAMPLE_CATALOG_JSON)
}
