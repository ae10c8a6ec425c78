use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{FoodType, Ingredient};

/// A priced menu item built from ingredients.
///
/// Prices are in RON. Nothing is validated at construction: a negative price or
/// an empty name is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Price")]
    price: f64,

    /// Weight in grams. Carried for display only.
    #[serde(rename = "Weight", default)]
    weight: f64,

    #[serde(rename = "Ingredients", default)]
    ingredients: Vec<Ingredient>,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        weight: f64,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            weight,
            ingredients,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// True unless some ingredient is meat. A dish without ingredients counts as vegetarian.
    pub fn is_vegetarian(&self) -> bool {
        !self
            .ingredients
            .iter()
            .any(|i| i.food_type() == FoodType::Meat)
    }

    /// Extended rendering: name, price and one line per ingredient.
    pub fn detailed(&self) -> String {
        let mut out = format!("Dish: {} - Price: {} RON\n", self.name, self.price);
        out.push_str("Ingredients:\n");
        for ingredient in &self.ingredients {
            out.push_str(&format!("  - {} ({})\n", ingredient, ingredient.food_type().name()));
        }
        out
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} RON", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> Dish {
        Dish::new(
            "Margherita Pizza",
            20.0,
            250.0,
            vec![
                Ingredient::new("Tomatoes", FoodType::Vegetable),
                Ingredient::new("Mozzarella", FoodType::Dairy),
                Ingredient::new("Basil", FoodType::Spice),
            ],
        )
    }

    #[test]
    fn test_is_vegetarian_without_meat() {
        assert!(pizza().is_vegetarian());
    }

    #[test]
    fn test_is_vegetarian_with_meat() {
        let salad = Dish::new(
            "Chicken Caesar Salad",
            18.0,
            200.0,
            vec![
                Ingredient::new("Tomatoes", FoodType::Vegetable),
                Ingredient::new("Chicken", FoodType::Meat),
            ],
        );
        assert!(!salad.is_vegetarian());
    }

    #[test]
    fn test_empty_ingredients_is_vegetarian() {
        let dish = Dish::new("Water", 2.0, 500.0, Vec::new());
        assert!(dish.is_vegetarian());
    }

    #[test]
    fn test_negative_price_accepted() {
        let dish = Dish::new("Refund", -5.0, 0.0, Vec::new());
        assert_eq!(dish.price(), -5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(pizza().to_string(), "Margherita Pizza: 20 RON");
    }

    #[test]
    fn test_detailed_lists_ingredients() {
        let text = pizza().detailed();
        assert!(text.starts_with("Dish: Margherita Pizza - Price: 20 RON\n"));
        assert!(text.contains("  - Tomatoes (vegetable)\n"));
        assert!(text.contains("  - Basil (spice)\n"));
    }
}
