use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad food group of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodType {
    Vegetable,
    Dairy,
    Meat,
    Spice,
    Sauce,
    Dessert,
    Cereal,
}

impl FoodType {
    pub fn name(&self) -> &'static str {
        match self {
            FoodType::Vegetable => "vegetable",
            FoodType::Dairy => "dairy",
            FoodType::Meat => "meat",
            FoodType::Spice => "spice",
            FoodType::Sauce => "sauce",
            FoodType::Dessert => "dessert",
            FoodType::Cereal => "cereal",
        }
    }
}

/// A named food component. Plain value: equal when name and type are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Type")]
    food_type: FoodType,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, food_type: FoodType) -> Self {
        Self {
            name: name.into(),
            food_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn food_type(&self) -> FoodType {
        self.food_type
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
