pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod notify;
pub mod pricing;
pub mod showcase;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{Category, Dish, FoodType, Ingredient, Menu, MenuKind, TimeOfDay};
