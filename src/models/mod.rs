mod category;
mod dish;
mod ingredient;
mod menu;
mod time;

pub use category::Category;
pub use dish::Dish;
pub use ingredient::{FoodType, Ingredient};
pub use menu::{Menu, MenuKind, MenuWindow};
pub use time::TimeOfDay;
