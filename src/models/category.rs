use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Dish, TimeOfDay};

/// A named group of dishes within a menu (e.g. "Desserts").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Dishes", default)]
    dishes: Vec<Dish>,
}

impl Category {
    pub fn new(name: impl Into<String>, dishes: Vec<Dish>) -> Self {
        Self {
            name: name.into(),
            dishes,
        }
    }

    /// Category name, as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the dishes in their current order.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Stable sort by dish name, byte-wise and case-sensitive.
    pub fn sort_dishes_alphabetically(&mut self) {
        self.dishes.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Categories never gate availability on their own; the owning menu does.
    pub fn is_available_at(&self, _time: TimeOfDay) -> bool {
        true
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Category: {}", self.name)?;
        for dish in &self.dishes {
            writeln!(f, "{}", dish)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str) -> Dish {
        Dish::new(name, 10.0, 100.0, Vec::new())
    }

    fn names(category: &Category) -> Vec<&str> {
        category.dishes().iter().map(|d| d.name()).collect()
    }

    #[test]
    fn test_insertion_order_preserved() {
        let category = Category::new("Lunch", vec![dish("Soup"), dish("Bread"), dish("Pasta")]);
        assert_eq!(names(&category), ["Soup", "Bread", "Pasta"]);
    }

    #[test]
    fn test_sort_alphabetically() {
        let mut category = Category::new("Lunch", vec![dish("Soup"), dish("Bread"), dish("Pasta")]);
        category.sort_dishes_alphabetically();
        assert_eq!(names(&category), ["Bread", "Pasta", "Soup"]);
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let mut category = Category::new("Mixed", vec![dish("apple pie"), dish("Zucchini")]);
        category.sort_dishes_alphabetically();
        assert_eq!(names(&category), ["Zucchini", "apple pie"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let cheap = Dish::new("Tea", 3.0, 200.0, Vec::new());
        let dear = Dish::new("Tea", 9.0, 200.0, Vec::new());
        let mut category = Category::new("Drinks", vec![dear.clone(), dish("Coffee"), cheap.clone()]);
        category.sort_dishes_alphabetically();
        assert_eq!(category.dishes()[1], dear);
        assert_eq!(category.dishes()[2], cheap);
    }

    #[test]
    fn test_always_available() {
        let category = Category::new("Anything", Vec::new());
        assert!(category.is_available_at(TimeOfDay::new(3, 0).unwrap()));
        assert!(category.is_available_at(TimeOfDay::new(23, 59).unwrap()));
    }

    #[test]
    fn test_display() {
        let category = Category::new("Desserts", vec![Dish::new("Chocolate Cake", 15.0, 150.0, Vec::new())]);
        assert_eq!(category.to_string(), "Category: Desserts\nChocolate Cake: 15 RON\n");
    }
}
