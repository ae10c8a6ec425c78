use crate::models::{Dish, Menu};

/// Total price of an order. Same as [`Menu::calculate_total_price`].
#[inline]
pub fn total_price(dishes: &[Dish]) -> f64 {
    Menu::calculate_total_price(dishes)
}

/// Arithmetic mean of any numeric values, or `None` when there are none.
pub fn average<T>(values: &[T]) -> Option<f64>
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| v.into()).sum();
    Some(sum / values.len() as f64)
}

/// Average dish price, or `None` for an empty order.
pub fn average_price(dishes: &[Dish]) -> Option<f64> {
    let prices: Vec<f64> = dishes.iter().map(Dish::price).collect();
    average(&prices)
}

/// Join names with a single space.
pub fn concatenate_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| n.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_floats() {
        let avg = average(&[20.0_f64, 18.0, 15.0, 12.0, 10.0, 30.0]).unwrap();
        assert!((avg - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_average_integers() {
        let avg = average(&[10_i32, 20, 15, 12, 25]).unwrap();
        assert!((avg - 16.4).abs() < 1e-9);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average::<f64>(&[]), None);
        assert_eq!(average_price(&[]), None);
    }

    #[test]
    fn test_concatenate_names() {
        assert_eq!(
            concatenate_names(&["Margherita Pizza", "Chocolate Cake"]),
            "Margherita Pizza Chocolate Cake"
        );
        assert_eq!(concatenate_names::<String>(&[]), "");
    }
}
