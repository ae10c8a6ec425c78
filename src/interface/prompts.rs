use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::{Dish, TimeOfDay};

const FUZZY_THRESHOLD: f64 = 0.7;
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for a time of day until a valid `HH:MM` is entered.
pub fn prompt_time() -> Result<TimeOfDay> {
    loop {
        let input: String = Input::new()
            .with_prompt("What time is it? (HH:MM)")
            .default("14:00".to_string())
            .interact_text()?;

        match TimeOfDay::parse(&input) {
            Ok(time) => return Ok(time),
            Err(e) => println!("{}", e),
        }
    }
}

/// Let the user tick dishes to order.
pub fn prompt_order(dishes: &[&Dish]) -> Result<Vec<Dish>> {
    let labels: Vec<String> = dishes.iter().map(|d| d.to_string()).collect();

    let picked = MultiSelect::new()
        .with_prompt("Select dishes to order (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(picked.into_iter().map(|i| dishes[i].clone()).collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Dishes whose name is close to `input`, best match first.
pub fn suggest_dishes<'a>(dishes: &[&'a Dish], input: &str) -> Vec<&'a Dish> {
    let needle = input.to_lowercase();
    let mut candidates: Vec<(&Dish, f64)> = dishes
        .iter()
        .map(|d| (*d, jaro_winkler(&d.name().to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(d, _)| d)
        .collect()
}

/// Map a typed dish name to a dish.
///
/// A case-insensitive exact match on the full name wins. Otherwise the user picks from fuzzy
/// suggestions; declining or having none is `InvalidDish`.
pub fn resolve_dish<'a>(dishes: &[&'a Dish], input: &str) -> Result<&'a Dish> {
    let input = input.trim();
    if let Some(dish) = dishes
        .iter()
        .find(|d| d.name().eq_ignore_ascii_case(input))
    {
        return Ok(*dish);
    }

    let not_found = || MenuError::InvalidDish(format!("The dish '{}' does not exist.", input));
    let candidates = suggest_dishes(dishes, input);

    match candidates.as_slice() {
        [] => Err(not_found()),
        [only] => {
            if prompt_yes_no(&format!("Did you mean '{}'?", only.name()), true)? {
                Ok(*only)
            } else {
                Err(not_found())
            }
        }
        many => {
            let mut options: Vec<&str> = many.iter().map(|d| d.name()).collect();
            options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            many.get(selection).copied().ok_or_else(not_found)
        }
    }
}
