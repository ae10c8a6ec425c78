use clap::{Parser, Subcommand};

use crate::models::MenuKind;

/// Restaurant menu: time-windowed breakfast, lunch and dinner menus.
#[derive(Parser, Debug)]
#[command(name = "restaurant_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log debug details (menu changes, sorting, lookups).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the sample restaurant end to end.
    Demo,

    /// Print one or all menus.
    Show {
        /// Only this menu.
        #[arg(short, long, value_enum)]
        kind: Option<MenuKind>,

        /// Sort each category's dishes by name first.
        #[arg(long)]
        sorted: bool,

        /// List every dish's ingredients.
        #[arg(long)]
        details: bool,

        /// Print categories as JSON instead of text.
        #[arg(long, conflicts_with = "details")]
        json: bool,
    },

    /// Show which menus are open at a time of day.
    Available {
        /// Time in HH:MM (24-hour). Prompted for when omitted.
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Price an order.
    Order {
        /// Dish to order; repeat for several. Pick interactively when omitted.
        #[arg(short, long = "dish")]
        dishes: Vec<String>,
    },

    /// Report which menus are fully vegetarian.
    Vegetarian,
}

impl Default for Command {
    fn default() -> Self {
        Command::Demo
    }
}
