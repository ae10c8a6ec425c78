use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use restaurant_menu_rs::cli::{Cli, Command};
use restaurant_menu_rs::error::Result;
use restaurant_menu_rs::interface::{
    display_availability, display_order_total, display_vegetarian_check, prompt_order,
    prompt_time, resolve_dish,
};
use restaurant_menu_rs::models::{Dish, Menu, MenuKind, TimeOfDay};
use restaurant_menu_rs::showcase::{run_demo, show_menu};
use restaurant_menu_rs::state::{sample_catalog, MenuInventory};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let inventory = sample_catalog()?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Demo => run_demo(inventory),
        Command::Show {
            kind,
            sorted,
            details,
            json,
        } => cmd_show(inventory, kind, sorted, details, json),
        Command::Available { time } => cmd_available(&inventory, time.as_deref()),
        Command::Order { dishes } => cmd_order(&inventory, &dishes),
        Command::Vegetarian => {
            display_vegetarian_check(&inventory);
            Ok(())
        }
    }
}

/// Print one or all menus.
fn cmd_show(
    mut inventory: MenuInventory,
    kind: Option<MenuKind>,
    sorted: bool,
    details: bool,
    json: bool,
) -> Result<()> {
    let kinds: Vec<MenuKind> = match kind {
        Some(k) => vec![k],
        None => MenuKind::ALL.to_vec(),
    };

    for kind in kinds {
        let Some(menu) = inventory.get_mut(kind) else {
            println!("No {} menu.", kind);
            continue;
        };

        if json {
            if sorted {
                menu.sort_categories();
            }
            println!("{}", serde_json::to_string_pretty(menu.categories())?);
        } else {
            show_menu(menu, sorted, details);
            println!();
        }
    }

    Ok(())
}

/// Report which menus are open at the given (or prompted) time.
fn cmd_available(inventory: &MenuInventory, time: Option<&str>) -> Result<()> {
    let time = match time {
        Some(t) => TimeOfDay::parse(t)?,
        None => prompt_time()?,
    };

    display_availability(inventory, time);

    let open: Vec<&Menu> = inventory.available_at(time);
    if open.is_empty() {
        println!("The kitchen is closed at {}.", time);
    }

    Ok(())
}

/// Price an order given by name, or picked interactively.
fn cmd_order(inventory: &MenuInventory, names: &[String]) -> Result<()> {
    let all = inventory.all_dishes();

    let order: Vec<Dish> = if names.is_empty() {
        for menu in inventory.menus() {
            menu.ensure_not_empty()?;
        }
        prompt_order(&all)?
    } else {
        names
            .iter()
            .map(|name| resolve_dish(&all, name).cloned())
            .collect::<Result<_>>()?
    };

    println!();
    display_order_total(&order);
    Ok(())
}
