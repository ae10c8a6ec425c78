pub mod prompts;
pub mod render;

pub use prompts::{prompt_order, prompt_time, prompt_yes_no, resolve_dish};
pub use render::{
    availability_lines, display_availability, display_menu, display_menus, display_order_total,
    display_vegetarian_check, vegetarian_lines, DisplayContext,
};
