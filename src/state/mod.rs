mod catalog;
mod inventory;
mod manager;

pub use catalog::{parse_catalog, sample_catalog, SAMPLE_CATALOG_JSON};
pub use inventory::MenuInventory;
pub use manager::MenuManager;
