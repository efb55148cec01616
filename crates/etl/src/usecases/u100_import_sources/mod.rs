pub mod columns;
pub mod reader;

pub use reader::{load_sources, parse_managers, parse_prices, parse_sales};
