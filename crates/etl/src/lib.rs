//! Sales ETL: cleans the sales, manager and price-list sources, joins them
//! into the FinalTable and builds the dashboard reports from it.

pub mod dashboards;
pub mod projections;
pub mod shared;
pub mod system;
pub mod usecases;
