pub mod service;
pub mod sheet_writer;

pub use service::build_dashboard;
