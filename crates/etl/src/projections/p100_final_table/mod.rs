pub mod file_io;
pub mod join;
pub mod projection_builder;
pub mod sheet_writer;

pub use projection_builder::build_final_table;
