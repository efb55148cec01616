pub mod u100_import_sources;
