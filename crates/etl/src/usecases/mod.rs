pub mod u100_import_sources;
pub mod u101_run_pipeline;
