pub mod executor;
pub mod sample;

pub use executor::{
    execute_build, execute_dashboard, export_to_sheets, run_pipeline, BuildRequest,
    DashboardRequest, PipelineOutcome,
};
pub use sample::sample_sources;
