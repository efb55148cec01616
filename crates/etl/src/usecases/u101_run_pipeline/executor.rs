use contracts::dashboards::d100_sales_dashboard::{DashboardOptions, SalesDashboard};
use contracts::projections::p100_final_table::FinalSaleRow;
use contracts::usecases::u100_import_sources::RawSources;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::dashboards::d100_sales_dashboard::build_dashboard;
use crate::dashboards::d100_sales_dashboard::sheet_writer::write_dashboard_sheet;
use crate::projections::p100_final_table::build_final_table;
use crate::projections::p100_final_table::file_io::{read_final_table, write_final_table};
use crate::projections::p100_final_table::sheet_writer::write_sales_sheet;
use crate::shared::error::{EtlError, EtlResult};
use crate::shared::sheets::{MemoryWorkbook, SheetSink};
use crate::usecases::u100_import_sources::load_sources;

/// Результат одного прогона: FinalTable и посчитанный по ней дашборд
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub rows: Vec<FinalSaleRow>,
    pub dashboard: SalesDashboard,
}

/// Three input files -> FinalTable.csv (+ optional report and workbook)
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub sales: PathBuf,
    pub managers: PathBuf,
    pub prices: PathBuf,
    pub final_table: PathBuf,
    pub report: Option<PathBuf>,
    pub workbook: Option<PathBuf>,
    pub options: DashboardOptions,
}

/// Existing FinalTable.csv -> report and/or workbook
#[derive(Debug, Clone)]
pub struct DashboardRequest {
    pub final_table: PathBuf,
    pub report: Option<PathBuf>,
    pub workbook: Option<PathBuf>,
    pub options: DashboardOptions,
}

/// Pure pipeline: clean, join, assemble, aggregate. No I/O.
pub fn run_pipeline(sources: &RawSources, options: &DashboardOptions) -> PipelineOutcome {
    let rows = build_final_table(sources);
    let dashboard = build_dashboard(&rows, options);
    PipelineOutcome { rows, dashboard }
}

/// Push both sheets ("Продажи" and "Дашборд") into a sheet sink
pub fn export_to_sheets<S: SheetSink + ?Sized>(
    sink: &mut S,
    outcome: &PipelineOutcome,
) -> EtlResult<()> {
    write_sales_sheet(sink, &outcome.rows)?;
    write_dashboard_sheet(sink, &outcome.dashboard)
}

pub fn execute_build(request: &BuildRequest) -> EtlResult<PipelineOutcome> {
    let started_at = std::time::Instant::now();

    let sources = load_sources(&request.sales, &request.managers, &request.prices)?;
    let outcome = run_pipeline(&sources, &request.options);

    write_final_table(&request.final_table, &outcome.rows)?;
    write_optional_outputs(request.report.as_deref(), request.workbook.as_deref(), &outcome)?;

    tracing::info!(
        "Build finished: rows={}, elapsed_ms={}",
        outcome.rows.len(),
        started_at.elapsed().as_millis()
    );
    Ok(outcome)
}

pub fn execute_dashboard(request: &DashboardRequest) -> EtlResult<PipelineOutcome> {
    let rows = read_final_table(&request.final_table)?;
    let dashboard = build_dashboard(&rows, &request.options);
    let outcome = PipelineOutcome { rows, dashboard };

    write_optional_outputs(request.report.as_deref(), request.workbook.as_deref(), &outcome)?;
    Ok(outcome)
}

fn write_optional_outputs(
    report: Option<&Path>,
    workbook: Option<&Path>,
    outcome: &PipelineOutcome,
) -> EtlResult<()> {
    if let Some(path) = report {
        write_json(path, &outcome.dashboard)?;
        tracing::info!("Dashboard report written -> {}", path.display());
    }

    if let Some(path) = workbook {
        let mut book = MemoryWorkbook::new();
        export_to_sheets(&mut book, outcome)?;
        write_json(path, &book.snapshot())?;
        tracing::info!("Workbook written -> {}", path.display());
    }

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> EtlResult<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EtlError::io(parent, e))?;
    }
    std::fs::write(path, text).map_err(|e| EtlError::io(path, e))
}
