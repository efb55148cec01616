use anyhow::Context;
use clap::Parser;
use contracts::dashboards::d100_sales_dashboard::{DashboardOptions, SalesDashboard};

use etl::projections::p100_final_table::file_io::render_final_table;
use etl::shared::config::{load_config, Config};
use etl::shared::format::{format_amount, format_count};
use etl::system::args::{Cli, Command, ReportArgs};
use etl::usecases::u101_run_pipeline::{
    execute_build, execute_dashboard, run_pipeline, sample_sources, BuildRequest,
    DashboardRequest,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_source) = load_config(cli.config.as_deref())?;
    let log_file = etl::system::tracing::initialize(&config.logging.level, &config.logging.dir)?;
    tracing::info!(
        "sales-etl started: config={}, log={}",
        config_source,
        log_file.display()
    );

    match cli.command {
        Command::Build(args) => {
            let request = BuildRequest {
                sales: args.sales.unwrap_or_else(|| config.input.sales.clone()),
                managers: args.managers.unwrap_or_else(|| config.input.managers.clone()),
                prices: args.prices.unwrap_or_else(|| config.input.prices.clone()),
                final_table: args
                    .output
                    .unwrap_or_else(|| config.output.final_table.clone()),
                report: args.outputs.report_json.or_else(|| config.output.report.clone()),
                workbook: args
                    .outputs
                    .workbook_json
                    .or_else(|| config.output.workbook.clone()),
                options: dashboard_options(&config, &args.report),
            };

            let outcome = execute_build(&request).context("build failed")?;
            println!(
                "FinalTable: {} rows -> {}",
                format_count(outcome.rows.len()),
                request.final_table.display()
            );
            print_kpis(&outcome.dashboard);
        }
        Command::Dashboard(args) => {
            let request = DashboardRequest {
                final_table: args
                    .input
                    .unwrap_or_else(|| config.output.final_table.clone()),
                report: args.outputs.report_json.or_else(|| config.output.report.clone()),
                workbook: args
                    .outputs
                    .workbook_json
                    .or_else(|| config.output.workbook.clone()),
                options: dashboard_options(&config, &args.report),
            };
            if request.report.is_none() && request.workbook.is_none() {
                tracing::warn!("No --report-json/--workbook-json given, printing KPIs only");
            }

            let outcome = execute_dashboard(&request).context("dashboard failed")?;
            print_kpis(&outcome.dashboard);
        }
        Command::Demo(args) => {
            let outcome = run_pipeline(&sample_sources(), &dashboard_options(&config, &args));
            print!("{}", render_final_table(&outcome.rows)?);
            print_kpis(&outcome.dashboard);
        }
    }

    Ok(())
}

fn dashboard_options(config: &Config, args: &ReportArgs) -> DashboardOptions {
    let defaults = config.report.dashboard_options();
    DashboardOptions {
        top_managers: args.top.unwrap_or(defaults.top_managers),
        detail_limit: args.details.unwrap_or(defaults.detail_limit),
    }
}

fn print_kpis(dashboard: &SalesDashboard) {
    let kpi = &dashboard.kpi;
    println!("Общая сумма продаж: {}", format_amount(kpi.total_revenue));
    println!("Общее количество проданных единиц: {}", kpi.total_qty);
    println!("Средний чек: {}", format_amount(kpi.avg_check));
    println!("Активных менеджеров: {}", kpi.active_managers);
    for (place, entry) in dashboard.top_managers.iter().enumerate() {
        let name = if entry.key.is_empty() { "(без менеджера)" } else { entry.key.as_str() };
        println!("  {}. {}: {}", place + 1, name, format_amount(entry.revenue));
    }
}
