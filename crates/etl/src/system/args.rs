//! CLI argument definitions using clap
//!
//! - sales-etl build        # three source files -> FinalTable.csv (+ report)
//! - sales-etl dashboard    # FinalTable.csv -> dashboard report / workbook
//! - sales-etl demo         # built-in sample data, printed to stdout
//!
//! Any path or number given here overrides config.toml.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sales-etl")]
#[command(about = "Cleans sales, manager and price-list files and builds the sales dashboard")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (default: config.toml next to the executable)
    #[arg(long, global = true, env = "SALES_ETL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build FinalTable.csv from the sales, managers and prices files
    Build(BuildArgs),
    /// Build the dashboard from an existing FinalTable.csv
    Dashboard(DashboardArgs),
    /// Run the pipeline on built-in sample data
    Demo(ReportArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Sales file ("Аналитика продаж.csv")
    #[arg(long)]
    pub sales: Option<PathBuf>,

    /// Order -> manager/city file
    #[arg(long)]
    pub managers: Option<PathBuf>,

    /// Price list file
    #[arg(long)]
    pub prices: Option<PathBuf>,

    /// Where to write FinalTable.csv
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub outputs: ExtraOutputs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// FinalTable.csv to read
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub outputs: ExtraOutputs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug)]
pub struct ExtraOutputs {
    /// Write the dashboard report as JSON
    #[arg(long)]
    pub report_json: Option<PathBuf>,

    /// Write both sheets ("Продажи", "Дашборд") as JSON
    #[arg(long)]
    pub workbook_json: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Number of managers in the top list
    #[arg(long)]
    pub top: Option<usize>,

    /// Number of rows in the detail table
    #[arg(long)]
    pub details: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "sales-etl",
            "build",
            "--sales",
            "s.csv",
            "-o",
            "out.csv",
            "--report-json",
            "dash.json",
            "--top",
            "5",
        ])
        .unwrap();

        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.sales, Some(PathBuf::from("s.csv")));
                assert_eq!(args.managers, None);
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
                assert_eq!(args.outputs.report_json, Some(PathBuf::from("dash.json")));
                assert_eq!(args.report.top, Some(5));
                assert_eq!(args.report.details, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_demo_with_global_config() {
        let cli = Cli::try_parse_from(["sales-etl", "demo", "--config", "c.toml", "--details", "1"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Command::Demo(ReportArgs { details: Some(1), .. })));
    }
}
