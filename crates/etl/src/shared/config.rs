use anyhow::Context;
use contracts::dashboards::d100_sales_dashboard::{
    DashboardOptions, DEFAULT_DETAIL_LIMIT, DEFAULT_TOP_MANAGERS,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    pub sales: PathBuf,
    pub managers: PathBuf,
    pub prices: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub final_table: PathBuf,
    /// Dashboard report as JSON
    #[serde(default)]
    pub report: Option<PathBuf>,
    /// Rendered "Продажи" + "Дашборд" sheets as JSON
    #[serde(default)]
    pub workbook: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_top_managers")]
    pub top_managers: usize,
    #[serde(default = "default_detail_limit")]
    pub detail_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

fn default_top_managers() -> usize {
    DEFAULT_TOP_MANAGERS
}

fn default_detail_limit() -> usize {
    DEFAULT_DETAIL_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    Path::new("target").join("logs")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_managers: default_top_managers(),
            detail_limit: default_detail_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: default_log_dir(),
        }
    }
}

impl ReportConfig {
    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            top_managers: self.top_managers,
            detail_limit: self.detail_limit,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[input]
sales = "Аналитика продаж.csv"
managers = "Менеджеры.csv"
prices = "Прайс.csv"

[output]
final_table = "FinalTable.csv"

[report]
top_managers = 3
detail_limit = 20

[logging]
level = "info"
dir = "target/logs"
"#;

/// Load configuration
///
/// Search order:
/// 1. Explicit path (from `--config`)
/// 2. config.toml next to the executable
/// 3. Falls back to embedded default config
///
/// Tracing is not initialised yet at this point, so the chosen source is
/// returned alongside the config and logged by the caller.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, String)> {
    if let Some(path) = explicit {
        let config = read_config_file(path)?;
        return Ok((config, path.display().to_string()));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let config = read_config_file(&config_path)?;
                return Ok((config, config_path.display().to_string()));
            }
        }
    }

    let config = parse_config(DEFAULT_CONFIG)?;
    Ok((config, "embedded default".to_string()))
}

fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.input.prices, PathBuf::from("Прайс.csv"));
        assert_eq!(config.output.final_table, PathBuf::from("FinalTable.csv"));
        assert!(config.output.report.is_none());
        assert_eq!(config.report.top_managers, 3);
        assert_eq!(config.report.detail_limit, 20);
    }

    #[test]
    fn test_optional_sections_fall_back_to_defaults() {
        let config = parse_config(
            r#"
            [input]
            sales = "s.csv"
            managers = "m.csv"
            prices = "p.csv"

            [output]
            final_table = "out.csv"
            report = "dash.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.report, Some(PathBuf::from("dash.json")));
        assert_eq!(config.report.dashboard_options(), DashboardOptions::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_input_section_is_an_error() {
        assert!(parse_config("[output]\nfinal_table = \"x.csv\"\n").is_err());
    }
}
