use serde::{Deserialize, Serialize};

/// Заголовок таблицы детализации: Date, Manager, Product, Qty, Sum
pub const DETAIL_TABLE_HEADER: [&str; 5] = ["Дата", "Менеджер", "Товар", "Кол-во", "Сумма"];

pub const DEFAULT_TOP_MANAGERS: usize = 3;
pub const DEFAULT_DETAIL_LIMIT: usize = 20;

/// Options for building the sales dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// How many managers go into the top list
    pub top_managers: usize,
    /// How many FinalTable rows go into the detail table
    pub detail_limit: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_managers: DEFAULT_TOP_MANAGERS,
            detail_limit: DEFAULT_DETAIL_LIMIT,
        }
    }
}

/// KPI-блоки дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub total_qty: f64,
    /// total_revenue / row count, 0 when there are no rows
    pub avg_check: f64,
    /// Distinct non-empty manager names
    pub active_managers: usize,
}

/// One (key, revenue) pair of a grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub key: String,
    pub revenue: f64,
}

impl RevenueEntry {
    pub fn new(key: impl Into<String>, revenue: f64) -> Self {
        Self {
            key: key.into(),
            revenue,
        }
    }
}

/// Single row of the detail table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub date: String,
    pub manager: String,
    pub product: String,
    pub qty: f64,
    pub sum: f64,
}

/// Таблица детализации: фиксированный заголовок + первые N строк
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailTable {
    pub header: Vec<String>,
    pub body: Vec<DetailRow>,
}

/// Full dashboard report computed from one FinalTable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDashboard {
    pub kpi: KpiSummary,
    /// Ascending by month tag (plain string order)
    pub revenue_by_month: Vec<RevenueEntry>,
    /// Descending by revenue, ties in encounter order
    pub revenue_by_product: Vec<RevenueEntry>,
    /// Descending by revenue, at most `top_managers` entries
    pub top_managers: Vec<RevenueEntry>,
    pub details: DetailTable,
}
