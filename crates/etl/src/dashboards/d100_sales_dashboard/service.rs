use contracts::dashboards::d100_sales_dashboard::{
    DashboardOptions, DetailRow, DetailTable, KpiSummary, RevenueEntry, SalesDashboard,
    DETAIL_TABLE_HEADER,
};
use contracts::projections::p100_final_table::FinalSaleRow;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::shared::normalize::round2;

/// Build every dashboard report from one FinalTable
pub fn build_dashboard(rows: &[FinalSaleRow], options: &DashboardOptions) -> SalesDashboard {
    let dashboard = SalesDashboard {
        kpi: calc_kpis(rows),
        revenue_by_month: group_revenue_by_month(rows),
        revenue_by_product: group_revenue_by_product(rows),
        top_managers: top_managers(rows, options.top_managers),
        details: build_detail_table(rows, options.detail_limit),
    };

    tracing::info!(
        "Dashboard built: rows={}, months={}, products={}, top_managers={}, details={}",
        rows.len(),
        dashboard.revenue_by_month.len(),
        dashboard.revenue_by_product.len(),
        dashboard.top_managers.len(),
        dashboard.details.body.len()
    );

    dashboard
}

/// KPI-блоки
pub fn calc_kpis(rows: &[FinalSaleRow]) -> KpiSummary {
    let mut total_revenue = 0.0;
    let mut total_qty = 0.0;
    let mut managers: HashSet<&str> = HashSet::new();

    for r in rows {
        total_revenue += r.sum;
        total_qty += r.qty;
        if !r.manager.is_empty() {
            managers.insert(r.manager.as_str());
        }
    }

    let avg_check = if rows.is_empty() {
        0.0
    } else {
        total_revenue / rows.len() as f64
    };

    KpiSummary {
        total_revenue: round2(total_revenue),
        total_qty,
        avg_check: round2(avg_check),
        active_managers: managers.len(),
    }
}

/// Выручка по месяцам: [("03.2025", 1234.5), ...]
///
/// Keys are ordered as plain strings, so "01.2026" sorts before "12.2025".
/// That is the established report order, not a chronological one.
pub fn group_revenue_by_month(rows: &[FinalSaleRow]) -> Vec<RevenueEntry> {
    let mut by_month: BTreeMap<&str, f64> = BTreeMap::new();
    for r in rows {
        *by_month.entry(r.month.as_str()).or_insert(0.0) += r.sum;
    }

    by_month
        .into_iter()
        .map(|(month, revenue)| RevenueEntry::new(month, round2(revenue)))
        .collect()
}

/// Выручка по товарам, по убыванию
pub fn group_revenue_by_product(rows: &[FinalSaleRow]) -> Vec<RevenueEntry> {
    ranked_revenue(rows, |r| r.product.as_str())
}

/// Топ N менеджеров по выручке.
///
/// Rows without a manager are grouped under the empty name like any other key.
pub fn top_managers(rows: &[FinalSaleRow], top_n: usize) -> Vec<RevenueEntry> {
    let mut ranked = ranked_revenue(rows, |r| r.manager.as_str());
    ranked.truncate(top_n);
    ranked
}

/// Sum revenue per key, round, then sort descending by the rounded value.
/// The sort is stable so equal revenues keep first-encounter order.
fn ranked_revenue<'a, F>(rows: &'a [FinalSaleRow], key_of: F) -> Vec<RevenueEntry>
where
    F: Fn(&'a FinalSaleRow) -> &'a str,
{
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, f64)> = Vec::new();

    for r in rows {
        let key = key_of(r);
        match position.get(key) {
            Some(&i) => totals[i].1 += r.sum,
            None => {
                position.insert(key, totals.len());
                totals.push((key, r.sum));
            }
        }
    }

    let mut entries: Vec<RevenueEntry> = totals
        .into_iter()
        .map(|(key, revenue)| RevenueEntry::new(key, round2(revenue)))
        .collect();
    entries.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    entries
}

/// Таблица детализации: первые `limit` строк FinalTable
pub fn build_detail_table(rows: &[FinalSaleRow], limit: usize) -> DetailTable {
    DetailTable {
        header: DETAIL_TABLE_HEADER.iter().map(|h| h.to_string()).collect(),
        body: rows
            .iter()
            .take(limit)
            .map(|r| DetailRow {
                date: r.date.clone(),
                manager: r.manager.clone(),
                product: r.product.clone(),
                qty: r.qty,
                sum: round2(r.sum),
            })
            .collect(),
    }
}
