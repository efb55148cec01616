use contracts::dashboards::d100_sales_dashboard::{RevenueEntry, SalesDashboard};
use contracts::shared::sheets::{CellValue, SheetHandle};

use crate::shared::error::EtlResult;
use crate::shared::sheets::SheetSink;

pub const DASHBOARD_SHEET_NAME: &str = "Дашборд";

// Раскладка листа (строки и колонки с 1)
const TABLES_ROW: u32 = 6;
const MONTH_COL: u32 = 1; // A
const PRODUCT_COL: u32 = 4; // D
const MANAGER_COL: u32 = 7; // G
const DETAILS_ROW: u32 = 15;

/// Выводит дашборд на лист "Дашборд"
///
/// - KPI: labels A1:A4, values B1:B4
/// - revenue by month at A6, by product at D6, top managers at G6
/// - detail table from A15
pub fn write_dashboard_sheet<S: SheetSink + ?Sized>(
    sink: &mut S,
    dashboard: &SalesDashboard,
) -> EtlResult<()> {
    let sheet = sink.create_or_replace_sheet(DASHBOARD_SHEET_NAME)?;
    let kpi = &dashboard.kpi;

    let kpi_cells: [(&str, CellValue); 4] = [
        ("Общая сумма продаж:", kpi.total_revenue.into()),
        ("Общее количество проданных единиц:", kpi.total_qty.into()),
        ("Средний чек:", kpi.avg_check.into()),
        ("Активных менеджеров:", kpi.active_managers.into()),
    ];
    for (i, (label, value)) in kpi_cells.into_iter().enumerate() {
        let row = i + 1;
        sink.write_cell(&sheet, &format!("A{}", row), label.into())?;
        sink.write_cell(&sheet, &format!("B{}", row), value)?;
    }

    write_revenue_table(sink, &sheet, MONTH_COL, ["Месяц", "Выручка"], &dashboard.revenue_by_month)?;
    write_revenue_table(
        sink,
        &sheet,
        PRODUCT_COL,
        ["Товар", "Выручка"],
        &dashboard.revenue_by_product,
    )?;
    write_revenue_table(
        sink,
        &sheet,
        MANAGER_COL,
        ["Менеджер", "Продажи"],
        &dashboard.top_managers,
    )?;

    let details = &dashboard.details;
    let header: Vec<CellValue> = details.header.iter().map(|h| h.clone().into()).collect();
    sink.write_row(&sheet, DETAILS_ROW, 1, &header)?;
    let body: Vec<Vec<CellValue>> = details
        .body
        .iter()
        .map(|r| {
            vec![
                r.date.clone().into(),
                r.manager.clone().into(),
                r.product.clone().into(),
                r.qty.into(),
                r.sum.into(),
            ]
        })
        .collect();
    sink.write_block(&sheet, DETAILS_ROW + 1, 1, &body)?;

    tracing::info!("Sheet '{}' written", DASHBOARD_SHEET_NAME);
    Ok(())
}

fn write_revenue_table<S: SheetSink + ?Sized>(
    sink: &mut S,
    sheet: &SheetHandle,
    col: u32,
    header: [&str; 2],
    entries: &[RevenueEntry],
) -> EtlResult<()> {
    sink.write_row(sheet, TABLES_ROW, col, &[header[0].into(), header[1].into()])?;
    let body: Vec<Vec<CellValue>> = entries
        .iter()
        .map(|e| vec![e.key.clone().into(), e.revenue.into()])
        .collect();
    sink.write_block(sheet, TABLES_ROW + 1, col, &body)
}
