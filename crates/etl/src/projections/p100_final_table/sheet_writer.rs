use contracts::projections::p100_final_table::{FinalSaleRow, FINAL_TABLE_HEADER};
use contracts::shared::sheets::CellValue;

use crate::shared::error::EtlResult;
use crate::shared::sheets::SheetSink;

pub const SALES_SHEET_NAME: &str = "Продажи";

/// Выводит FinalTable на лист "Продажи": заголовок в строке 1, данные со строки 2
pub fn write_sales_sheet<S: SheetSink + ?Sized>(sink: &mut S, rows: &[FinalSaleRow]) -> EtlResult<()> {
    let sheet = sink.create_or_replace_sheet(SALES_SHEET_NAME)?;

    let header: Vec<CellValue> = FINAL_TABLE_HEADER.iter().map(|h| CellValue::from(*h)).collect();
    sink.write_row(&sheet, 1, 1, &header)?;

    let body: Vec<Vec<CellValue>> = rows
        .iter()
        .map(|r| {
            vec![
                r.date.clone().into(),
                r.month.clone().into(),
                r.manager.clone().into(),
                r.city.clone().into(),
                r.product.clone().into(),
                r.qty.into(),
                r.price.into(),
                r.sum.into(),
            ]
        })
        .collect();
    sink.write_block(&sheet, 2, 1, &body)?;

    tracing::info!("Sheet '{}' written: {} rows", SALES_SHEET_NAME, rows.len());
    Ok(())
}
