use contracts::usecases::u100_import_sources::{
    RawManagerRecord, RawPriceRecord, RawSaleRecord, RawSources,
};
use csv::StringRecord;
use std::path::Path;

use super::columns::{self, Column};
use crate::shared::error::{EtlError, EtlResult};

/// Parsed `;`-separated file: header row plus non-blank records
struct SourceTable<'p> {
    path: &'p Path,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl<'p> SourceTable<'p> {
    /// `None` for a file without any content (not even a header)
    fn parse(text: &str, path: &'p Path) -> EtlResult<Option<Self>> {
        // Strip UTF-8 BOM if present
        let text = text.trim_start_matches('\u{FEFF}');
        if text.trim().is_empty() {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| EtlError::csv(path, e))?
            .clone();
        tracing::debug!(
            "{}: headers {:?}",
            path.display(),
            headers.iter().collect::<Vec<_>>()
        );

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| EtlError::csv(path, e))?;
            if record.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            records.push(record);
        }

        Ok(Some(Self {
            path,
            headers,
            records,
        }))
    }

    fn required(&self, column: Column) -> EtlResult<usize> {
        column
            .find(self.headers.iter())
            .ok_or_else(|| EtlError::MissingColumn {
                path: self.path.to_path_buf(),
                column: column.name,
                accepted: column.accepted_list(),
            })
    }

    fn optional(&self, column: Column) -> Option<usize> {
        column.find(self.headers.iter())
    }
}

/// Cell value by column index; absent column or short row reads as ""
fn cell(record: &StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| record.get(i))
        .unwrap_or_default()
        .to_string()
}

/// Разбор файла продаж
pub fn parse_sales(text: &str, path: &Path) -> EtlResult<Vec<RawSaleRecord>> {
    let Some(table) = SourceTable::parse(text, path)? else {
        return Ok(Vec::new());
    };

    let order_id = Some(table.required(columns::ORDER_ID)?);
    let date = Some(table.required(columns::DATE)?);
    let product = Some(table.required(columns::PRODUCT)?);
    let qty = Some(table.required(columns::QTY)?);
    let buy_type = table.optional(columns::BUY_TYPE);
    let pay_type = table.optional(columns::PAY_TYPE);

    Ok(table
        .records
        .iter()
        .map(|r| RawSaleRecord {
            order_id: cell(r, order_id),
            date: cell(r, date),
            product: cell(r, product),
            qty: cell(r, qty),
            buy_type: cell(r, buy_type),
            pay_type: cell(r, pay_type),
        })
        .collect())
}

/// Разбор справочника менеджеров
pub fn parse_managers(text: &str, path: &Path) -> EtlResult<Vec<RawManagerRecord>> {
    let Some(table) = SourceTable::parse(text, path)? else {
        return Ok(Vec::new());
    };

    let order_id = Some(table.required(columns::ORDER_ID)?);
    let manager = Some(table.required(columns::MANAGER)?);
    let city = table.optional(columns::CITY);

    Ok(table
        .records
        .iter()
        .map(|r| RawManagerRecord {
            order_id: cell(r, order_id),
            manager: cell(r, manager),
            city: cell(r, city),
        })
        .collect())
}

/// Разбор прайс-листа
pub fn parse_prices(text: &str, path: &Path) -> EtlResult<Vec<RawPriceRecord>> {
    let Some(table) = SourceTable::parse(text, path)? else {
        return Ok(Vec::new());
    };

    let product = Some(table.required(columns::PRODUCT)?);
    let price = Some(table.required(columns::PRICE)?);

    Ok(table
        .records
        .iter()
        .map(|r| RawPriceRecord {
            product: cell(r, product),
            price: cell(r, price),
        })
        .collect())
}

fn read_text(path: &Path) -> EtlResult<String> {
    std::fs::read_to_string(path).map_err(|e| EtlError::io(path, e))
}

/// Load all three sources. Every file is fully read before anything is
/// joined; a failure on any of them aborts the run.
pub fn load_sources(sales: &Path, managers: &Path, prices: &Path) -> EtlResult<RawSources> {
    let sources = RawSources {
        sales: parse_sales(&read_text(sales)?, sales)?,
        managers: parse_managers(&read_text(managers)?, managers)?,
        prices: parse_prices(&read_text(prices)?, prices)?,
    };

    let summary = sources.summary();
    tracing::info!(
        "Sources loaded: sales={}, managers={}, prices={}",
        summary.sales_rows,
        summary.manager_rows,
        summary.price_rows
    );
    Ok(sources)
}
