use serde::{Deserialize, Serialize};

/// Строка файла продаж в том виде, как она пришла из CSV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSaleRecord {
    pub order_id: String,
    /// Free-form date, e.g. "31-03-2025" or "1/4/2025"
    pub date: String,
    pub product: String,
    /// Free-form quantity, e.g. "12 шт" or "0,5"
    pub qty: String,
    // Pass-through, not used by the reports
    pub buy_type: String,
    pub pay_type: String,
}

/// Строка справочника "заказ -> менеджер, город"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawManagerRecord {
    pub order_id: String,
    /// Arbitrary case and spacing, e.g. "   иВАНОВ    ИВАН  "
    pub manager: String,
    pub city: String,
}

/// Строка прайс-листа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPriceRecord {
    pub product: String,
    /// Free-form price, e.g. "150,00 руб"
    pub price: String,
}

/// The three raw sources of one pipeline run, fully materialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSources {
    pub sales: Vec<RawSaleRecord>,
    pub managers: Vec<RawManagerRecord>,
    pub prices: Vec<RawPriceRecord>,
}

/// Результат загрузки источников
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub sales_rows: usize,
    pub manager_rows: usize,
    pub price_rows: usize,
}

impl RawSources {
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            sales_rows: self.sales.len(),
            manager_rows: self.managers.len(),
            price_rows: self.prices.len(),
        }
    }
}
