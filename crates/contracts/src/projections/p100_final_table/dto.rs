use serde::{Deserialize, Serialize};

/// Заголовок FinalTable.csv и листа "Продажи"
pub const FINAL_TABLE_HEADER: [&str; 8] = [
    "Дата",
    "Месяц",
    "Менеджер",
    "Город",
    "Товар",
    "Кол-во",
    "Цена",
    "Сумма",
];

/// Canonical row of the joined and cleaned sales table (P100).
///
/// Rows are built once by the projection builder and never mutated:
/// `month` is always the `MM.YYYY` tail of `date` and `sum` is always
/// `qty * price` rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalSaleRow {
    /// "DD.MM.YYYY"
    pub date: String,
    /// "MM.YYYY"
    pub month: String,
    /// "Surname I." or empty when the order has no manager entry
    pub manager: String,
    pub city: String,
    pub product: String,
    pub qty: f64,
    pub price: f64,
    pub sum: f64,
}
