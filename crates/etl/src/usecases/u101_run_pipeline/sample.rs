use contracts::usecases::u100_import_sources::{
    RawManagerRecord, RawPriceRecord, RawSaleRecord, RawSources,
};

/// Небольшой демонстрационный набор: два заказа, как будто пришли из CSV
pub fn sample_sources() -> RawSources {
    RawSources {
        sales: vec![
            RawSaleRecord {
                order_id: "101".to_string(),
                date: "31-03-2025".to_string(),
                product: "Латте".to_string(),
                qty: "12 шт".to_string(),
                buy_type: "Онлайн".to_string(),
                pay_type: "Карта".to_string(),
            },
            RawSaleRecord {
                order_id: "102".to_string(),
                date: "01-04-2025".to_string(),
                product: "Эспрессо".to_string(),
                qty: "5".to_string(),
                buy_type: "Оффлайн".to_string(),
                pay_type: "Наличные".to_string(),
            },
        ],
        managers: vec![
            RawManagerRecord {
                order_id: "101".to_string(),
                manager: "   иВАНОВ    ИВАН  ".to_string(),
                city: "Москва".to_string(),
            },
            RawManagerRecord {
                order_id: "102".to_string(),
                manager: "Петров П.".to_string(),
                city: "Санкт-Петербург".to_string(),
            },
        ],
        prices: vec![
            RawPriceRecord {
                product: "Латте".to_string(),
                price: "150,00 руб".to_string(),
            },
            RawPriceRecord {
                product: "Эспрессо".to_string(),
                price: "120 руб".to_string(),
            },
        ],
    }
}
