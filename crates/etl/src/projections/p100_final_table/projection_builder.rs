use contracts::projections::p100_final_table::FinalSaleRow;
use contracts::usecases::u100_import_sources::RawSources;

use super::join::{JoinIndex, ManagerInfo};
use crate::shared::normalize::{make_month_tag, normalize_date, normalize_number, round2};

/// Собирает каноническую строку продажи
///
/// `month` is derived from `date` and `sum` from `qty * price`, so every row
/// built here satisfies the FinalTable invariants.
pub fn build_row(
    date: String,
    manager: String,
    city: String,
    product: String,
    qty: f64,
    price: f64,
) -> FinalSaleRow {
    let month = make_month_tag(&date);
    FinalSaleRow {
        date,
        month,
        manager,
        city,
        product,
        qty,
        price,
        sum: round2(qty * price),
    }
}

/// Build the FinalTable from the three raw sources.
///
/// One output row per sale, in input order. An order without a manager entry
/// gets an empty manager and city, a product without a price gets price 0.
/// Neither stops the build.
pub fn build_final_table(sources: &RawSources) -> Vec<FinalSaleRow> {
    let index = JoinIndex::build(&sources.managers, &sources.prices);
    let no_manager = ManagerInfo::default();

    let mut unresolved_orders = 0usize;
    let mut unpriced_products = 0usize;

    let rows: Vec<FinalSaleRow> = sources
        .sales
        .iter()
        .map(|sale| {
            let manager_info = index.manager_for(&sale.order_id).unwrap_or_else(|| {
                tracing::debug!("No manager entry for order '{}'", sale.order_id);
                unresolved_orders += 1;
                &no_manager
            });
            let unit_price = index.price_for(&sale.product).unwrap_or_else(|| {
                tracing::debug!("No price for product '{}'", sale.product);
                unpriced_products += 1;
                0.0
            });

            build_row(
                normalize_date(&sale.date),
                manager_info.manager.clone(),
                manager_info.city.clone(),
                sale.product.clone(),
                normalize_number(&sale.qty),
                unit_price,
            )
        })
        .collect();

    if unresolved_orders > 0 || unpriced_products > 0 {
        tracing::warn!(
            "FinalTable built with defaults: rows_without_manager={}, rows_without_price={}",
            unresolved_orders,
            unpriced_products
        );
    }
    tracing::info!(
        "FinalTable built: rows={}, orders_indexed={}, products_indexed={}",
        rows.len(),
        index.order_count(),
        index.product_count()
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u100_import_sources::{
        RawManagerRecord, RawPriceRecord, RawSaleRecord,
    };

    fn sale(order_id: &str, date: &str, product: &str, qty: &str) -> RawSaleRecord {
        RawSaleRecord {
            order_id: order_id.to_string(),
            date: date.to_string(),
            product: product.to_string(),
            qty: qty.to_string(),
            ..Default::default()
        }
    }

    fn latte_sources() -> RawSources {
        RawSources {
            sales: vec![sale("101", "31-03-2025", "Латте", "12 шт")],
            managers: vec![RawManagerRecord {
                order_id: "101".to_string(),
                manager: "иВАНОВ ИВАН".to_string(),
                city: "Москва".to_string(),
            }],
            prices: vec![RawPriceRecord {
                product: "Латте".to_string(),
                price: "150,00 руб".to_string(),
            }],
        }
    }

    #[test]
    fn test_single_sale_is_joined() {
        let rows = build_final_table(&latte_sources());

        assert_eq!(
            rows,
            vec![FinalSaleRow {
                date: "31.03.2025".to_string(),
                month: "03.2025".to_string(),
                manager: "Иванов И.".to_string(),
                city: "Москва".to_string(),
                product: "Латте".to_string(),
                qty: 12.0,
                price: 150.0,
                sum: 1800.0,
            }]
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let mut sources = latte_sources();
        sources.sales.push(sale("999", "1/4/2025", "Латте", "2"));
        sources.sales.push(sale("101", "2/4/2025", "Неизвестный товар", "3"));

        let rows = build_final_table(&sources);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].manager, "");
        assert_eq!(rows[1].city, "");
        assert_eq!(rows[1].sum, 300.0);
        assert_eq!(rows[2].manager, "Иванов И.");
        assert_eq!(rows[2].price, 0.0);
        assert_eq!(rows[2].sum, 0.0);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let mut sources = latte_sources();
        sources.sales = vec![
            sale("3", "03-01-2025", "Латте", "1"),
            sale("1", "01-01-2025", "Латте", "1"),
            sale("2", "02-01-2025", "Латте", "1"),
        ];

        let dates: Vec<String> = build_final_table(&sources)
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec!["03.01.2025", "01.01.2025", "02.01.2025"]);
    }

    #[test]
    fn test_sum_is_rounded_product_of_qty_and_price() {
        let mut sources = latte_sources();
        sources.prices[0].price = "33,333".to_string();
        sources.sales = vec![
            sale("101", "31-03-2025", "Латте", "0,3"),
            sale("101", "31-03-2025", "Латте", "7"),
        ];

        for row in build_final_table(&sources) {
            assert_eq!(row.sum, round2(row.qty * row.price));
        }
    }

    #[test]
    fn test_empty_sources_give_empty_table() {
        assert!(build_final_table(&RawSources::default()).is_empty());
    }
}
