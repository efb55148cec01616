use contracts::usecases::u100_import_sources::{RawManagerRecord, RawPriceRecord};
use std::collections::HashMap;

use crate::shared::normalize::{normalize_manager_name, normalize_number};

/// Manager and city resolved for an order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagerInfo {
    pub manager: String,
    pub city: String,
}

/// Lookup maps for one pipeline run: order id -> manager/city, product -> price.
///
/// Built from fully loaded reference sources and dropped with the run.
/// Duplicate keys: the last record wins.
#[derive(Debug, Default)]
pub struct JoinIndex {
    manager_by_order: HashMap<String, ManagerInfo>,
    price_by_product: HashMap<String, f64>,
}

impl JoinIndex {
    pub fn build(managers: &[RawManagerRecord], prices: &[RawPriceRecord]) -> Self {
        let manager_by_order = managers
            .iter()
            .map(|m| {
                (
                    m.order_id.clone(),
                    ManagerInfo {
                        manager: normalize_manager_name(&m.manager),
                        city: m.city.trim().to_string(),
                    },
                )
            })
            .collect();

        let price_by_product = prices
            .iter()
            .map(|p| (p.product.clone(), normalize_number(&p.price)))
            .collect();

        Self {
            manager_by_order,
            price_by_product,
        }
    }

    /// Manager/city for the order, `None` when the order has no entry
    pub fn manager_for(&self, order_id: &str) -> Option<&ManagerInfo> {
        self.manager_by_order.get(order_id)
    }

    /// Unit price for the product, `None` when it is not in the price list
    pub fn price_for(&self, product: &str) -> Option<f64> {
        self.price_by_product.get(product).copied()
    }

    pub fn order_count(&self) -> usize {
        self.manager_by_order.len()
    }

    pub fn product_count(&self) -> usize {
        self.price_by_product.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(order_id: &str, name: &str, city: &str) -> RawManagerRecord {
        RawManagerRecord {
            order_id: order_id.to_string(),
            manager: name.to_string(),
            city: city.to_string(),
        }
    }

    fn price(product: &str, price: &str) -> RawPriceRecord {
        RawPriceRecord {
            product: product.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_build_normalizes_values() {
        let index = JoinIndex::build(
            &[manager("101", "   иВАНОВ    ИВАН  ", "  Москва ")],
            &[price("Латте", "150,00 руб")],
        );

        assert_eq!(
            index.manager_for("101"),
            Some(&ManagerInfo {
                manager: "Иванов И.".to_string(),
                city: "Москва".to_string(),
            })
        );
        assert_eq!(index.price_for("Латте"), Some(150.0));
    }

    #[test]
    fn test_last_write_wins() {
        let index = JoinIndex::build(
            &[manager("1", "петров пётр", "Тверь"), manager("1", "сидоров олег", "Омск")],
            &[price("Чай", "10"), price("Чай", "12,5")],
        );

        assert_eq!(index.order_count(), 1);
        assert_eq!(index.product_count(), 1);
        assert_eq!(index.manager_for("1").map(|m| m.manager.as_str()), Some("Сидоров О."));
        assert_eq!(index.price_for("Чай"), Some(12.5));
    }

    #[test]
    fn test_unknown_keys_resolve_to_none() {
        let index = JoinIndex::build(&[], &[]);
        assert_eq!(index.manager_for("404"), None);
        assert_eq!(index.price_for("Раф"), None);
    }
}
