/// Логическая колонка исходного файла и допустимые варианты заголовка
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub accepted: &'static [&'static str],
}

impl Column {
    /// Position of the column in a header row. Header cells are compared
    /// trimmed and exactly (case matters).
    pub fn find<'h>(&self, headers: impl IntoIterator<Item = &'h str>) -> Option<usize> {
        headers
            .into_iter()
            .position(|h| self.accepted.iter().any(|a| *a == h.trim()))
    }

    pub fn accepted_list(&self) -> String {
        self.accepted
            .iter()
            .map(|h| format!("\"{}\"", h))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub const ORDER_ID: Column = Column {
    name: "order_id",
    accepted: &["ID заказа", "Номер заказа", "№ заказа", "ID"],
};

pub const DATE: Column = Column {
    name: "date",
    accepted: &["Дата", "Дата заказа", "Дата продажи"],
};

pub const PRODUCT: Column = Column {
    name: "product",
    accepted: &["Товар", "Продукт", "Наименование"],
};

pub const QTY: Column = Column {
    name: "qty",
    accepted: &["Количество", "Кол-во"],
};

pub const BUY_TYPE: Column = Column {
    name: "buy_type",
    accepted: &["Тип покупки", "Способ покупки"],
};

pub const PAY_TYPE: Column = Column {
    name: "pay_type",
    accepted: &["Тип оплаты", "Способ оплаты"],
};

pub const MANAGER: Column = Column {
    name: "manager",
    accepted: &["Менеджер", "ФИО менеджера"],
};

pub const CITY: Column = Column {
    name: "city",
    accepted: &["Город"],
};

pub const PRICE: Column = Column {
    name: "price",
    accepted: &["Цена за г/мл, руб.", "Цена", "Цена, руб."],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_synonyms() {
        assert_eq!(PRICE.find(["Товар", "Цена за г/мл, руб."]), Some(1));
        assert_eq!(PRICE.find(["Товар", " Цена, руб. "]), Some(1));
        assert_eq!(PRICE.find(["Цена"]), Some(0));
        assert_eq!(PRICE.find(["Товар", "цена"]), None);
    }

    #[test]
    fn test_accepted_list() {
        assert_eq!(CITY.accepted_list(), "\"Город\"");
        assert_eq!(QTY.accepted_list(), "\"Количество\", \"Кол-во\"");
    }
}
