use super::normalize::round2;

/// Форматирует счётчик с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use etl::shared::format::format_count;
/// assert_eq!(format_count(1234567), "1.234.567");
/// assert_eq!(format_count(42), "42");
/// ```
pub fn format_count(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Денежная сумма для вывода в консоль: "1.234.567,89"
///
/// # Примеры
/// ```
/// use etl::shared::format::format_amount;
/// assert_eq!(format_amount(1800.0), "1.800,00");
/// ```
pub fn format_amount(value: f64) -> String {
    let cents = (round2(value.abs()) * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{},{:02}",
        sign,
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
