//! Очистка "грязных" текстовых значений из исходных файлов.
//!
//! Every function here is total: malformed input degrades to `0` or to an
//! empty string, nothing panics and nothing returns an error.

/// Date separators accepted in raw input
const DATE_SEPARATORS: [char; 3] = ['-', '/', '.'];

/// "31-03-2025" -> "31.03.2025"
///
/// Fields are taken positionally as day, month, year whatever the separator.
/// Day and month are zero-padded to two characters. A missing or empty part
/// stays empty instead of being guessed, so "31-03" gives "31.03.".
/// Blank input gives an empty string. There is no calendar validation.
pub fn normalize_date(raw: &str) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return String::new();
    }

    let mut parts = cleaned.split(&DATE_SEPARATORS[..]);
    let day = pad2(parts.next().unwrap_or_default());
    let month = pad2(parts.next().unwrap_or_default());
    let year = parts.next().unwrap_or_default();

    format!("{}.{}.{}", day, month, year)
}

fn pad2(part: &str) -> String {
    match part.chars().count() {
        0 => String::new(),
        1 => format!("0{}", part),
        _ => part.to_string(),
    }
}

/// "12 шт" -> 12, "150,00 руб" -> 150
///
/// The first comma becomes a decimal point, everything except digits and
/// points is dropped, and the longest leading decimal literal is parsed
/// ("1.2.3" reads as 1.2). Empty or unparseable input yields 0. The result
/// is never negative since the sign is stripped with the rest.
pub fn normalize_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .replacen(',', ".", 1)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let literal = match cleaned.match_indices('.').nth(1) {
        Some((second_point, _)) => &cleaned[..second_point],
        None => cleaned.as_str(),
    };

    if !literal.chars().any(|c| c.is_ascii_digit()) {
        return 0.0;
    }
    literal.parse::<f64>().unwrap_or(0.0)
}

/// "   иВАНОВ    ИВАН  " -> "Иванов И."
///
/// Only the first two words count (surname and given name). Without a given
/// name the result is just the capitalised surname.
pub fn normalize_manager_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut words = lowered.split_whitespace();

    let Some(surname) = words.next() else {
        return String::new();
    };

    let surname = capitalize_first(surname);
    match words.next().and_then(|name| name.chars().next()) {
        Some(first) => format!("{} {}.", surname, first.to_uppercase()),
        None => surname,
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Округление денег до 2 знаков, половина округляется вверх
pub fn round2(x: f64) -> f64 {
    (x * 100.0 + 0.5).floor() / 100.0
}

/// "31.03.2025" -> "03.2025"
///
/// Returns an empty string when the month or year segment is missing.
pub fn make_month_tag(date: &str) -> String {
    let mut parts = date.split('.');
    let _day = parts.next();
    match (parts.next(), parts.next()) {
        (Some(month), Some(year)) if !month.is_empty() && !year.is_empty() => {
            format!("{}.{}", month, year)
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date_separators() {
        assert_eq!(normalize_date("31-03-2025"), "31.03.2025");
        assert_eq!(normalize_date("1/4/2025"), "01.04.2025");
        assert_eq!(normalize_date(" 5.11.2024 "), "05.11.2024");
        assert_eq!(normalize_date("31-03/2025"), "31.03.2025");
    }

    #[test]
    fn test_normalize_date_keeps_day_month_order() {
        // no locale inference: 12/31 is not swapped
        assert_eq!(normalize_date("03/31/2025"), "03.31.2025");
    }

    #[test]
    fn test_normalize_date_missing_parts_stay_empty() {
        assert_eq!(normalize_date("31-03"), "31.03.");
        assert_eq!(normalize_date("7"), "07..");
        assert_eq!(normalize_date("31--2025"), "31..2025");
        assert_eq!(normalize_date("   "), "");
    }

    #[test]
    fn test_normalize_number() {
        assert_eq!(normalize_number("150,00 руб"), 150.0);
        assert_eq!(normalize_number("12 шт"), 12.0);
        assert_eq!(normalize_number("0,5"), 0.5);
        assert_eq!(normalize_number("1 234,56 руб."), 1234.56);
        assert_eq!(normalize_number("1.2.3"), 1.2);
        assert_eq!(normalize_number("-7"), 7.0);
    }

    #[test]
    fn test_normalize_number_soft_fails_to_zero() {
        assert_eq!(normalize_number(""), 0.0);
        assert_eq!(normalize_number("нет"), 0.0);
        assert_eq!(normalize_number("."), 0.0);
        assert_eq!(normalize_number("руб."), 0.0);
    }

    #[test]
    fn test_normalize_manager_name() {
        assert_eq!(normalize_manager_name("   иВАНОВ    ИВАН  "), "Иванов И.");
        assert_eq!(normalize_manager_name("Петров П."), "Петров П.");
        assert_eq!(normalize_manager_name("smith john james"), "Smith J.");
        assert_eq!(normalize_manager_name("СИДОРОВА"), "Сидорова");
        assert_eq!(normalize_manager_name(" \t "), "");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1800.0), 1800.0);
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(10.004), 10.0);
    }

    #[test]
    fn test_make_month_tag() {
        assert_eq!(make_month_tag("31.03.2025"), "03.2025");
        assert_eq!(make_month_tag("31.03."), "");
        assert_eq!(make_month_tag(""), "");
        assert_eq!(make_month_tag("31"), "");
    }

    #[test]
    fn test_month_tag_of_normalized_dates() {
        for raw in ["1-1-2024", "15/06/2025", "31.12.2023"] {
            let date = normalize_date(raw);
            let parts: Vec<&str> = date.split('.').collect();
            assert_eq!(make_month_tag(&date), format!("{}.{}", parts[1], parts[2]));
        }
    }
}
