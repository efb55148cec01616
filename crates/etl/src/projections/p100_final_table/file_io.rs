use contracts::projections::p100_final_table::{FinalSaleRow, FINAL_TABLE_HEADER};
use std::path::Path;

use super::projection_builder::build_row;
use crate::shared::error::{EtlError, EtlResult};

/// Render the FinalTable in the FinalTable.csv format: `;`-separated,
/// fixed 8-column header, one line per row, no quoting.
pub fn render_final_table(rows: &[FinalSaleRow]) -> EtlResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let path = Path::new("<memory>");
    writer
        .write_record(FINAL_TABLE_HEADER)
        .map_err(|e| EtlError::csv(path, e))?;
    for row in rows {
        writer
            .write_record([
                row.date.clone(),
                row.month.clone(),
                row.manager.clone(),
                row.city.clone(),
                row.product.clone(),
                row.qty.to_string(),
                row.price.to_string(),
                row.sum.to_string(),
            ])
            .map_err(|e| EtlError::csv(path, e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::io(path, e.into_error()))?;
    // every field came from a String, so the buffer is valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Записывает FinalTable.csv (родительская папка создаётся при необходимости)
pub fn write_final_table(path: &Path, rows: &[FinalSaleRow]) -> EtlResult<()> {
    let text = render_final_table(rows)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EtlError::io(parent, e))?;
    }
    std::fs::write(path, text).map_err(|e| EtlError::io(path, e))?;

    tracing::info!("FinalTable written: {} rows -> {}", rows.len(), path.display());
    Ok(())
}

/// Parse FinalTable.csv text back into rows.
///
/// Columns are taken by position and the header row is skipped. Numeric
/// cells that do not parse read as 0. Month and sum are re-derived from
/// date, qty and price rather than trusted from the file.
pub fn parse_final_table(text: &str, path: &Path) -> EtlResult<Vec<FinalSaleRow>> {
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| EtlError::csv(path, e))?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let text_at = |i: usize| record.get(i).unwrap_or_default().to_string();
        let number_at = |i: usize| parse_cell_number(record.get(i).unwrap_or_default());

        rows.push(build_row(
            text_at(0),
            text_at(2),
            text_at(3),
            text_at(4),
            number_at(5),
            number_at(6),
        ));
    }

    Ok(rows)
}

/// Читает FinalTable.csv с диска
pub fn read_final_table(path: &Path) -> EtlResult<Vec<FinalSaleRow>> {
    let text = std::fs::read_to_string(path).map_err(|e| EtlError::io(path, e))?;
    let rows = parse_final_table(&text, path)?;
    tracing::info!("FinalTable read: {} rows <- {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_cell_number(cell: &str) -> f64 {
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, manager: &str, product: &str, qty: f64, price: f64) -> FinalSaleRow {
        build_row(
            date.to_string(),
            manager.to_string(),
            "Москва".to_string(),
            product.to_string(),
            qty,
            price,
        )
    }

    #[test]
    fn test_render_format() {
        let text = render_final_table(&[
            row("31.03.2025", "Иванов И.", "Латте", 12.0, 150.0),
            row("01.04.2025", "", "Эспрессо", 0.5, 120.0),
        ])
        .unwrap();

        assert_eq!(
            text,
            "Дата;Месяц;Менеджер;Город;Товар;Кол-во;Цена;Сумма\n\
             31.03.2025;03.2025;Иванов И.;Москва;Латте;12;150;1800\n\
             01.04.2025;04.2025;;Москва;Эспрессо;0.5;120;60\n"
        );
    }

    #[test]
    fn test_render_empty_table_is_header_only() {
        assert_eq!(
            render_final_table(&[]).unwrap(),
            "Дата;Месяц;Менеджер;Город;Товар;Кол-во;Цена;Сумма\n"
        );
    }

    #[test]
    fn test_parse_lenient_numbers_and_blank_lines() {
        let text = "\u{FEFF}Дата;Месяц;Менеджер;Город;Товар;Кол-во;Цена;Сумма\n\
                    31.03.2025;99.9999;Иванов И.;Москва;Латте;12;abc;5\n\
                    \n\
                    01.04.2025;04.2025;Петров П.;;Чай;2;10\n";

        let rows = parse_final_table(text, Path::new("FinalTable.csv")).unwrap();

        assert_eq!(rows.len(), 2);
        // month and sum are re-derived
        assert_eq!(rows[0].month, "03.2025");
        assert_eq!(rows[0].price, 0.0);
        assert_eq!(rows[0].sum, 0.0);
        assert_eq!(rows[1].city, "");
        assert_eq!(rows[1].sum, 20.0);
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("FinalTable.csv");
        let rows = vec![
            row("31.03.2025", "Иванов И.", "Латте", 12.0, 150.0),
            row("01.04.2025", "Петров П.", "Эспрессо", 5.0, 120.0),
        ];

        write_final_table(&path, &rows).unwrap();
        assert_eq!(read_final_table(&path).unwrap(), rows);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_final_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, EtlError::Io { .. }));
    }
}
