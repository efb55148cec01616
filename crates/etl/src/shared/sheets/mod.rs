//! Граница с табличным редактором.
//!
//! The pipeline never talks to a host editor directly. Sheet exports go
//! through [`SheetSink`]; a host bridge implements it on its side and
//! [`MemoryWorkbook`] implements it for the CLI and for tests.

pub mod memory;

pub use memory::MemoryWorkbook;

use contracts::shared::sheets::{CellValue, SheetHandle};

use crate::shared::error::EtlResult;

/// Capability exposed by a spreadsheet host.
///
/// Rows and columns are **1-indexed**, as in the editor UI: `(1, 1)` is `A1`.
pub trait SheetSink {
    /// Create the sheet, or clear it if a sheet with that name already exists
    fn create_or_replace_sheet(&mut self, name: &str) -> EtlResult<SheetHandle>;

    /// Write one row of values starting at (`row`, `col`)
    fn write_row(
        &mut self,
        sheet: &SheetHandle,
        row: u32,
        col: u32,
        values: &[CellValue],
    ) -> EtlResult<()>;

    /// Write a block of rows with its top-left corner at (`row`, `col`)
    fn write_block(
        &mut self,
        sheet: &SheetHandle,
        row: u32,
        col: u32,
        matrix: &[Vec<CellValue>],
    ) -> EtlResult<()> {
        for (offset, values) in matrix.iter().enumerate() {
            self.write_row(sheet, row + offset as u32, col, values)?;
        }
        Ok(())
    }

    /// Write a single value to an A1-style address such as "B3"
    fn write_cell(&mut self, sheet: &SheetHandle, address: &str, value: CellValue)
        -> EtlResult<()>;
}

/// 1-indexed column number to letters: 1 -> "A", 27 -> "AA"
pub fn column_name(col: u32) -> String {
    let mut n = col;
    let mut out = Vec::<u8>::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// 1-indexed (row, col) to an A1 address
pub fn to_a1(row: u32, col: u32) -> String {
    format!("{}{}", column_name(col), row)
}

/// Parse an A1 address (optional `$` markers) into 1-indexed (row, col)
pub fn parse_a1(address: &str) -> Option<(u32, u32)> {
    let s = address.trim().replace('$', "");
    let split = s.find(|c: char| !c.is_ascii_alphabetic())?;
    let (letters, digits) = s.split_at(split);
    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut col: u32 = 0;
    for b in letters.bytes() {
        let v = (b.to_ascii_uppercase() - b'A') as u32 + 1;
        col = col.checked_mul(26)?.checked_add(v)?;
    }
    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(column_name(1), "A");
        assert_eq!(column_name(7), "G");
        assert_eq!(column_name(26), "Z");
        assert_eq!(column_name(27), "AA");
        assert_eq!(to_a1(15, 1), "A15");
    }

    #[test]
    fn test_parse_a1() {
        assert_eq!(parse_a1("A1"), Some((1, 1)));
        assert_eq!(parse_a1("$B$4"), Some((4, 2)));
        assert_eq!(parse_a1("aa10"), Some((10, 27)));
        assert_eq!(parse_a1("A0"), None);
        assert_eq!(parse_a1("11"), None);
        assert_eq!(parse_a1("B"), None);
        assert_eq!(parse_a1("B2C"), None);
    }
}
