use contracts::shared::sheets::{CellValue, SheetHandle};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{parse_a1, to_a1, SheetSink};
use crate::shared::error::{EtlError, EtlResult};

/// In-memory workbook: sheets in creation order, cells keyed by (row, col)
#[derive(Debug, Default, Clone)]
pub struct MemoryWorkbook {
    sheets: Vec<(String, BTreeMap<(u32, u32), CellValue>)>,
}

/// Serializable view of the workbook, cells in row-major order
#[derive(Debug, Clone, Serialize)]
pub struct WorkbookSnapshot {
    pub sheets: Vec<SheetSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetSnapshot {
    pub name: String,
    pub cells: Vec<CellEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellEntry {
    pub address: String,
    pub value: CellValue,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Value at an A1 address, `None` for empty cells and unknown sheets
    pub fn cell(&self, sheet: &str, address: &str) -> Option<&CellValue> {
        let key = parse_a1(address)?;
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .and_then(|(_, cells)| cells.get(&key))
    }

    /// Number of non-empty cells on a sheet
    pub fn cell_count(&self, sheet: &str) -> usize {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, cells)| cells.len())
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> WorkbookSnapshot {
        WorkbookSnapshot {
            sheets: self
                .sheets
                .iter()
                .map(|(name, cells)| SheetSnapshot {
                    name: name.clone(),
                    cells: cells
                        .iter()
                        .map(|(&(row, col), value)| CellEntry {
                            address: to_a1(row, col),
                            value: value.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn cells_mut(&mut self, sheet: &SheetHandle) -> EtlResult<&mut BTreeMap<(u32, u32), CellValue>> {
        self.sheets
            .iter_mut()
            .find(|(name, _)| *name == sheet.sheet_name)
            .map(|(_, cells)| cells)
            .ok_or_else(|| EtlError::Sink(format!("sheet '{}' does not exist", sheet.sheet_name)))
    }
}

impl SheetSink for MemoryWorkbook {
    fn create_or_replace_sheet(&mut self, name: &str) -> EtlResult<SheetHandle> {
        match self.sheets.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, cells)) => cells.clear(),
            None => self.sheets.push((name.to_string(), BTreeMap::new())),
        }
        Ok(SheetHandle::new(name))
    }

    fn write_row(
        &mut self,
        sheet: &SheetHandle,
        row: u32,
        col: u32,
        values: &[CellValue],
    ) -> EtlResult<()> {
        if row == 0 || col == 0 {
            return Err(EtlError::Sink(format!(
                "row/col are 1-indexed, got ({}, {})",
                row, col
            )));
        }
        let cells = self.cells_mut(sheet)?;
        for (offset, value) in values.iter().enumerate() {
            cells.insert((row, col + offset as u32), value.clone());
        }
        Ok(())
    }

    fn write_cell(&mut self, sheet: &SheetHandle, address: &str, value: CellValue) -> EtlResult<()> {
        let key = parse_a1(address)
            .ok_or_else(|| EtlError::Sink(format!("invalid cell address '{}'", address)))?;
        self.cells_mut(sheet)?.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_row_and_block() {
        let mut book = MemoryWorkbook::new();
        let sheet = book.create_or_replace_sheet("Лист1").unwrap();

        book.write_row(&sheet, 1, 2, &["a".into(), "b".into()]).unwrap();
        book.write_block(&sheet, 2, 1, &[vec![1.0.into()], vec![2.0.into(), 3.0.into()]])
            .unwrap();

        assert_eq!(book.cell("Лист1", "B1"), Some(&CellValue::from("a")));
        assert_eq!(book.cell("Лист1", "C1"), Some(&CellValue::from("b")));
        assert_eq!(book.cell("Лист1", "A3"), Some(&CellValue::Number(2.0)));
        assert_eq!(book.cell("Лист1", "B3"), Some(&CellValue::Number(3.0)));
        assert_eq!(book.cell("Лист1", "B2"), None);
        assert_eq!(book.cell_count("Лист1"), 5);
    }

    #[test]
    fn test_replace_sheet_clears_cells() {
        let mut book = MemoryWorkbook::new();
        let sheet = book.create_or_replace_sheet("Дашборд").unwrap();
        book.write_cell(&sheet, "A1", "old".into()).unwrap();

        let sheet = book.create_or_replace_sheet("Дашборд").unwrap();
        book.write_cell(&sheet, "B2", "new".into()).unwrap();

        assert_eq!(book.sheet_names(), vec!["Дашборд"]);
        assert_eq!(book.cell("Дашборд", "A1"), None);
        assert_eq!(book.cell_count("Дашборд"), 1);
    }

    #[test]
    fn test_unknown_sheet_and_bad_address_fail() {
        let mut book = MemoryWorkbook::new();
        let ghost = SheetHandle::new("Нет такого");
        assert!(book.write_cell(&ghost, "A1", "x".into()).is_err());

        let sheet = book.create_or_replace_sheet("S").unwrap();
        assert!(book.write_cell(&sheet, "1A", "x".into()).is_err());
        assert!(book.write_row(&sheet, 0, 1, &["x".into()]).is_err());
    }

    #[test]
    fn test_snapshot_is_row_major() {
        let mut book = MemoryWorkbook::new();
        let sheet = book.create_or_replace_sheet("S").unwrap();
        book.write_cell(&sheet, "B10", 1.0.into()).unwrap();
        book.write_cell(&sheet, "A2", 2.0.into()).unwrap();
        book.write_cell(&sheet, "C2", 3.0.into()).unwrap();

        let addresses: Vec<String> = book.snapshot().sheets[0]
            .cells
            .iter()
            .map(|c| c.address.clone())
            .collect();
        assert_eq!(addresses, vec!["A2", "C2", "B10"]);
    }
}
