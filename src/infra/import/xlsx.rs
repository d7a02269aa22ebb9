use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::Timelike;

use crate::domain::entities::records::{rows_from_table, Row};
use crate::usecase::ports::repo::{RecordSource, SourceError};

/// Renders a cell as text. Excel date cells become ISO-8601 so that date
/// columns keep sorting correctly as strings.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => match v.as_datetime() {
            Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            None => v.to_string(),
        },
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Loads one worksheet. `header_row` is the 0-based row holding column names;
/// rows above it (titles, notes) are skipped.
pub fn load_xlsx_rows(xlsx_path: &Path, sheet: &str, header_row: usize) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;
    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("failed to read sheet: {sheet}"))?;

    let mut rows = range
        .rows()
        .skip(header_row)
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<String>>());

    let Some(columns) = rows.next() else {
        anyhow::bail!("sheet {sheet} has no header row")
    };
    if columns.iter().all(|column| column.trim().is_empty()) {
        anyhow::bail!("sheet {sheet} header row is empty")
    }

    let data: Vec<Vec<String>> = rows
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .collect();

    Ok(rows_from_table(&columns, &data))
}

pub struct XlsxSource {
    path: PathBuf,
    sheet: String,
    header_row: usize,
}

impl XlsxSource {
    pub fn new(path: impl Into<PathBuf>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet: sheet.into(),
            header_row: 0,
        }
    }

    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self
    }
}

impl RecordSource<Row> for XlsxSource {
    fn load(&self) -> Result<Vec<Row>, SourceError> {
        load_xlsx_rows(&self.path, &self.sheet, self.header_row).map_err(SourceError::from)
    }
}
