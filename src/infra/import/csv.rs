use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::domain::entities::records::{rows_from_table, Row};
use crate::usecase::ports::repo::{RecordSource, SourceError};

/// Reads typed records, one per line, matching struct fields to headers.
pub fn load_csv_records<R: DeserializeOwned>(csv_path: &Path) -> Result<Vec<R>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;

    let mut records = Vec::new();
    for (row_idx, record) in reader.deserialize::<R>().enumerate() {
        let record = record.with_context(|| {
            format!(
                "failed to parse csv record {} in {}",
                row_idx + 1,
                csv_path.display()
            )
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Reads any csv with a header line into dynamic rows.
pub fn load_csv_rows(csv_path: &Path) -> Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let header_len = columns.len();
    let mut data = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let row = (0..header_len)
            .map(|col_idx| record.get(col_idx).unwrap_or("").to_string())
            .collect::<Vec<_>>();
        data.push(row);
    }

    Ok(rows_from_table(&columns, &data))
}

pub struct CsvSource<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> CsvSource<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: DeserializeOwned> RecordSource<R> for CsvSource<R> {
    fn load(&self) -> Result<Vec<R>, SourceError> {
        load_csv_records(&self.path).map_err(SourceError::from)
    }
}

pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource<Row> for CsvRowSource {
    fn load(&self) -> Result<Vec<Row>, SourceError> {
        load_csv_rows(&self.path).map_err(SourceError::from)
    }
}
