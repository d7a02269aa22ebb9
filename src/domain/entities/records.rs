use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::entities::record::{FieldValue, Record, RecordSchema};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: String,
    pub description: String,
    pub property: String,
    pub category: String,
    pub kind: String,
    pub amount: f64,
    pub status: String,
}

impl Record for Transaction {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "date" => FieldValue::Date(&self.date),
            "description" => FieldValue::Text(&self.description),
            "property" => FieldValue::Text(&self.property),
            "category" => FieldValue::Text(&self.category),
            "kind" => FieldValue::Text(&self.kind),
            "amount" => FieldValue::Number(self.amount),
            "status" => FieldValue::Text(&self.status),
            _ => return None,
        })
    }
}

impl RecordSchema for Transaction {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "date",
        "description",
        "property",
        "category",
        "kind",
        "amount",
        "status",
    ];
    const SEARCHABLE: &'static [&'static str] = &["id", "description", "property", "category"];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub client: String,
    pub property: String,
    pub issue_date: String,
    pub due_date: String,
    pub amount: f64,
    pub status: String,
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "number" => FieldValue::Text(&self.number),
            "client" => FieldValue::Text(&self.client),
            "property" => FieldValue::Text(&self.property),
            "issue_date" => FieldValue::Date(&self.issue_date),
            "due_date" => FieldValue::Date(&self.due_date),
            "amount" => FieldValue::Number(self.amount),
            "status" => FieldValue::Text(&self.status),
            _ => return None,
        })
    }
}

impl RecordSchema for Invoice {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "number",
        "client",
        "property",
        "issue_date",
        "due_date",
        "amount",
        "status",
    ];
    const SEARCHABLE: &'static [&'static str] = &["number", "client", "property"];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub joined: String,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "role" => FieldValue::Text(&self.role),
            "status" => FieldValue::Text(&self.status),
            "joined" => FieldValue::Date(&self.joined),
            _ => return None,
        })
    }
}

impl RecordSchema for User {
    const FIELDS: &'static [&'static str] = &["id", "name", "email", "role", "status", "joined"];
    const SEARCHABLE: &'static [&'static str] = &["name", "email"];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaintenanceRequest {
    pub id: String,
    pub title: String,
    pub property: String,
    pub unit: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub reported: String,
}

impl Record for MaintenanceRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "title" => FieldValue::Text(&self.title),
            "property" => FieldValue::Text(&self.property),
            "unit" => FieldValue::Text(&self.unit),
            "category" => FieldValue::Text(&self.category),
            "priority" => FieldValue::Text(&self.priority),
            "status" => FieldValue::Text(&self.status),
            "reported" => FieldValue::Date(&self.reported),
            _ => return None,
        })
    }
}

impl RecordSchema for MaintenanceRequest {
    const FIELDS: &'static [&'static str] = &[
        "id", "title", "property", "unit", "category", "priority", "status", "reported",
    ];
    const SEARCHABLE: &'static [&'static str] = &["id", "title", "property", "unit"];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kind: String,
    pub status: String,
    pub properties: f64,
}

impl Record for Client {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Text(&self.id),
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "phone" => FieldValue::Text(&self.phone),
            "kind" => FieldValue::Text(&self.kind),
            "status" => FieldValue::Text(&self.status),
            "properties" => FieldValue::Number(self.properties),
            _ => return None,
        })
    }
}

impl RecordSchema for Client {
    const FIELDS: &'static [&'static str] =
        &["id", "name", "email", "phone", "kind", "status", "properties"];
    const SEARCHABLE: &'static [&'static str] = &["name", "email", "phone"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
}

/// A record read from an arbitrary table, keyed by column header.
///
/// Cells of numeric columns are exposed as numbers so that amounts sort
/// naturally; everything else is text.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub cells: BTreeMap<String, String>,
    pub kinds: Arc<BTreeMap<String, ColumnKind>>,
}

impl Record for Row {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = self.cells.get(name)?;
        match self.kinds.get(name) {
            Some(ColumnKind::Number) => match value.trim().parse::<f64>() {
                Ok(number) => Some(FieldValue::Number(number)),
                Err(_) => Some(FieldValue::Text(value)),
            },
            _ => Some(FieldValue::Text(value)),
        }
    }
}

/// Builds rows from a header line and raw cells. Ids come from an `id`
/// column when present, otherwise from the 1-based row position. A column is
/// numeric when every non-empty cell parses as a number.
pub fn rows_from_table(columns: &[String], data: &[Vec<String>]) -> Vec<Row> {
    let kinds: BTreeMap<String, ColumnKind> = columns
        .iter()
        .enumerate()
        .map(|(col_idx, column)| (column.clone(), infer_column_kind(data, col_idx)))
        .collect();
    let kinds = Arc::new(kinds);

    let id_col = columns.iter().position(|column| column == "id");

    data.iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let cells: BTreeMap<String, String> = columns
                .iter()
                .enumerate()
                .map(|(col_idx, column)| {
                    (column.clone(), row.get(col_idx).cloned().unwrap_or_default())
                })
                .collect();
            let id = id_col
                .and_then(|col_idx| row.get(col_idx))
                .filter(|value| !value.is_empty())
                .cloned()
                .unwrap_or_else(|| (row_idx + 1).to_string());
            Row {
                id,
                cells,
                kinds: Arc::clone(&kinds),
            }
        })
        .collect()
}

fn infer_column_kind(data: &[Vec<String>], col_idx: usize) -> ColumnKind {
    let mut non_empty = data
        .iter()
        .filter_map(|row| row.get(col_idx))
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .peekable();
    if non_empty.peek().is_some() && non_empty.all(|cell| cell.parse::<f64>().is_ok()) {
        ColumnKind::Number
    } else {
        ColumnKind::Text
    }
}
