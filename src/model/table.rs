//! Table types.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A table row: cell values keyed by header label.
pub type TableRow = BTreeMap<String, Value>;

/// Build a row from `(header, value)` pairs.
///
/// ```
/// use reportkit::model::row;
///
/// let r = row([("Name", "Alice".into()), ("Age", 30.into())]);
/// assert_eq!(r["Age"], 30);
/// ```
pub fn row<K: Into<String>>(cells: impl IntoIterator<Item = (K, Value)>) -> TableRow {
    cells.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// A table whose columns are defined by its header labels.
///
/// Headers are fixed at construction and define both the column order and the
/// set of keys rows may use. Rows may leave declared columns out; those cells
/// render empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableSpec", rename_all = "camelCase")]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,

    headers: Vec<String>,

    rows: Vec<TableRow>,

    highlight: Highlight,
}

impl Table {
    /// Create a table, rejecting duplicate headers and undeclared row keys.
    pub fn new<S: Into<String>>(
        headers: impl IntoIterator<Item = S>,
        rows: Vec<TableRow>,
    ) -> Result<Self> {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(headers.len());
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(Error::DuplicateHeader(header.clone()));
            }
        }

        for (index, row) in rows.iter().enumerate() {
            if let Some(column) = row.keys().find(|k| !seen.contains(k.as_str())) {
                return Err(Error::UnknownColumn {
                    column: column.clone(),
                    row: index,
                });
            }
        }

        Ok(Self {
            id: None,
            class_name: None,
            caption: None,
            headers,
            rows,
            highlight: Highlight::None,
        })
    }

    /// Set the caption and return self.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the highlight mode and return self.
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an extra CSS class.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Header labels in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text for every column of a row, in header order.
    ///
    /// Missing cells yield an empty string.
    pub fn row_cells<'a>(&'a self, row: &'a TableRow) -> impl Iterator<Item = String> + 'a {
        self.headers
            .iter()
            .map(move |h| row.get(h).map(cell_text).unwrap_or_default())
    }
}

/// Display form of a cell value.
///
/// Whole floats print without a fraction (`1.0` as `1`) and arrays join
/// their elements with `,`.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Which part of a table receives hover/emphasis styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Row,
    Column,
    #[default]
    None,
}

impl Highlight {
    /// CSS class added to the table element.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Highlight::Row => Some("highlight-row"),
            Highlight::Column => Some("highlight-column"),
            Highlight::None => None,
        }
    }
}

/// Unvalidated table shape, as found in JSON input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableSpec {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    class_name: Option<String>,
    #[serde(default)]
    caption: Option<String>,
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<TableRow>,
    #[serde(default)]
    highlight: Highlight,
}

impl TryFrom<TableSpec> for Table {
    type Error = Error;

    fn try_from(spec: TableSpec) -> Result<Self> {
        let mut table = Table::new(spec.headers, spec.rows)?.with_highlight(spec.highlight);
        table.id = spec.id;
        table.class_name = spec.class_name;
        table.caption = spec.caption;
        Ok(table)
    }
}
