use serde_json::Value;

use super::Row;

/// Row predicate applied by the store before rows are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Eq { column: String, value: String },
    In { column: String, values: Vec<String> },
}

impl Filter {
    pub fn column(&self) -> &str {
        match self {
            Filter::Eq { column, .. } | Filter::In { column, .. } => column,
        }
    }

    /// Values compare by their textual form so integer and string keys match alike.
    pub fn matches(&self, row: &Row) -> bool {
        let Some(cell) = row.get(self.column()).and_then(cell_text) else {
            return false;
        };
        match self {
            Filter::Eq { value, .. } => &cell == value,
            Filter::In { values, .. } => values.iter().any(|value| value == &cell),
        }
    }
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A projection over one table with optional filters.
///
/// ```
/// use hiring_dashboard::gateway::Query;
///
/// let query = Query::select("jobs", &["*"]).in_("company_id", ["3", "9"]);
/// assert_eq!(query.table(), "jobs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    columns: Vec<String>,
    filters: Vec<Filter>,
}

impl Query {
    pub fn select(table: &str, columns: &[&str]) -> Self {
        Self {
            table: table.to_string(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
            filters: Vec::new(),
        }
    }

    pub fn eq(mut self, column: &str, value: impl Into<String>) -> Self {
        self.filters.push(Filter::Eq {
            column: column.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn in_<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filters.push(Filter::In {
            column: column.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// `true` when every column is requested, either explicitly or by `*`.
    pub fn selects_all(&self) -> bool {
        self.columns.is_empty() || self.columns.iter().any(|column| column == "*")
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.filters.iter().all(|filter| filter.matches(row))
    }

    /// Narrows a full row down to the selected columns, skipping absent ones.
    pub fn project(&self, row: &Row) -> Row {
        if self.selects_all() {
            return row.clone();
        }
        self.columns
            .iter()
            .filter_map(|column| {
                row.get(column)
                    .map(|value| (column.clone(), value.clone()))
            })
            .collect()
    }
}
