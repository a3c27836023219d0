use std::collections::HashMap;
use std::io::Read;

use async_trait::async_trait;
use serde_json::Value;

use super::{GatewayError, Query, QueryGateway, Row};

/// Store double holding whole tables in memory, evaluating filters locally.
///
/// Tables that were never registered answer with [`GatewayError::UnknownTable`], which mirrors
/// how the hosted store rejects a query against a missing relation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    tables: HashMap<String, Vec<Row>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rows` under `table`, replacing any previous contents.
    ///
    /// Non-object values are ignored.
    pub fn with_table(mut self, table: &str, rows: Vec<Value>) -> Self {
        let rows = rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        self.tables.insert(table.to_string(), rows);
        self
    }

    /// Loads a fixture document shaped as `{"<table>": [rows...]}`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let document: HashMap<String, Vec<Value>> = serde_json::from_reader(reader)?;
        Ok(document
            .into_iter()
            .fold(Self::default(), |gateway, (table, rows)| {
                gateway.with_table(&table, rows)
            }))
    }

    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl QueryGateway for InMemoryGateway {
    async fn execute(&self, query: &Query) -> Result<Vec<Row>, GatewayError> {
        let rows = self
            .tables
            .get(query.table())
            .ok_or_else(|| GatewayError::UnknownTable(query.table().to_string()))?;

        Ok(rows
            .iter()
            .filter(|row| query.matches(row))
            .map(|row| query.project(row))
            .collect())
    }
}
