//! Read-only access to the hosted relational store.
//!
//! Handlers never talk to the store directly. They build a [`Query`] and hand it to whatever
//! [`QueryGateway`] the service was constructed with, which keeps the REST adapter swappable for
//! the in-memory gateway used by tests and offline fixture reports.

mod memory;
mod query;
mod rest;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub use memory::InMemoryGateway;
pub use query::{Filter, Query};
pub use rest::RestGateway;

/// One record returned by the store, keyed by column name.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Executes select queries against a relational store.
#[async_trait]
pub trait QueryGateway: Send + Sync {
    async fn execute(&self, query: &Query) -> Result<Vec<Row>, GatewayError>;
}

/// Runs `query` and decodes every returned row into `T`.
pub async fn fetch<G, T>(gateway: &G, query: &Query) -> Result<Vec<T>, GatewayError>
where
    G: QueryGateway + ?Sized,
    T: DeserializeOwned,
{
    gateway
        .execute(query)
        .await?
        .into_iter()
        .map(|row| {
            serde_json::from_value(serde_json::Value::Object(row)).map_err(|source| {
                GatewayError::Decode {
                    table: query.table().to_string(),
                    source,
                }
            })
        })
        .collect()
}

/// Failure talking to, or interpreting a response from, the store.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("data store request failed: {0}")]
    Transport(String),
    #[error("data store rejected query on '{table}' with status {status}: {body}")]
    Status {
        table: String,
        status: u16,
        body: String,
    },
    #[error("unexpected row shape in '{table}': {source}")]
    Decode {
        table: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown table '{0}'")]
    UnknownTable(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}
