use async_trait::async_trait;
use tracing::debug;

use super::{Filter, GatewayError, Query, QueryGateway, Row};

/// Gateway for a hosted store exposing tables over a PostgREST-style REST endpoint
/// (`GET {base}/rest/v1/{table}?select=..&column=eq.value`).
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestGateway {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

/// Encodes the projection and filters as query-string pairs.
pub(crate) fn query_params(query: &Query) -> Vec<(String, String)> {
    let select = if query.selects_all() {
        "*".to_string()
    } else {
        query.columns().join(",")
    };

    let mut params = vec![("select".to_string(), select)];
    for filter in query.filters() {
        let value = match filter {
            Filter::Eq { value, .. } => format!("eq.{value}"),
            Filter::In { values, .. } => {
                let quoted: Vec<String> = values
                    .iter()
                    .map(|value| format!("\"{}\"", value.replace('"', "\\\"")))
                    .collect();
                format!("in.({})", quoted.join(","))
            }
        };
        params.push((filter.column().to_string(), value));
    }
    params
}

#[async_trait]
impl QueryGateway for RestGateway {
    async fn execute(&self, query: &Query) -> Result<Vec<Row>, GatewayError> {
        debug!(
            table = query.table(),
            filters = query.filters().len(),
            "querying data store"
        );

        let response = self
            .client
            .get(self.table_url(query.table()))
            .query(&query_params(query))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                table: query.table().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Vec<Row>>().await?)
    }
}
