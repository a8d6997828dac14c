// src/client.rs

use std::collections::HashMap;

use log::error;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("falha de conexão com a API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("a API retornou um erro: {0}")]
    Api(String),
    #[error("resposta inesperada da API: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphqlResponseError>>,
}

#[derive(Deserialize)]
struct GraphqlResponseError {
    message: String,
}

/// Explicit GraphQL client: queries go through `fetch` and are cached per
/// (query, variables), mutations go through `mutate` and never are. Callers
/// that know a mutation made a cached query stale issue `invalidate`.
pub struct GraphqlClient {
    http: Client,
    endpoint: String,
    cache: Mutex<HashMap<String, Value>>,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        GraphqlClient {
            http: Client::new(),
            endpoint: endpoint.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Runs a query, serving repeated calls from the in-memory cache.
    pub async fn fetch(&self, query: &str, variables: Value) -> Result<Value, GraphqlError> {
        let key = cache_key(query, &variables);
        if let Some(cached) = self.cache.lock().await.get(&key) {
            return Ok(cached.clone());
        }
        let data = self.execute(query, variables).await?;
        self.cache.lock().await.insert(key, data.clone());
        Ok(data)
    }

    /// Runs a mutation against the API.
    pub async fn mutate(&self, operation: &str, variables: Value) -> Result<Value, GraphqlError> {
        self.execute(operation, variables).await
    }

    /// Drops the cached result of a query so the next fetch goes back to the API.
    pub async fn invalidate(&self, query: &str, variables: &Value) {
        self.cache.lock().await.remove(&cache_key(query, variables));
    }

    async fn execute(&self, query: &str, variables: Value) -> Result<Value, GraphqlError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let body: GraphqlResponse = serde_json::from_str(&body)?;
        if let Some(errors) = body.errors {
            let messages = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            error!("GraphQL respondeu com erros: {}", messages);
            return Err(GraphqlError::Api(messages));
        }
        // a 200 without data is still a broken response
        body.data
            .ok_or_else(|| GraphqlError::Api("resposta sem campo data".to_string()))
    }
}

fn cache_key(query: &str, variables: &Value) -> String {
    format!("{}::{}", query, variables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_distinguishes_variables() {
        let a = cache_key("query Customer", &json!({ "customerId": "c1" }));
        let b = cache_key("query Customer", &json!({ "customerId": "c2" }));
        assert_ne!(a, b);
        assert_eq!(a, cache_key("query Customer", &json!({ "customerId": "c1" })));
    }
}
