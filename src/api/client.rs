use crate::config::Config;
use crate::models::{Category, GlossaryTerm, QuizQuestion};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Read-only client for the PostgREST endpoint backing the glossary.
/// One network round trip per call, no caching between calls.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
            http,
        }
    }

    /// Categories sorted server-side by their explicit ordering index.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_rows("glossary_categories", "select=*&order=order_index.asc")
            .await
    }

    /// Full glossary term table, unordered; grouping happens client-side.
    pub async fn fetch_terms(&self) -> Result<Vec<GlossaryTerm>, ApiError> {
        self.get_rows("glossary_terms", "select=*").await
    }

    /// Full question table, unordered; the quiz view shuffles its own copy.
    pub async fn fetch_questions(&self) -> Result<Vec<QuizQuestion>, ApiError> {
        self.get_rows("quiz_questions", "select=*").await
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
    ) -> Result<Vec<T>, ApiError> {
        let response = self
            .http
            .get(self.table_url(table, query))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus { status, body });
        }

        Ok(response.json().await?)
    }

    fn table_url(&self, table: &str, query: &str) -> String {
        format!("{}/rest/v1/{}?{}", self.base_url, table, query)
    }
}
