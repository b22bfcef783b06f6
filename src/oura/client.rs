use anyhow::{bail, Context};
use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::{DeserializeOwned, IgnoredAny};

use super::model::{Category, Envelope};
use crate::utils::time::DateRange;

#[derive(Debug, Clone)]
pub struct OuraClient {
    http: reqwest::Client,
    base_url: String,
}

impl OuraClient {
    pub fn new(base_url: impl Into<String>, api_key: &str) -> anyhow::Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .context("OURA_API_KEY contains characters not allowed in a header")?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, category: Category) -> String {
        format!("{}/{}", self.base_url, category.endpoint())
    }

    async fn get_bytes(&self, category: Category, range: DateRange) -> anyhow::Result<Bytes> {
        let response = self
            .http
            .get(self.url(category))
            .query(&[
                ("start_date", range.start_date()),
                ("end_date", range.end_date()),
            ])
            .send()
            .await
            .with_context(|| format!("request to {} failed", category.endpoint()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("{} returned {status}: {body}", category.endpoint());
        }

        response
            .bytes()
            .await
            .with_context(|| format!("reading {} response failed", category.endpoint()))
    }

    // Body byte for byte, only checked to be JSON.
    pub async fn fetch_raw(&self, category: Category, range: DateRange) -> anyhow::Result<Bytes> {
        let bytes = self.get_bytes(category, range).await?;
        serde_json::from_slice::<IgnoredAny>(&bytes)
            .with_context(|| format!("{} returned invalid JSON", category.endpoint()))?;
        Ok(bytes)
    }

    // Transport and status failures give an empty vec, a malformed 2xx body is an error.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        category: Category,
        range: DateRange,
    ) -> anyhow::Result<Vec<T>> {
        let bytes = match self.get_bytes(category, range).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(
                    category = category.endpoint(),
                    %range,
                    error = %format!("{err:#}"),
                    "upstream fetch failed, using empty result"
                );
                return Ok(Vec::new());
            }
        };

        let envelope: Envelope<T> = serde_json::from_slice(&bytes)
            .with_context(|| format!("malformed {} payload", category.endpoint()))?;
        tracing::debug!(
            category = category.endpoint(),
            entries = envelope.data.len(),
            "fetched"
        );
        Ok(envelope.data)
    }
}
