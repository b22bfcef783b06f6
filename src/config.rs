use std::env;
use std::path::PathBuf;

use anyhow::Context;
use axum::http::HeaderValue;

use crate::utils::time::DateRange;

pub const DEFAULT_BASE_URL: &str = "https://api.ouraring.com/v2/usercollection";
pub const DEFAULT_START_DATE: &str = "2025-01-16";
pub const DEFAULT_END_DATE: &str = "2025-01-23";
pub const DEFAULT_CSV_PATH: &str = "oura_data.csv";
// Lambda only allows writes under /tmp.
pub const LAMBDA_CSV_PATH: &str = "/tmp/oura_data.csv";
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub default_range: DateRange,
    pub csv_path: PathBuf,
    pub port: u16,
    pub cors_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var("OURA_API_KEY").context("OURA_API_KEY must be set")?;
        let base_url = var("OURA_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let default_range = DateRange::parse(
            &var("OURA_START_DATE").unwrap_or_else(|| DEFAULT_START_DATE.to_string()),
            &var("OURA_END_DATE").unwrap_or_else(|| DEFAULT_END_DATE.to_string()),
        )
        .context("invalid OURA_START_DATE/OURA_END_DATE")?;
        let csv_path = match var("OURA_CSV_PATH") {
            Some(path) => PathBuf::from(path),
            None if var("AWS_LAMBDA_RUNTIME_API").is_some() => PathBuf::from(LAMBDA_CSV_PATH),
            None => PathBuf::from(DEFAULT_CSV_PATH),
        };
        let port = match var("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT {p:?}"))?,
            None => DEFAULT_PORT,
        };
        let cors_origin = var("OURA_CORS_ORIGIN")
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .with_context(|| format!("invalid OURA_CORS_ORIGIN {origin:?}"))
            })
            .transpose()?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_range,
            csv_path,
            port,
            cors_origin,
        })
    }
}
