use anyhow::Context;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use super::{to_csv, CSV_FILE_NAME};
use crate::daily::organize;
use crate::error::Public;
use crate::utils::time::RangeParams;
use crate::{AResult, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/download-csv", get(download_csv))
}

// Concurrent downloads share the one CSV path.
async fn download_csv(
    State(state): State<AppState>,
    query: Result<Query<RangeParams>, QueryRejection>,
) -> AResult<Response> {
    let range = state.config.default_range.from_query(query)?;

    let records = organize(&state.oura, range)
        .await
        .public("Failed to generate CSV file.")?;
    let csv = to_csv(&records).public("Failed to generate CSV file.")?;

    let path = &state.config.csv_path;
    tokio::fs::write(path, &csv)
        .await
        .with_context(|| format!("writing {}", path.display()))
        .public("Failed to generate CSV file.")?;

    let body = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))
        .public("Failed to send CSV file.")?;

    tracing::info!(path = %path.display(), rows = records.len(), "CSV file written");

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{CSV_FILE_NAME}\""))?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
