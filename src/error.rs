use std::borrow::Cow;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub type AResult<T> = core::result::Result<T, AError>;

const GENERIC_MESSAGE: &str = "Something went wrong";

// `source` is only logged, `message` is what the client sees.
#[derive(Debug)]
pub struct AError {
    pub status: StatusCode,
    pub message: Cow<'static, str>,
    pub source: anyhow::Error,
}

impl AError {
    pub fn bad_request(err: impl Into<anyhow::Error>) -> Self {
        let source = err.into();
        Self {
            status: StatusCode::BAD_REQUEST,
            message: Cow::Owned(source.to_string()),
            source,
        }
    }
}

impl IntoResponse for AError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            tracing::error!(error = ?self.source, "{}", self.message);
        } else {
            tracing::info!(status = %self.status, "{}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl<E> From<E> for AError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: Cow::Borrowed(GENERIC_MESSAGE),
            source: err.into(),
        }
    }
}

pub trait Public<T> {
    fn public(self, message: &'static str) -> AResult<T>;
}

impl<T, E> Public<T> for core::result::Result<T, E>
where
    E: Into<AError>,
{
    fn public(self, message: &'static str) -> AResult<T> {
        self.map_err(|err| {
            let mut err: AError = err.into();
            err.message = Cow::Borrowed(message);
            err
        })
    }
}
