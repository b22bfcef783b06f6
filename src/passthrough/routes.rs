use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::error::Public;
use crate::oura::Category;
use crate::utils::time::RangeParams;
use crate::{AResult, AppState};

type RangeQuery = Result<Query<RangeParams>, QueryRejection>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sleep", get(sleep))
        .route("/readiness", get(readiness))
        .route("/activity", get(activity))
        .route("/cardiovascular_age", get(cardiovascular_age))
        .route("/stress", get(stress))
}

// Upstream body goes out untouched, `data` envelope and key order included.
async fn forward(state: AppState, query: RangeQuery, category: Category) -> AResult<Response> {
    let range = state.config.default_range.from_query(query)?;
    let body = state
        .oura
        .fetch_raw(category, range)
        .await
        .public(category.failure_message())?;
    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}

async fn sleep(State(state): State<AppState>, query: RangeQuery) -> AResult<Response> {
    forward(state, query, Category::Sleep).await
}

async fn readiness(State(state): State<AppState>, query: RangeQuery) -> AResult<Response> {
    forward(state, query, Category::Readiness).await
}

async fn activity(State(state): State<AppState>, query: RangeQuery) -> AResult<Response> {
    forward(state, query, Category::Activity).await
}

async fn cardiovascular_age(State(state): State<AppState>, query: RangeQuery) -> AResult<Response> {
    forward(state, query, Category::CardiovascularAge).await
}

async fn stress(State(state): State<AppState>, query: RangeQuery) -> AResult<Response> {
    forward(state, query, Category::Stress).await
}
