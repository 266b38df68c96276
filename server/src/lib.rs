use anyhow::Result;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use index::InvertedIndex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_hits: usize,
    pub results: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<InvertedIndex>,
}

/// Loads the index file once at startup and serves single-word lookups over
/// it. The index is read-only from here on; a crawl run produces a new file
/// and the server is restarted to pick it up.
pub fn build_app(index_path: &str) -> Result<Router> {
    let index = InvertedIndex::load(index_path)?;
    tracing::info!(path = index_path, docs = index.doc_count(), words = index.word_count(), "index loaded");
    let state = AppState {
        index: Arc::new(index),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .with_state(state)
        .layer(cors))
}

/// Single-word lookup. Unknown words return an empty result list, and the
/// order of results carries no meaning.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let results = state.index.get_docs(&params.q);
    Json(SearchResponse {
        query: params.q,
        total_hits: results.len(),
        results,
    })
}
