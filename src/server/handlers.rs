use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::models::SearchResult;
use crate::search::SearchEngine;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub deep: Option<String>,
}

impl SearchParams {
    /// Only a literal `true` (any case) turns deep search on
    pub fn is_deep(&self) -> bool {
        self.deep.as_deref().is_some_and(|d| d.eq_ignore_ascii_case("true"))
    }
}

pub async fn search_conversations(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchResult>> {
    let results = SearchEngine::new(&state.store).search(&params.q, params.is_deep());
    Json(results)
}

/// Serializes straight from the shared store without copying the record
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Response {
    match state.store.find_by_uuid(&uuid) {
        Ok(conv) => Json(conv).into_response(),
        Err(_) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "Conversation not found" }))).into_response()
        }
    }
}
