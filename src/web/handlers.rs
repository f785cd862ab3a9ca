//! HTTP request handlers

use super::state::AppState;
use crate::results::SearchResult;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;
use tracing::{debug, error};

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Output format
    pub format: Option<String>,
}

/// Search results response for JSON format
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub number_of_results: usize,
    pub items: Vec<ItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub link: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub context: Option<String>,
    pub mime: Option<String>,
}

impl SearchResponse {
    fn from_result(query: &str, result: &SearchResult) -> Self {
        Self {
            query: query.to_string(),
            number_of_results: result.len(),
            items: result
                .iter()
                .map(|item| ItemResponse {
                    link: item.link.clone(),
                    title: item.title.clone(),
                    thumbnail: item.thumbnail().map(str::to_string),
                    context: item.context().map(str::to_string),
                    mime: item.mime.clone(),
                })
                .collect(),
        }
    }

    fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            number_of_results: 0,
            items: vec![],
        }
    }
}

/// Search page handler: query form plus the current display surface
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let (results_html, result_count) = {
        let display = state.display.read().unwrap();
        (
            display.surface().html().to_string(),
            display.surface().len(),
        )
    };

    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("results_html", &results_html);
    ctx.insert("result_count", &result_count);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Search handler
///
/// Commits successful results to the shared display surface and redirects
/// back to the page. Failures are logged and nothing is rendered; the page
/// keeps its previous contents and stays usable.
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    // No q parameter means nothing was submitted. A present-but-empty query
    // is passed through to the upstream unvalidated.
    let raw_query = match params.q {
        Some(q) => q,
        None => return Redirect::to("/").into_response(),
    };

    // JSON is a pure API view: no token, no display mutation, so polling it
    // cannot supersede an in-flight page search.
    if params.format.as_deref() == Some("json") {
        return match state.client.search(&raw_query).await {
            Ok(result) => Json(SearchResponse::from_result(&raw_query, &result)).into_response(),
            Err(e) => {
                error!("search '{}' failed: {}", raw_query, e);
                Json(SearchResponse::empty(&raw_query)).into_response()
            }
        };
    }

    // Token is issued before the upstream call; a newer search started while
    // this one is in flight makes this token stale.
    let token = state.display.read().unwrap().begin();

    match state.client.search(&raw_query).await {
        Ok(result) => {
            let committed = state.display.write().unwrap().commit(token, &result);
            if !committed {
                debug!("search '{}' superseded by a newer request", raw_query);
            }
        }
        Err(e) => {
            error!("search '{}' failed: {}", raw_query, e);
        }
    }

    Redirect::to("/").into_response()
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
