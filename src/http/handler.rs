//! HTTP handlers for the atlas API

use crate::aggregate::{compute_protease_index, compute_statistics};
use crate::corpus::Corpus;
use crate::network::{build_graph, InteractionGraph, Projection};
use crate::search::search;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// `/api/proteases` entry: targets of one protease.
#[derive(Serialize)]
pub struct ProteaseEntry {
    pub targets: Vec<String>,
}

/// Handler for corpus statistics
pub async fn stats_handler(State(corpus): State<Arc<Corpus>>) -> impl IntoResponse {
    Json(compute_statistics(&corpus))
}

/// Handler for the protease -> targets index
pub async fn proteases_handler(State(corpus): State<Arc<Corpus>>) -> impl IntoResponse {
    let index: IndexMap<String, ProteaseEntry> = compute_protease_index(&corpus)
        .into_iter()
        .map(|(protease, targets)| (protease, ProteaseEntry { targets }))
        .collect();
    Json(index)
}

/// Handler for the full ECM component collection
pub async fn ecm_collection_handler(State(corpus): State<Arc<Corpus>>) -> impl IntoResponse {
    Json(json!({ "ecm_components": corpus.ecm_components() }))
}

/// Handler for a single ECM component, matched case-insensitively
pub async fn ecm_component_handler(
    State(corpus): State<Arc<Corpus>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match corpus.find_ecm_component(&name) {
        Some(component) => Json(component).into_response(),
        None => not_found("Component not found"),
    }
}

/// Handler for the full cell type collection
pub async fn cell_type_collection_handler(State(corpus): State<Arc<Corpus>>) -> impl IntoResponse {
    Json(json!({ "cell_types": corpus.cell_types() }))
}

/// Handler for a single cell type, matched case-insensitively
pub async fn cell_type_handler(
    State(corpus): State<Arc<Corpus>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match corpus.find_cell_type(&name) {
        Some(cell) => Json(cell).into_response(),
        None => not_found("Cell type not found"),
    }
}

#[derive(Deserialize)]
pub struct InteractionParams {
    projection: Option<String>,
}

/// Handler for interaction graphs
///
/// Without a `projection` parameter, returns all three projections keyed by
/// wire name. An unknown selector is a 400 naming the selector.
pub async fn interactions_handler(
    State(corpus): State<Arc<Corpus>>,
    Query(params): Query<InteractionParams>,
) -> impl IntoResponse {
    match params.projection {
        Some(name) => match name.parse::<Projection>() {
            Ok(projection) => Json(build_graph(&corpus, projection)).into_response(),
            Err(e) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
            }
        },
        None => {
            let graphs: IndexMap<&'static str, InteractionGraph> = Projection::ALL
                .into_iter()
                .map(|projection| (projection.as_str(), build_graph(&corpus, projection)))
                .collect();
            Json(graphs).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// Handler for corpus search; an absent `q` is the empty query.
pub async fn search_handler(
    State(corpus): State<Arc<Corpus>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    Json(search(&corpus, params.q.as_deref().unwrap_or("")))
}

fn not_found(message: &str) -> axum::response::Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}
