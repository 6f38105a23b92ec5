use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    AppState,
    entities::movies,
    error::AppResult,
    models::{Movie, MoviePayload},
};

pub async fn home(State(state): State<Arc<AppState>>) -> Json<Movie> {
    Json(state.seed.clone())
}

pub async fn trending(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.tmdb.trending().await?;
    Ok(Json(movies))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    name: Option<String>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SearchQuery>,
) -> AppResult<Json<Vec<serde_json::Value>>> {
    // An absent ?name= goes upstream as the empty string rather than 400.
    let name = q.name.unwrap_or_default();
    let results = state.tmdb.search_by_name(&name).await?;
    Ok(Json(results))
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<(StatusCode, Json<movies::Model>)> {
    let created = state.store.insert(payload).await?;
    tracing::debug!(id = created.id, "movie added");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<movies::Model>>> {
    let rows = state.store.list_all().await?;
    Ok(Json(rows))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<Json<Option<movies::Model>>> {
    // No match serializes as null with a 200, not a 404.
    let updated = state.store.update_by_id(id, payload).await?;
    Ok(Json(updated))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Option<movies::Model>>> {
    let deleted = state.store.delete_by_id(id).await?;
    Ok(Json(deleted))
}
