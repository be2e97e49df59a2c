use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::Json,
    Json as RequestJson,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::query::{CatalogQuery, QueryResponse};
use crate::error::{CatalogError, Result};
use crate::logic::Catalog;
use crate::model::{Actor, Id, Movie, MovieFilter, MovieInput, MovieResponse};
use crate::store::traits::Store;

pub type AppState<S> = Arc<Catalog<S>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    pub genre: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// Request body that reports decoding failures as `{"error": ...}`
type JsonBody<T> = std::result::Result<RequestJson<T>, JsonRejection>;

fn json_body<T>(body: JsonBody<T>) -> Result<T> {
    body.map(|RequestJson(value)| value)
        .map_err(|rejection| CatalogError::InvalidRequest(rejection.body_text()))
}

/// Operation endpoint: decodes a named operation and returns `{"data": ...}`
pub async fn run_query<S: Store>(
    State(catalog): State<AppState<S>>,
    body: JsonBody<CatalogQuery>,
) -> Result<Json<QueryResponse>> {
    let query = json_body(body)?;

    log::debug!("Executing operation {}", query.name());
    let data = query.execute(&catalog).await?;
    Ok(Json(QueryResponse { data }))
}

pub async fn list_actors<S: Store>(
    State(catalog): State<AppState<S>>,
) -> Result<Json<ListResponse<Actor>>> {
    let actors = catalog.list_actors().await?;
    Ok(Json(actors.into()))
}

pub async fn get_actor<S: Store>(
    State(catalog): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<Actor>> {
    match catalog.get_actor(&id).await? {
        Some(actor) => Ok(Json(actor)),
        None => Err(CatalogError::NotFound("Actor not found".to_string())),
    }
}

pub async fn list_movies<S: Store>(
    State(catalog): State<AppState<S>>,
    Query(query): Query<MovieListQuery>,
) -> Result<Json<ListResponse<Movie>>> {
    let movies = match query.genre {
        Some(genre) => catalog.list_movies_by_genre(&genre).await?,
        None => catalog.list_movies().await?,
    };
    Ok(Json(movies.into()))
}

pub async fn get_movie<S: Store>(
    State(catalog): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<Movie>> {
    match catalog.get_movie(&id).await? {
        Some(movie) => Ok(Json(movie)),
        None => Err(CatalogError::NotFound("Movie not found".to_string())),
    }
}

pub async fn search_movies<S: Store>(
    State(catalog): State<AppState<S>>,
    body: JsonBody<MovieFilter>,
) -> Result<Json<ListResponse<Movie>>> {
    let filter = json_body(body)?;
    let movies = catalog.search_movies(Some(&filter)).await?;
    Ok(Json(movies.into()))
}

pub async fn create_movie<S: Store>(
    State(catalog): State<AppState<S>>,
    body: JsonBody<MovieInput>,
) -> Result<Json<MovieResponse>> {
    let input = json_body(body)?;
    Ok(Json(catalog.create_movie(input).await))
}

pub async fn update_movie<S: Store>(
    State(catalog): State<AppState<S>>,
    Path(id): Path<Id>,
    body: JsonBody<MovieInput>,
) -> Result<Json<MovieResponse>> {
    let input = json_body(body)?;
    Ok(Json(catalog.update_movie(&id, input).await))
}

pub async fn delete_movie<S: Store>(
    State(catalog): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Json<MovieResponse> {
    Json(catalog.delete_movie(&id).await)
}
