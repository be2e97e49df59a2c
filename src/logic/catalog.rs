use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::Result;
use crate::model::{
    generate_id, Actor, Id, Movie, MovieFilter, MovieInput, MovieResponse, MOVIE_CREATED,
    MOVIE_DELETED, MOVIE_UPDATED,
};
use crate::store::traits::Store;

/// Serves the actor and movie collections held by a store.
///
/// Lookups treat an empty or unknown id as "no match" and return `None`.
/// Mutations never fail with an error: every outcome, including a store
/// fault, is reported through a [`MovieResponse`].
pub struct Catalog<S> {
    store: Arc<S>,
}

impl<S: Store> Catalog<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn get_actor(&self, id: &str) -> Result<Option<Actor>> {
        if id.is_empty() {
            return Ok(None);
        }
        let actor = self.store.get_actor(&id.to_string()).await?;
        debug!("Actor lookup '{}': found={}", id, actor.is_some());
        Ok(actor)
    }

    pub async fn list_actors(&self) -> Result<Vec<Actor>> {
        Ok(self.store.list_actors().await?)
    }

    pub async fn get_movie(&self, id: &str) -> Result<Option<Movie>> {
        if id.is_empty() {
            return Ok(None);
        }
        let movie = self.store.get_movie(&id.to_string()).await?;
        debug!("Movie lookup '{}': found={}", id, movie.is_some());
        Ok(movie)
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        Ok(self.store.list_movies(None).await?)
    }

    pub async fn list_movies_by_genre(&self, genre: &str) -> Result<Vec<Movie>> {
        let filter = MovieFilter::by_genre(genre);
        Ok(self.store.list_movies(Some(&filter)).await?)
    }

    pub async fn search_movies(&self, filter: Option<&MovieFilter>) -> Result<Vec<Movie>> {
        let movies = self.store.list_movies(filter).await?;
        debug!("Search {:?} matched {} movies", filter, movies.len());
        Ok(movies)
    }

    pub async fn create_movie(&self, input: MovieInput) -> MovieResponse {
        match self.try_create_movie(input).await {
            Ok(movie) => {
                info!("Created movie '{}' ({})", movie.title, movie.id);
                MovieResponse::success(MOVIE_CREATED, Some(movie))
            }
            Err(e) => {
                warn!("Failed to create movie: {}", e);
                MovieResponse::failure(format!("Failed to create movie: {}", e))
            }
        }
    }

    pub async fn update_movie(&self, id: &str, input: MovieInput) -> MovieResponse {
        match self.store.update_movie(&id.to_string(), input).await {
            Ok(Some(movie)) => {
                info!("Updated movie '{}' ({})", movie.title, movie.id);
                MovieResponse::success(MOVIE_UPDATED, Some(movie))
            }
            Ok(None) => {
                warn!("Update skipped, movie '{}' not found", id);
                MovieResponse::not_found()
            }
            Err(e) => {
                warn!("Failed to update movie '{}': {}", id, e);
                MovieResponse::failure(format!("Failed to update movie: {}", e))
            }
        }
    }

    pub async fn delete_movie(&self, id: &str) -> MovieResponse {
        match self.store.delete_movie(&id.to_string()).await {
            Ok(true) => {
                info!("Deleted movie {}", id);
                MovieResponse::success(MOVIE_DELETED, None)
            }
            Ok(false) => {
                warn!("Delete skipped, movie '{}' not found", id);
                MovieResponse::not_found()
            }
            Err(e) => {
                warn!("Failed to delete movie '{}': {}", id, e);
                MovieResponse::failure(format!("Failed to delete movie: {}", e))
            }
        }
    }

    async fn try_create_movie(&self, input: MovieInput) -> anyhow::Result<Movie> {
        let actors = match input.actor_ids.as_deref() {
            Some(ids) => self.store.resolve_actors(ids).await?,
            None => Vec::new(),
        };
        let movie = input.into_movie(generate_id(), actors);
        self.store.insert_movie(movie.clone()).await?;
        Ok(movie)
    }
}

/// Lookup helper for request layers where the id argument may be missing
pub fn optional_id(id: Option<&Id>) -> &str {
    id.map(String::as_str).unwrap_or_default()
}
