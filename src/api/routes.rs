use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{self, AppState};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Named operations (actor, movies, searchMovies, createMovie, ...)
        .route("/query", post(handlers::run_query::<S>))
        // Actors are read-only
        .route("/actors", get(handlers::list_actors::<S>))
        .route("/actors/:id", get(handlers::get_actor::<S>))
        // Movies
        .route(
            "/movies",
            get(handlers::list_movies::<S>).post(handlers::create_movie::<S>),
        )
        .route("/movies/search", post(handlers::search_movies::<S>))
        .route(
            "/movies/:id",
            get(handlers::get_movie::<S>)
                .patch(handlers::update_movie::<S>)
                .delete(handlers::delete_movie::<S>),
        )
}
