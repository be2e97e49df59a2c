use crate::model::Movie;
use serde::{Deserialize, Serialize};

pub const MOVIE_CREATED: &str = "Movie created successfully";
pub const MOVIE_UPDATED: &str = "Movie updated successfully";
pub const MOVIE_DELETED: &str = "Movie deleted successfully";
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Result envelope returned by every movie mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieResponse {
    pub success: bool,
    pub message: String,
    pub movie: Option<Movie>,
}

impl MovieResponse {
    pub fn success(message: &str, movie: Option<Movie>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            movie,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            movie: None,
        }
    }

    pub fn not_found() -> Self {
        Self::failure(MOVIE_NOT_FOUND)
    }
}
