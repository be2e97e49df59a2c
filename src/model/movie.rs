use crate::model::{Actor, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Id,
    pub title: String,
    pub release_year: i32,
    pub director: String,
    pub genre: String,
    pub rating: f32,
    /// Actors as they were when the movie's actor ids were resolved
    #[serde(default)]
    pub actors: Vec<Actor>,
}

/// Payload for creating or partially updating a movie.
///
/// Every field is optional. On create an absent field falls back to the empty
/// value of its type; on update it leaves the stored field untouched. A JSON
/// `null` counts as absent, so an update cannot reset a field to empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    /// Actor ids to resolve (replaces the entire actor list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_ids: Option<Vec<Id>>,
}

impl Movie {
    /// Apply the present fields of `update`, leaving absent ones as they are.
    /// `actors` is the resolution of `update.actor_ids` and is only consulted
    /// when the update carries actor ids.
    pub fn apply_update(&mut self, update: MovieInput, actors: Option<Vec<Actor>>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(release_year) = update.release_year {
            self.release_year = release_year;
        }
        if let Some(director) = update.director {
            self.director = director;
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if update.actor_ids.is_some() {
            self.actors = actors.unwrap_or_default();
        }
    }
}

impl MovieInput {
    /// Convert to a full Movie with a server-assigned id and resolved actors
    pub fn into_movie(self, id: Id, actors: Vec<Actor>) -> Movie {
        Movie {
            id,
            title: self.title.unwrap_or_default(),
            release_year: self.release_year.unwrap_or_default(),
            director: self.director.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
            actors,
        }
    }
}
