use crate::logic::ActorResolver;
use crate::model::{Actor, Id, Movie};
use crate::store::{CatalogState, MemoryStore};

/// Helper function to create a Movie with no actors yet
fn create_seed_movie(id: &str, title: &str, release_year: i32, director: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        release_year,
        director: director.to_string(),
        genre: String::new(),
        rating: 0.0,
        actors: Vec::new(),
    }
}

/// Helper function to attach actors resolved from the seed actor list
fn with_actors(mut movie: Movie, actors: &[Actor], actor_ids: &[&str]) -> Movie {
    let actor_ids: Vec<Id> = actor_ids.iter().map(|id| id.to_string()).collect();
    movie.actors = ActorResolver::resolve(actors, &actor_ids);
    movie
}

pub fn seed_actors() -> Vec<Actor> {
    vec![
        Actor::new("1", "Tim Robbins", 1958),
        Actor::new("2", "Morgan Freeman", 1937),
        Actor::new("3", "Marlon Brando", 1924),
    ]
}

pub fn seed_movies(actors: &[Actor]) -> Vec<Movie> {
    let shawshank = Movie {
        genre: "Drama".to_string(),
        rating: 9.3,
        ..create_seed_movie("1", "The Shawshank Redemption", 1994, "Frank Darabont")
    };
    let godfather = Movie {
        genre: "Crime".to_string(),
        rating: 9.2,
        ..create_seed_movie("2", "The Godfather", 1972, "Francis Ford Coppola")
    };
    let dark_knight = Movie {
        genre: "Action".to_string(),
        rating: 9.0,
        ..create_seed_movie("3", "The Dark Knight", 2008, "Christopher Nolan")
    };

    vec![
        with_actors(shawshank, actors, &["1", "2"]),
        with_actors(godfather, actors, &["3"]),
        dark_knight,
    ]
}

/// The sample actors and movies the server starts with
pub fn seed_state() -> CatalogState {
    let actors = seed_actors();
    let movies = seed_movies(&actors);
    CatalogState::new(actors, movies)
}

pub fn load_seed_data() -> MemoryStore {
    let state = seed_state();
    log::info!(
        "Seeded catalog with {} actors and {} movies",
        state.actors.len(),
        state.movies.len()
    );
    MemoryStore::new(state)
}
