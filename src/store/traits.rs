use crate::model::{Actor, Id, Movie, MovieFilter, MovieInput};
use anyhow::Result;

#[async_trait::async_trait]
pub trait ActorStore: Send + Sync {
    async fn get_actor(&self, id: &Id) -> Result<Option<Actor>>;
    async fn list_actors(&self) -> Result<Vec<Actor>>;
    /// Resolve actor ids to the stored actors, in the order given
    async fn resolve_actors(&self, ids: &[Id]) -> Result<Vec<Actor>>;
}

#[async_trait::async_trait]
pub trait MovieStore: Send + Sync {
    async fn get_movie(&self, id: &Id) -> Result<Option<Movie>>;
    /// List movies in insertion order, keeping only those matching `filter`
    async fn list_movies(&self, filter: Option<&MovieFilter>) -> Result<Vec<Movie>>;
    /// Append a new movie; fails if the id is already taken
    async fn insert_movie(&self, movie: Movie) -> Result<()>;
    /// Apply a partial update atomically, returning the updated movie or
    /// `None` when no movie has this id
    async fn update_movie(&self, id: &Id, update: MovieInput) -> Result<Option<Movie>>;
    /// Remove a movie, returning whether one was removed
    async fn delete_movie(&self, id: &Id) -> Result<bool>;
}

pub trait Store: ActorStore + MovieStore + Send + Sync {}
impl<T: ActorStore + MovieStore + Send + Sync> Store for T {}
