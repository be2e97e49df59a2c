use crate::logic::{filter_movies, ActorResolver};
use crate::model::{Actor, Id, Movie, MovieFilter, MovieInput};
use crate::store::traits::{ActorStore, MovieStore};
use anyhow::{bail, Result};
use parking_lot::RwLock;

/// Both collections, owned together so one lock guards them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub actors: Vec<Actor>,
    pub movies: Vec<Movie>,
}

impl CatalogState {
    pub fn new(actors: Vec<Actor>, movies: Vec<Movie>) -> Self {
        Self { actors, movies }
    }
}

/// In-memory store. State lives for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<CatalogState>,
}

impl MemoryStore {
    pub fn new(state: CatalogState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy of the current state
    #[cfg(test)]
    pub fn snapshot(&self) -> CatalogState {
        self.state.read().clone()
    }
}

#[async_trait::async_trait]
impl ActorStore for MemoryStore {
    async fn get_actor(&self, id: &Id) -> Result<Option<Actor>> {
        let state = self.state.read();
        Ok(state.actors.iter().find(|actor| &actor.id == id).cloned())
    }

    async fn list_actors(&self) -> Result<Vec<Actor>> {
        Ok(self.state.read().actors.clone())
    }

    async fn resolve_actors(&self, ids: &[Id]) -> Result<Vec<Actor>> {
        let state = self.state.read();
        Ok(ActorResolver::resolve(&state.actors, ids))
    }
}

#[async_trait::async_trait]
impl MovieStore for MemoryStore {
    async fn get_movie(&self, id: &Id) -> Result<Option<Movie>> {
        let state = self.state.read();
        Ok(state.movies.iter().find(|movie| &movie.id == id).cloned())
    }

    async fn list_movies(&self, filter: Option<&MovieFilter>) -> Result<Vec<Movie>> {
        let movies = self.state.read().movies.clone();
        Ok(filter_movies(movies, filter))
    }

    async fn insert_movie(&self, movie: Movie) -> Result<()> {
        let mut state = self.state.write();
        if state.movies.iter().any(|existing| existing.id == movie.id) {
            bail!("Movie id '{}' already exists", movie.id);
        }
        state.movies.push(movie);
        Ok(())
    }

    async fn update_movie(&self, id: &Id, update: MovieInput) -> Result<Option<Movie>> {
        let mut state = self.state.write();
        let CatalogState { actors, movies } = &mut *state;

        let Some(movie) = movies.iter_mut().find(|movie| &movie.id == id) else {
            return Ok(None);
        };

        let resolved = update
            .actor_ids
            .as_deref()
            .map(|ids| ActorResolver::resolve(&actors[..], ids));
        movie.apply_update(update, resolved);

        Ok(Some(movie.clone()))
    }

    async fn delete_movie(&self, id: &Id) -> Result<bool> {
        let mut state = self.state.write();
        let before = state.movies.len();
        state.movies.retain(|movie| &movie.id != id);
        Ok(state.movies.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_state;

    #[tokio::test]
    async fn test_store_basic_operations() {
        let store = MemoryStore::new(seed_state());

        let actor = store.get_actor(&"2".to_string()).await.unwrap();
        assert_eq!(actor.unwrap().name, "Morgan Freeman");
        assert!(store.get_actor(&"999".to_string()).await.unwrap().is_none());

        assert_eq!(store.list_actors().await.unwrap().len(), 3);
        assert_eq!(store.list_movies(None).await.unwrap().len(), 3);

        assert!(store.delete_movie(&"2".to_string()).await.unwrap());
        assert!(!store.delete_movie(&"2".to_string()).await.unwrap());
        assert_eq!(store.list_movies(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = MemoryStore::new(seed_state());
        let before = store.snapshot();

        let duplicate = MovieInput::default().into_movie("1".to_string(), Vec::new());
        assert!(store.insert_movie(duplicate).await.is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_update_resolves_actors_under_one_lock() {
        let store = MemoryStore::new(seed_state());

        let update = MovieInput {
            actor_ids: Some(vec!["3".to_string(), "42".to_string(), "1".to_string()]),
            ..Default::default()
        };
        let updated = store
            .update_movie(&"3".to_string(), update)
            .await
            .unwrap()
            .unwrap();

        let ids: Vec<_> = updated.actors.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(
            store.get_movie(&"3".to_string()).await.unwrap(),
            Some(updated)
        );
    }

    #[tokio::test]
    async fn test_update_missing_movie_leaves_state_untouched() {
        let store = MemoryStore::new(seed_state());
        let before = store.snapshot();

        let update = MovieInput {
            title: Some("Nope".to_string()),
            ..Default::default()
        };
        let result = store.update_movie(&"999".to_string(), update).await.unwrap();

        assert!(result.is_none());
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::empty();
        assert!(store.list_actors().await.unwrap().is_empty());
        assert!(store.list_movies(None).await.unwrap().is_empty());
        assert!(store
            .resolve_actors(&["1".to_string()])
            .await
            .unwrap()
            .is_empty());
    }
}
