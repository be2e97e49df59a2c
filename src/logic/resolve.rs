use itertools::Itertools;

use crate::model::{Actor, Id};

pub struct ActorResolver;

impl ActorResolver {
    /// Resolve actor ids against the actor collection.
    ///
    /// The result follows the order of `ids`. Ids with no matching actor are
    /// dropped, and a repeated id resolves only once.
    pub fn resolve(actors: &[Actor], ids: &[Id]) -> Vec<Actor> {
        ids.iter()
            .unique()
            .filter_map(|id| actors.iter().find(|actor| &actor.id == id))
            .cloned()
            .collect()
    }
}
