//! Collaboration view over the entity tables.
//!
//! The search engine never touches the store directly; it expands nodes
//! through a `CollaborationGraph`, which derives adjacency on demand from
//! credit and cast sets. The graph is implicit: no edge list is ever
//! materialized beyond the neighborhood of the person being expanded.
use std::collections::BTreeSet;

use crate::errors::DegreesError;
use crate::store::{EntityStore, MovieId, PersonId};

/// Derives, on demand, the (movie, co-star) pairs adjacent to a person.
///
/// A pure reader: it borrows the store, holds no state of its own, and the
/// same person always yields the same set.
pub struct CollaborationGraph<'a> {
    store: &'a EntityStore,
}

impl<'a> CollaborationGraph<'a> {
    #[must_use]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Every (movie, person) pair one hop from `person`: for each movie in
    /// their credit set, each member of that movie's cast. The person
    /// appears in their own neighborhood through their own cast membership;
    /// callers tolerate or filter that, it is not removed here.
    ///
    /// Returned as an ordered set: duplicate pairs collapse and iteration
    /// order is stable, which keeps search expansion deterministic.
    ///
    /// # Errors
    /// Returns `UnknownPerson`/`UnknownMovie` when an id does not resolve.
    /// Ids taken from the store itself always resolve.
    pub fn neighbors(
        &self,
        person: &PersonId,
    ) -> Result<BTreeSet<(MovieId, PersonId)>, DegreesError> {
        let mut out = BTreeSet::new();
        for movie_id in &self.store.person(person)?.credits {
            for costar in &self.store.movie(movie_id)?.cast {
                out.insert((movie_id.clone(), costar.clone()));
            }
        }
        Ok(out)
    }
}
