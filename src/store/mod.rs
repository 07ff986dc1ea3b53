//! Entity tables for the collaboration graph.
//!
//! This module defines the core data structures (`EntityStore`, `Person`,
//! `Movie`) and the membership relation between them: a person's credit set
//! and a movie's cast set always mirror each other.
//!
//! A store is populated once, by `crate::loader` or by deserializing a saved
//! JSON snapshot, and is read-only afterwards; searches in `crate::search`
//! only ever take `&EntityStore`, so independent stores coexist freely in
//! one process.
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::errors::DegreesError;

pub mod resolver;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub String);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
    pub credits: HashSet<MovieId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<u16>,
    pub cast: HashSet<PersonId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntityStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    // Lowercased display name -> ids sharing it, for name resolution
    names: HashMap<String, HashSet<PersonId>>,
}

impl EntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person during load, indexing their name case-insensitively.
    /// Replaces any previous entry with the same id.
    pub fn insert_person(&mut self, person: Person) {
        self.names.entry(person.name.to_lowercase()).or_default().insert(person.id.clone());
        self.people.insert(person.id.clone(), person);
    }

    /// Insert a movie during load. Replaces any previous entry with the same id.
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id.clone(), movie);
    }

    /// Record that `person` appears in `movie`, updating both the person's
    /// credit set and the movie's cast set.
    ///
    /// Returns `false` and records nothing when either id is unknown:
    /// dangling references in source data are dropped here instead of
    /// failing the load.
    pub fn link(&mut self, person: &PersonId, movie: &MovieId) -> bool {
        if !self.people.contains_key(person) || !self.movies.contains_key(movie) {
            return false;
        }
        if let Some(p) = self.people.get_mut(person) {
            p.credits.insert(movie.clone());
        }
        if let Some(m) = self.movies.get_mut(movie) {
            m.cast.insert(person.clone());
        }
        true
    }

    /// Look up a person by id.
    ///
    /// # Errors
    /// Returns `DegreesError::UnknownPerson` when no person has this id.
    pub fn person(&self, id: &PersonId) -> Result<&Person, DegreesError> {
        self.people.get(id).ok_or_else(|| DegreesError::UnknownPerson(id.clone()))
    }

    /// Look up a movie by id.
    ///
    /// # Errors
    /// Returns `DegreesError::UnknownMovie` when no movie has this id.
    pub fn movie(&self, id: &MovieId) -> Result<&Movie, DegreesError> {
        self.movies.get(id).ok_or_else(|| DegreesError::UnknownMovie(id.clone()))
    }

    /// Ids of every person whose display name matches, case-insensitively.
    /// Serves the name resolver only; searches never consult names.
    #[must_use]
    pub fn ids_for_name(&self, name: &str) -> Option<&HashSet<PersonId>> {
        self.names.get(&name.to_lowercase())
    }

    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Save the store as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `DegreesError::Io` if serialization or writing the file fails.
    pub fn save_json(&self, path: &std::path::Path) -> Result<(), DegreesError> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| DegreesError::Io(std::io::Error::other(e.to_string())))?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Load a store from a JSON snapshot.
    ///
    /// # Errors
    /// Returns `DegreesError::Io` if reading the file fails or JSON is invalid.
    pub fn load_json(path: &std::path::Path) -> Result<Self, DegreesError> {
        let data = std::fs::read_to_string(path)?;
        let store: EntityStore = serde_json::from_str(&data)
            .map_err(|e| DegreesError::Io(std::io::Error::other(e.to_string())))?;
        Ok(store)
    }
}
