use std::collections::HashSet;

use crate::store::{EntityStore, Person, PersonId};

/// Resolves a human-readable name to a unique person id.
///
/// Names are matched case-insensitively against the store's name index.
/// Ambiguity is delegated to an injected chooser so the library never
/// performs interactive I/O itself; `crate::app` supplies a stdin prompt,
/// tests supply closures.
pub struct NameResolver<'a> {
    store: &'a EntityStore,
}

impl<'a> NameResolver<'a> {
    #[must_use]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Every person matching `name`, sorted by id so disambiguation prompts
    /// render in a stable order.
    #[must_use]
    pub fn candidates(&self, name: &str) -> Vec<&'a Person> {
        let mut out: Vec<&Person> = self
            .store
            .ids_for_name(name)
            .into_iter()
            .flat_map(HashSet::iter)
            .filter_map(|id| self.store.person(id).ok())
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    /// Resolve `name` to a person id, invoking `choose` only when several
    /// people share the name. A choice outside the candidate set resolves
    /// to `None`, exactly like an unknown name.
    pub fn resolve_with<F>(&self, name: &str, mut choose: F) -> Option<PersonId>
    where
        F: FnMut(&[&Person]) -> Option<PersonId>,
    {
        let candidates = self.candidates(name);
        match candidates.as_slice() {
            [] => None,
            [only] => Some(only.id.clone()),
            many => {
                let picked = choose(many)?;
                many.iter().any(|p| p.id == picked).then_some(picked)
            }
        }
    }
}
