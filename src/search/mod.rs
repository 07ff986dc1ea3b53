//! Breadth-first search over the collaboration graph.
//!
//! `ShortestPathQuery` finds the minimum number of shared-credit hops
//! between two people and reconstructs the connecting path. The search is
//! a plain BFS: nodes wait in a `frontier::Frontier`, states are marked
//! explored when removed, and parent links form a disposable tree that is
//! dropped when the query returns. Exchanging `QueueFrontier` for
//! `StackFrontier` turns the same loop into depth-first exploration.
use std::collections::HashSet;

use serde::Serialize;

use crate::errors::DegreesError;
use crate::graph::CollaborationGraph;
use crate::store::{EntityStore, MovieId, PersonId};

pub mod frontier;

use frontier::{Frontier, NodeId, QueueFrontier};

// One discovered position: the person reached, the movie that reached them
// (`None` only for the root), and the parent's arena index. Parent links
// point strictly backwards into the arena, so the tree is acyclic by
// construction.
#[derive(Debug, Clone)]
struct SearchNode {
    state: PersonId,
    parent: Option<NodeId>,
    action: Option<MovieId>,
}

/// One edge of a reconstructed path: `person` was reached through `movie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

/// Edges traversed from source (exclusive) to target (inclusive). The
/// length is the degrees of separation.
pub type Path = Vec<PathStep>;

/// Statistics from a single search run.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The connecting path, or `None` when the two people are not
    /// connected (a normal outcome, not an error).
    pub path: Option<Path>,
    /// States expanded (removed from the frontier).
    pub expanded: usize,
    /// Nodes allocated over the run, root included.
    pub generated: usize,
}

/// Shortest co-star connection between two people.
pub struct ShortestPathQuery {
    pub source: PersonId,
    pub target: PersonId,
}

impl ShortestPathQuery {
    #[must_use]
    pub fn new(source: PersonId, target: PersonId) -> Self {
        Self { source, target }
    }

    /// Run a breadth-first search and return the shortest path, or `None`
    /// when the two people are not connected.
    ///
    /// # Errors
    /// Fails fast with `DegreesError::UnknownPerson` when either endpoint
    /// is absent from the store; no search state is built in that case.
    pub fn run(&self, store: &EntityStore) -> Result<Option<Path>, DegreesError> {
        Ok(self.run_with::<QueueFrontier>(store)?.path)
    }

    /// Run with an explicit frontier policy.
    ///
    /// Only `QueueFrontier` carries the shortest-path guarantee;
    /// `StackFrontier` explores depth-first and still terminates, with *a*
    /// path whenever one exists.
    ///
    /// # Errors
    /// Fails fast with `DegreesError::UnknownPerson` when either endpoint
    /// is absent from the store.
    pub fn run_with<F>(&self, store: &EntityStore) -> Result<SearchOutcome, DegreesError>
    where
        F: Frontier + Default,
    {
        store.person(&self.source)?;
        store.person(&self.target)?;

        // A person is zero hops from themself. Detecting the goal only on
        // freshly created children (below) would fall through to "not
        // connected" here; the empty path is the consistent answer.
        if self.source == self.target {
            return Ok(SearchOutcome { path: Some(Path::new()), expanded: 0, generated: 0 });
        }

        let graph = CollaborationGraph::new(store);
        // Arena owning every node created this run.
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut explored: HashSet<PersonId> = HashSet::new();
        let mut pending = F::default();

        nodes.push(SearchNode { state: self.source.clone(), parent: None, action: None });
        pending.add(0, self.source.clone());

        let mut expanded = 0usize;
        while let Some(current) = pending.remove() {
            let state = nodes[current].state.clone();
            // States become explored on removal, not on enqueue; the
            // frontier's own pending index covers the gap in between.
            explored.insert(state.clone());
            expanded += 1;

            for (movie, costar) in graph.neighbors(&state)? {
                if pending.contains_state(&costar) || explored.contains(&costar) {
                    continue;
                }
                let child = nodes.len();
                nodes.push(SearchNode {
                    state: costar.clone(),
                    parent: Some(current),
                    action: Some(movie),
                });
                // Goal test on generation, before the child is enqueued.
                if costar == self.target {
                    let path = recover(&nodes, child);
                    let generated = nodes.len();
                    return Ok(SearchOutcome { path: Some(path), expanded, generated });
                }
                pending.add(child, costar);
            }
        }

        Ok(SearchOutcome { path: None, expanded, generated: nodes.len() })
    }
}

// Walk parent links from `goal` back to the root, then reverse into
// source-to-target order.
fn recover(nodes: &[SearchNode], goal: NodeId) -> Path {
    let mut steps = Path::new();
    let mut cur = goal;
    while let (Some(parent), Some(movie)) = (nodes[cur].parent, nodes[cur].action.clone()) {
        steps.push(PathStep { movie, person: nodes[cur].state.clone() });
        cur = parent;
    }
    steps.reverse();
    steps
}
