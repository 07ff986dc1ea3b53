//! costar-degrees — degrees of separation over movie credits
//!
//! Load a people/movies/stars dataset into an `EntityStore` and search the
//! shortest chain of shared credits between two actors.
//!
//! # Features
//! - CSV ingestion; dangling credit rows are dropped, not fatal
//! - Breadth-first shortest path with pluggable frontier policies
//! - Case-insensitive name resolution with injected disambiguation
//! - JSON snapshots of a loaded store for fast reloads
//!
//! # Quickstart (Library)
//! ```no_run
//! use costar_degrees::loader;
//! use costar_degrees::search::ShortestPathQuery;
//! use costar_degrees::store::PersonId;
//!
//! let store = loader::load_directory(std::path::Path::new("data/small")).expect("load dataset");
//! let query = ShortestPathQuery::new(PersonId("102".into()), PersonId("129".into()));
//! match query.run(&store).expect("valid ids") {
//!     Some(path) => println!("{} degrees of separation", path.len()),
//!     None => println!("not connected"),
//! }
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! costar-degrees build --data data/small --save store.json
//! costar-degrees degrees --store store.json --source "Emma Watson" --target "Jennifer Lawrence"
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod loader;
pub mod search;
pub mod store;
pub mod utils;
