use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, Commands};
use crate::graph::CollaborationGraph;
use crate::loader;
use crate::search::ShortestPathQuery;
use crate::store::resolver::NameResolver;
use crate::store::{EntityStore, Person, PersonId};

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = env!("CARGO_PKG_NAME");
            let mut out = io::stdout();
            generate(shell, &mut cmd, bin_name, &mut out);
            0
        }
        Commands::Build { data, save } => {
            let store = match loader::load_directory(Path::new(&data)) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Load failed: {e}");
                    return 1;
                }
            };
            if let Some(save_path) = save {
                if let Err(e) = store.save_json(Path::new(&save_path)) {
                    eprintln!("Failed to save store JSON {save_path}: {e}");
                    return 1;
                }
            }
            println!("Loaded {} people and {} movies.", store.person_count(), store.movie_count());
            0
        }
        Commands::Degrees { data, store, config, source, target, format } => {
            run_degrees(data, store, config.as_deref(), source, target, &format)
        }
        Commands::Costars { data, store, config, name, format } => {
            run_costars(data, store, config.as_deref(), &name, &format)
        }
    }
}

fn run_degrees(
    data: Option<String>,
    store_path: Option<String>,
    config: Option<&str>,
    source: Option<String>,
    target: Option<String>,
    format: &str,
) -> i32 {
    let store = match open_store(data, store_path, config) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };
    let resolver = NameResolver::new(&store);

    let Some(source_name) = name_or_prompt(source, "Name") else {
        eprintln!("Missing source name.");
        return 2;
    };
    let Some(source_id) = resolver.resolve_with(&source_name, choose_interactively) else {
        eprintln!("Person not found.");
        return 1;
    };
    let Some(target_name) = name_or_prompt(target, "Name") else {
        eprintln!("Missing target name.");
        return 2;
    };
    let Some(target_id) = resolver.resolve_with(&target_name, choose_interactively) else {
        eprintln!("Person not found.");
        return 1;
    };

    let query = ShortestPathQuery::new(source_id.clone(), target_id);
    let path = match query.run(&store) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Search failed: {e}");
            return 1;
        }
    };

    if effective_format(format, config) == "json" {
        #[derive(serde::Serialize)]
        struct Step {
            movie: String,
            title: String,
            person: String,
            name: String,
        }
        #[derive(serde::Serialize)]
        struct Output {
            connected: bool,
            degrees: usize,
            steps: Vec<Step>,
        }
        let out = match &path {
            None => Output { connected: false, degrees: 0, steps: Vec::new() },
            Some(steps) => Output {
                connected: true,
                degrees: steps.len(),
                steps: steps
                    .iter()
                    .map(|s| Step {
                        movie: s.movie.to_string(),
                        title: store.movie(&s.movie).map(|m| m.title.clone()).unwrap_or_default(),
                        person: s.person.to_string(),
                        name: store.person(&s.person).map(|p| p.name.clone()).unwrap_or_default(),
                    })
                    .collect(),
            },
        };
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("JSON encode error: {e}");
                return 1;
            }
        }
    } else {
        match &path {
            None => println!("Not connected."),
            Some(steps) => {
                println!("{} degrees of separation.", steps.len());
                let mut prev = source_id;
                for (i, step) in steps.iter().enumerate() {
                    println!(
                        "{}: {} and {} starred in {}",
                        i + 1,
                        display_name(&store, &prev),
                        display_name(&store, &step.person),
                        store
                            .movie(&step.movie)
                            .map_or_else(|_| step.movie.to_string(), |m| m.title.clone()),
                    );
                    prev = step.person.clone();
                }
            }
        }
    }
    0
}

fn run_costars(
    data: Option<String>,
    store_path: Option<String>,
    config: Option<&str>,
    name: &str,
    format: &str,
) -> i32 {
    let store = match open_store(data, store_path, config) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };
    let resolver = NameResolver::new(&store);
    let Some(person_id) = resolver.resolve_with(name, choose_interactively) else {
        eprintln!("Person not found.");
        return 1;
    };

    let graph = CollaborationGraph::new(&store);
    let neighbors = match graph.neighbors(&person_id) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Query failed: {e}");
            return 1;
        }
    };

    // The adapter includes the person in their own movies' casts; the
    // listing shows co-stars only.
    let rows: Vec<Vec<String>> = neighbors
        .iter()
        .filter(|(_, costar)| *costar != person_id)
        .map(|(movie, costar)| {
            vec![
                store.movie(movie).map_or_else(|_| movie.to_string(), |m| m.title.clone()),
                display_name(&store, costar),
            ]
        })
        .collect();

    if effective_format(format, config) == "json" {
        #[derive(serde::Serialize)]
        struct Row {
            title: String,
            name: String,
        }
        let out: Vec<Row> = rows
            .iter()
            .map(|r| Row { title: r[0].clone(), name: r[1].clone() })
            .collect();
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("JSON encode error: {e}");
                return 1;
            }
        }
    } else if rows.is_empty() {
        println!("<no co-stars>");
    } else {
        let table = crate::utils::table::render(&["Movie", "Co-star"], &rows);
        println!("{table}");
    }
    0
}

// Resolve the store source: explicit JSON snapshot first, then a dataset
// directory from the flag or the config file's [data] section.
fn open_store(
    data: Option<String>,
    store_path: Option<String>,
    config: Option<&str>,
) -> Result<EntityStore, String> {
    if let Some(p) = store_path {
        return EntityStore::load_json(Path::new(&p)).map_err(|e| format!("Load store failed: {e}"));
    }
    let dir = data.or_else(|| {
        config
            .and_then(|c| crate::utils::config::load_config_at(Path::new(c)))
            .and_then(|cfg| cfg.data)
            .and_then(|d| d.dir)
    });
    let Some(dir) = dir else {
        return Err("Missing dataset: provide --data <dir> or --store <json>.".to_string());
    };
    loader::load_directory(Path::new(&dir)).map_err(|e| format!("Load failed: {e}"))
}

fn effective_format(format: &str, config: Option<&str>) -> String {
    if let Some(cfg) = config.and_then(|c| crate::utils::config::load_config_at(Path::new(c))) {
        match cfg.query.and_then(|q| q.default_format).as_deref() {
            Some("json") => return "json".to_string(),
            Some("text") => return "text".to_string(),
            _ => {}
        }
    }
    format.to_string()
}

// Use the flag value when given, otherwise prompt on stdin.
fn name_or_prompt(given: Option<String>, label: &str) -> Option<String> {
    if given.is_some() {
        return given;
    }
    print!("{label}: ");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Interactive disambiguation: list the candidates and read the intended id.
// The resolver rejects ids outside the candidate set.
fn choose_interactively(candidates: &[&Person]) -> Option<PersonId> {
    println!("Which '{}'?", candidates[0].name);
    let rows: Vec<Vec<String>> = candidates
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.birth.map_or_else(String::new, |y| y.to_string()),
            ]
        })
        .collect();
    println!("{}", crate::utils::table::render(&["ID", "Name", "Birth"], &rows));
    print!("Intended person ID: ");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    let id = line.trim();
    if id.is_empty() {
        None
    } else {
        Some(PersonId(id.to_string()))
    }
}

fn display_name(store: &EntityStore, id: &PersonId) -> String {
    store.person(id).map_or_else(|_| id.to_string(), |p| p.name.clone())
}
