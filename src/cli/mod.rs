use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "costar-degrees",
    version,
    about = "Degrees of separation between film actors",
    long_about = "Load a people/movies/stars CSV dataset into a collaboration graph and search the shortest chain of shared movie credits between two actors. A loaded dataset can be saved as a JSON snapshot and reloaded with --store to skip CSV parsing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a CSV dataset, report its size, optionally save a JSON snapshot
    Build {
        /// Dataset directory containing people.csv, movies.csv and stars.csv
        #[arg(short, long)]
        data: String,
        /// Save the loaded store to a JSON snapshot file
        #[arg(long)]
        save: Option<String>,
    },
    /// Find the degrees of separation between two people
    Degrees {
        /// Dataset directory containing people.csv, movies.csv and stars.csv
        #[arg(short, long)]
        data: Option<String>,
        /// Path to a saved store JSON snapshot (skips CSV parsing)
        #[arg(long)]
        store: Option<String>,
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<String>,
        /// Source person name (prompted interactively when omitted)
        #[arg(long)]
        source: Option<String>,
        /// Target person name (prompted interactively when omitted)
        #[arg(long)]
        target: Option<String>,
        /// Output format: text or json
        #[arg(long, value_parser = ["text", "json"], default_value = "text")]
        format: String,
    },
    /// List the movies and co-stars one hop away from a person
    Costars {
        /// Dataset directory containing people.csv, movies.csv and stars.csv
        #[arg(short, long)]
        data: Option<String>,
        /// Path to a saved store JSON snapshot (skips CSV parsing)
        #[arg(long)]
        store: Option<String>,
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<String>,
        /// Person name to expand
        #[arg(long)]
        name: String,
        /// Output format: text or json
        #[arg(long, value_parser = ["text", "json"], default_value = "text")]
        format: String,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
