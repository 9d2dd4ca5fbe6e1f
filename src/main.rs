//! Word Network - CLI
//!
//! Builds the single-edit word graph for a word list and answers neighbor,
//! shortest-path, and neighborhood queries against it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use word_network::{
    commands::{extract_neighborhood, find_paths, graph_stats, list_neighbors, run_build},
    core::Word,
    corpus::load_from_file,
    output::{
        print_build_report, print_neighborhood_report, print_neighbors_report, print_paths_report,
        print_stats_report,
    },
};

#[derive(Parser)]
#[command(
    name = "word_network",
    about = "Single-edit word graph: neighbors and shortest edit paths",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "usa.txt")]
    wordlist: String,

    /// Directory for the built-graph cache
    #[arg(long, global = true, default_value = ".wordnet-cache")]
    cache_dir: String,

    /// Disable the on-disk cache and build in memory
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the edit graph and warm the cache
    Build,

    /// List the direct neighbors of a word
    Neighbors {
        /// The word to look up
        word: String,
    },

    /// Enumerate all shortest edit paths between two words
    Paths {
        /// Starting word
        from: String,

        /// Target word
        to: String,
    },

    /// Show corpus and graph statistics (default)
    Stats,

    /// Extract the renderable neighborhood around a word
    Neighborhood {
        /// Center word
        word: String,

        /// Maximum number of edit steps from the center
        #[arg(short, long, default_value = "2")]
        depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_from_file(&cli.wordlist)?;
    let cache_dir = (!cli.no_cache).then(|| Path::new(&cli.cache_dir));
    let (graph, report) = run_build(&corpus, cache_dir);

    // Default to Stats if no command given
    let command = cli.command.unwrap_or(Commands::Stats);

    match command {
        Commands::Build => print_build_report(&report),
        Commands::Neighbors { word } => {
            let word = normalize(&word)?;
            print_neighbors_report(&list_neighbors(&graph, word.text()));
        }
        Commands::Paths { from, to } => {
            let from = normalize(&from)?;
            let to = normalize(&to)?;
            print_paths_report(&find_paths(&graph, from.text(), to.text()));
        }
        Commands::Stats => print_stats_report(&graph_stats(&corpus, &graph)),
        Commands::Neighborhood { word, depth } => {
            let word = normalize(&word)?;
            print_neighborhood_report(&extract_neighborhood(&graph, word.text(), depth));
        }
    }

    Ok(())
}

/// Normalize a query word the same way corpus words are normalized
fn normalize(word: &str) -> Result<Word> {
    Word::new(word).map_err(|e| anyhow::anyhow!("invalid word {word:?}: {e}"))
}
