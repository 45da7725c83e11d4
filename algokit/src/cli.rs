use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "algokit", about = "Classic search/sort algorithm demos", version)]
pub struct Cli {
    /// Enable per-probe debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a sort algorithm over the given values
    Sort {
        #[arg(long, default_value = "quick")]
        algorithm: String,
        /// Route the data through the doubly-linked list adapter
        #[arg(long)]
        linked: bool,
        /// Print every intermediate state
        #[arg(long)]
        trace: bool,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
        #[arg(value_name = "VALUE", required = true)]
        values: Vec<i64>,
    },
    /// Run a search algorithm over the given values
    Search {
        #[arg(long, default_value = "binary")]
        algorithm: String,
        #[arg(long)]
        target: i64,
        #[arg(value_name = "VALUE", required = true)]
        values: Vec<i64>,
    },
    /// List registered algorithms
    List,
    /// Time every sort algorithm on random data
    Compare {
        #[arg(long, default_value_t = 2_000)]
        size: usize,
        #[arg(long, default_value_t = 5)]
        rounds: usize,
    },
}
