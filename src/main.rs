//! prefix-bench - compare a prefix tree against a linear-scan hash set
//!
//! With no arguments, benchmarks the built-in vocabulary and prints two lines
//! per component. Logs go to stderr, reports to stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use prefix_search::{corpus, harness, report, Corpus, Harness, OutputFormat, SweepConfig};
use tracing::{info, level_filters::LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "prefix-bench")]
#[command(about = "Time prefix-existence queries on a prefix tree and a linear-scan hash set")]
#[command(version)]
struct Cli {
    /// Word list to insert (one per line), replacing the built-in vocabulary
    #[arg(long, conflicts_with = "synthetic")]
    words: Option<PathBuf>,

    /// Prefix list to search (one per line), replacing the built-in prefixes
    #[arg(long, conflicts_with = "synthetic")]
    prefixes: Option<PathBuf>,

    /// Use a random vocabulary of this many words
    #[arg(long, value_name = "N")]
    synthetic: Option<usize>,

    /// Measure both components at each vocabulary size (worst-case prefixes)
    #[arg(long, value_name = "N,N,...", value_delimiter = ',', num_args = 1..,
          conflicts_with_all = ["words", "prefixes", "synthetic"])]
    sweep: Option<Vec<usize>>,

    /// Seed for synthetic vocabularies
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.sweep {
        Some(sizes) => {
            let config = SweepConfig {
                sizes,
                seed: cli.seed,
                ..SweepConfig::default()
            };
            info!(sizes = ?config.sizes, "running sweep");
            report::render_sweep(&harness::sweep(&config), cli.format)?
        }
        None => {
            let corpus = load_corpus(&cli)?;
            info!(
                words = corpus.words.len(),
                prefixes = corpus.prefixes.len(),
                "running benchmark"
            );
            let measurements = Harness::new(&corpus.words, &corpus.prefixes).compare();
            report::render_run(&measurements, cli.format)?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_corpus(cli: &Cli) -> anyhow::Result<Corpus> {
    if let Some(size) = cli.synthetic {
        return Ok(Corpus::synthetic(size, cli.seed));
    }

    let mut corpus = Corpus::builtin();
    if let Some(path) = &cli.words {
        corpus.words = corpus::load_word_list(path).context("loading vocabulary")?;
    }
    if let Some(path) = &cli.prefixes {
        corpus.prefixes = corpus::load_word_list(path).context("loading prefixes")?;
    }
    Ok(corpus)
}
