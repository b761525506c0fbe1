//! Command-line demo for stratsort
//!
//! Runs each selected algorithm over a fresh copy of the input through one
//! reused [`SortContext`], printing the notification line and the result.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use stratsort::{Algorithm, SortContext};

const DEFAULT_WORDS: [&str; 3] = ["banana", "apple", "cherry"];

/// Sort a list of words with pluggable strategies
#[derive(Debug, Parser)]
#[command(name = "stratsort", version, about)]
struct Args {
    /// Words to sort (default: banana apple cherry)
    #[arg(value_name = "WORDS")]
    words: Vec<String>,

    /// Algorithm to run; repeat to run several in order (default: all)
    #[arg(short, long, value_name = "NAME")]
    algorithm: Vec<Algorithm>,

    /// Read words from a file, one per line; takes precedence over WORDS
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    fn load_words(&self) -> Result<Vec<String>> {
        if let Some(path) = &self.input {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read input file {}", path.display()))?;
            if !self.words.is_empty() {
                log::warn!("ignoring {} positional word(s) in favor of --input", self.words.len());
            }
            return Ok(text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(String::from)
                .collect());
        }

        if self.words.is_empty() {
            Ok(DEFAULT_WORDS.iter().map(|w| w.to_string()).collect())
        } else {
            Ok(self.words.clone())
        }
    }

    fn algorithms(&self) -> Vec<Algorithm> {
        if self.algorithm.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithm.clone()
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let words = args.load_words()?;
    let algorithms = args.algorithms();
    log::info!(
        "sorting {} word(s) with {} algorithm(s)",
        words.len(),
        algorithms.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut context = SortContext::new();

    for algorithm in algorithms {
        context.set_boxed(algorithm.strategy());

        let mut list = words.clone();
        context
            .execute_sort_to(&mut list, &mut out)
            .with_context(|| format!("{algorithm} failed"))?;
        writeln!(out, "[{}]", list.join(", "))?;
    }

    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_logging();
    log::debug!("Arguments: {:?}", args);

    run(&args)
}
