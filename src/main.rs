//! Wordle Helper - CLI
//!
//! Interactive helper: record each guess and its feedback, then ask which
//! dictionary words are still possible.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordle_helper::{
    output::Renderer,
    session::{Repl, Session},
    wordlists::{Dictionaries, Language},
};

#[derive(Debug, Parser)]
#[command(
    name = "wordle_helper",
    about = "Lists the words still possible given the feedback from your Wordle guesses",
    version,
    author
)]
struct Cli {
    /// Starting language: en (default) or es
    #[arg(short, long, default_value = "en", value_parser = parse_language)]
    lang: Language,

    /// English dictionary file, one word per line (default: built-in list)
    #[arg(long, value_name = "PATH")]
    en_dict: Option<PathBuf>,

    /// Spanish dictionary file, one word per line (default: built-in list)
    #[arg(long, value_name = "PATH")]
    es_dict: Option<PathBuf>,

    /// Maximum number of candidates to print per suggestion
    #[arg(long)]
    limit: Option<usize>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Seed for the greeting/farewell text
    #[arg(long)]
    seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| {
        format!(
            "unknown language '{code}' (use {} or {})",
            Language::En.code(),
            Language::Es.code()
        )
    })
}

/// Make sure a configured dictionary can be read before the session starts
fn check_dictionary(path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        std::fs::File::open(path)
            .with_context(|| format!("cannot open dictionary {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    debug!("command line options: {cli:?}");

    check_dictionary(cli.en_dict.as_deref())?;
    check_dictionary(cli.es_dict.as_deref())?;
    let dictionaries = Dictionaries::new(cli.en_dict, cli.es_dict);

    if cli.no_color {
        colored::control::set_override(false);
    }
    let renderer = Renderer {
        color: !cli.no_color,
        limit: cli.limit,
    };

    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    info!("starting session in {}", cli.lang);
    let repl = Repl::new(
        io::stdin().lock(),
        io::stdout().lock(),
        rng,
        Session::new(cli.lang),
        dictionaries,
        renderer,
    );
    let session = repl.run().context("terminal I/O failed")?;

    debug!(
        "session ended with {} recorded guesses",
        session.guesses().len()
    );
    Ok(())
}
