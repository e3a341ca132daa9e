use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};
use wordsearch_gen::{
    parse_seed, Config, OutputFormat, Puzzle, Strategy, WordList, DEFAULT_DENSITY_FACTOR,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_REVERSE_PERCENT,
};

#[derive(Parser)]
#[command(version, about = "Generate a word-search puzzle from a numbered word list")]
struct Opts {
    /// Chance, in percent, that a word is hidden backwards
    #[arg(
        long,
        env = "WORDSEARCH_REVERSE_PERCENT",
        default_value_t = DEFAULT_REVERSE_PERCENT,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    reverse_percent: u8,

    /// Target share of cells covered by words, between 0 and 1.  Lower values
    /// give larger, sparser grids.
    #[arg(long, env = "WORDSEARCH_DENSITY_FACTOR", default_value_t = DEFAULT_DENSITY_FACTOR)]
    density_factor: f64,

    /// Random placement attempts per word before falling back to a full scan
    #[arg(long, env = "WORDSEARCH_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Placement search
    #[arg(long, env = "WORDSEARCH_STRATEGY", default_value = "enumerate")]
    strategy: Strategy,

    /// Seed to regenerate a puzzle
    #[arg(long)]
    seed: Option<String>,

    /// Output type
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Write the puzzle to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print where each word is hidden to stderr
    #[arg(long)]
    key: bool,

    /// Word list file (or `-` for stdin), one `<number>.<word>` per line
    words: PathBuf,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let word_list = WordList::from_path(&opts.words)
        .with_context(|| format!("reading {}", opts.words.display()))?;
    info!(words = word_list.len(), title = ?word_list.title(), "loaded word list");

    let config = Config {
        reverse_percent: opts.reverse_percent,
        density_factor: opts.density_factor,
        max_attempts: opts.max_attempts,
        strategy: opts.strategy,
    };
    let seed = opts.seed.as_deref().map(parse_seed).transpose()?;

    let puzzle = Puzzle::generate(&word_list, &config, seed)
        .context("Couldn't build a puzzle. Try a lower density factor.")?;
    let rendered = puzzle.render(opts.format);

    match &opts.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{rendered}"),
    }

    eprintln!("Seed: {}", hex::encode(puzzle.seed()));
    if opts.key {
        eprintln!("Key:");
        eprint!("{}", puzzle.answer_key());
    }

    Ok(())
}
