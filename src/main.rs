use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use wordtree::words::{Config, WordIndex};

/// Counts the words of a text and reports the most frequent and the longest ones.
///
/// Set `RUST_LOG=info` (or `debug`, `trace`) to see what the trees are doing.
#[derive(Parser)]
#[clap(version)]
struct Args {
    /// The text to read. Standard input is read when this is missing.
    input: Option<PathBuf>,

    /// Words must occur more than this many times to be ranked by frequency.
    #[clap(short, long, default_value_t = 2)]
    frequency_threshold: usize,

    /// Words must be longer than this to be ranked by length.
    #[clap(short, long, default_value_t = 0)]
    length_threshold: usize,

    /// How many of the most frequent and longest words to list.
    #[clap(short, long, default_value_t = 10)]
    top: usize,

    /// Keep stop words ("the", "and", ...) instead of removing them.
    #[clap(long, action)]
    no_stop_words: bool,
}

impl Args {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            frequency_threshold: self.frequency_threshold,
            length_threshold: self.length_threshold,
            top: self.top,
            stop_words: if self.no_stop_words {
                Vec::new()
            } else {
                defaults.stop_words
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();
    let config = args.config();

    let index = match &args.input {
        Some(path) => {
            info!("reading {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            WordIndex::build(config, BufReader::new(file))
        }
        None => {
            info!("reading standard input");
            WordIndex::build(config, io::stdin().lock())
        }
    }
    .context("failed to read the input text")?;

    print!("{}", index.report());
    Ok(())
}
