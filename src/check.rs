use std::path::PathBuf;

use clap::Args;
use tracing::{debug, warn};

use crate::prefix_tree::PrefixTree;
use crate::segment::segments;
use crate::source::load_words;
use crate::word::{normalize, Alphabet};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Word list to use as the dictionary.
    #[arg(short, long)]
    dict: PathBuf,
    /// Which characters a word may contain.
    #[arg(long, value_enum, default_value_t = Alphabet::Strict)]
    alphabet: Alphabet,
    #[arg(name = "WORD", required = true)]
    words: Vec<String>,
}

pub async fn execute_check(args: CheckArgs) -> anyhow::Result<()> {
    let list = load_words(&args.dict, args.alphabet).await?;
    let dict: PrefixTree = list.words.iter().collect();
    if dict.is_empty() {
        warn!("Dictionary {} has no usable words", args.dict.display());
    }
    debug!("Dictionary has {} distinct words", dict.len());

    for word in &args.words {
        println!("{}", describe(word, &dict, args.alphabet));
    }
    Ok(())
}

fn describe(token: &str, dict: &PrefixTree, alphabet: Alphabet) -> String {
    let word = match normalize(token, alphabet) {
        Ok(word) => word,
        Err(e) => return format!("{}: {}", token, e),
    };

    match segments(&word, dict) {
        Some(parts) => format!("{}: {}", word, parts.join(" + ")),
        None if dict.contains(&word) => format!("{}: not compound (dictionary word)", word),
        None => format!("{}: not compound", word),
    }
}
