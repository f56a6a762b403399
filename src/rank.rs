use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;
use tokio::time::Instant;
use tracing::{error, info};

use crate::ranking::rank_compound_words;
use crate::report::Report;
use crate::source::{load_words, read_list, WordList};
use crate::word::Alphabet;

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Print one JSON object per input instead of text.
    #[arg(long)]
    json: bool,
    /// Which characters a word may contain.
    #[arg(long, value_enum, default_value_t = Alphabet::Strict)]
    alphabet: Alphabet,
    /// Word lists, one word per line. Reads stdin when none are given.
    #[arg(name = "FILE")]
    files: Vec<PathBuf>,
}

pub async fn execute_rank(args: RankArgs) -> anyhow::Result<()> {
    if args.files.is_empty() {
        if std::io::stdin().is_terminal() {
            anyhow::bail!("no word lists given and stdin is a terminal");
        }
        let start = Instant::now();
        let list = read_list(tokio::io::stdin(), args.alphabet).await?;
        return print_report(process("stdin".into(), list, start), args.json);
    }

    let mut failed = 0;
    for path in &args.files {
        // each list is loaded, ranked and dropped before the next one starts
        let start = Instant::now();
        match load_words(path, args.alphabet).await {
            Ok(list) => {
                print_report(process(path.display().to_string(), list, start), args.json)?
            }
            Err(e) => {
                error!("{}", e);
                failed += 1;
            }
        }
    }

    if failed == args.files.len() {
        anyhow::bail!("none of the word lists could be read");
    }
    Ok(())
}

fn process(source: String, list: WordList, start: Instant) -> Report {
    let ranking = rank_compound_words(&list.words);
    let elapsed = start.elapsed();
    info!(
        "Ranked {} words from {} in {} ms",
        list.words.len(),
        source,
        elapsed.as_millis()
    );

    Report {
        source,
        ranking,
        words: list.words.len(),
        rejected: list.rejected,
        elapsed,
    }
}

fn print_report(report: Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
