use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{info, warn};

use crate::word::{normalize, Alphabet};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read word list {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One input batch, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
    /// Non-blank lines that were skipped because they aren't valid words.
    pub rejected: usize,
}

/// Reads a word list with one word per line.
pub async fn load_words(
    path: impl AsRef<Path>,
    alphabet: Alphabet,
) -> Result<WordList, SourceError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let list = read_words(&text, alphabet);
    info!(
        "Loaded {} words from {} ({} rejected)",
        list.words.len(),
        path.display(),
        list.rejected
    );
    Ok(list)
}

/// Reads a word list from a stream such as stdin. Invalid UTF-8 is replaced
/// rather than failing the whole list; the affected lines end up rejected.
pub async fn read_list<R: AsyncRead + Unpin>(
    mut reader: R,
    alphabet: Alphabet,
) -> std::io::Result<WordList> {
    let mut buf = Vec::with_capacity(4096);
    reader.read_to_end(&mut buf).await?;
    Ok(read_words(&String::from_utf8_lossy(&buf), alphabet))
}

/// Parses a word list from text. Blank lines are dropped, everything that
/// doesn't fit `alphabet` is skipped with a warning.
pub fn read_words(text: &str, alphabet: Alphabet) -> WordList {
    let mut list = WordList::default();
    for (line_no, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        match normalize(token, alphabet) {
            Ok(word) => list.words.push(word),
            Err(e) => {
                warn!("Skipping line {}: {}", line_no + 1, e);
                list.rejected += 1;
            }
        }
    }
    list
}
