use clap::ValueEnum;
use thiserror::Error;

/// Which tokens are accepted into the dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Alphabet {
    /// Only `a` to `z`. Anything else is rejected.
    #[default]
    Strict,
    /// ASCII uppercase letters are lowercased first.
    Fold,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WordError {
    #[error("empty word")]
    Empty,

    #[error("word {word:?} has character {ch:?} at position {position}, only a-z is allowed")]
    InvalidChar {
        word: String,
        ch: char,
        position: usize,
    },
}

/// Checks `token` against the alphabet and returns the word to insert.
pub fn normalize(token: &str, alphabet: Alphabet) -> Result<String, WordError> {
    if token.is_empty() {
        return Err(WordError::Empty);
    }

    let word = match alphabet {
        Alphabet::Strict => token.to_string(),
        Alphabet::Fold => token.to_ascii_lowercase(),
    };

    if let Some((position, ch)) = word.chars().enumerate().find(|(_, c)| !c.is_ascii_lowercase()) {
        return Err(WordError::InvalidChar {
            word: token.to_string(),
            ch,
            position,
        });
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_accepts_lowercase() {
        assert_eq!(normalize("catdog", Alphabet::Strict), Ok("catdog".to_string()));
    }

    #[test]
    fn test_strict_rejects_uppercase() {
        assert_eq!(
            normalize("Cat", Alphabet::Strict),
            Err(WordError::InvalidChar {
                word: "Cat".to_string(),
                ch: 'C',
                position: 0,
            })
        );
    }

    #[test]
    fn test_fold_lowercases() {
        assert_eq!(normalize("CatDog", Alphabet::Fold), Ok("catdog".to_string()));
    }

    #[test]
    fn test_fold_still_rejects_punctuation() {
        let err = normalize("don't", Alphabet::Fold).unwrap_err();
        assert_eq!(
            err,
            WordError::InvalidChar {
                word: "don't".to_string(),
                ch: '\'',
                position: 3,
            }
        );
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        assert!(matches!(
            normalize("café", Alphabet::Fold),
            Err(WordError::InvalidChar { ch: 'é', position: 3, .. })
        ));
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize("", Alphabet::Strict), Err(WordError::Empty));
    }
}
