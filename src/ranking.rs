use serde::Serialize;
use tracing::debug;

use crate::prefix_tree::PrefixTree;
use crate::segment::is_compound;

/// The two longest compound words of a word list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub longest: Option<String>,
    pub second_longest: Option<String>,
}

/// Finds the longest and second-longest compound words in `words`.
pub fn rank_compound_words<S: AsRef<str>>(words: &[S]) -> Ranking {
    let mut found = top_compound_words(words, 2).into_iter();
    Ranking {
        longest: found.next(),
        second_longest: found.next(),
    }
}

/// Returns up to `n` compound words from `words`, longest first.
///
/// The dictionary is always the full list, so a word that has already been
/// tested still counts as a segment of the words tested after it. Words of
/// equal length come out in list order.
pub fn top_compound_words<S: AsRef<str>>(words: &[S], n: usize) -> Vec<String> {
    let dict: PrefixTree = words.iter().collect();

    let mut candidates: Vec<&str> = words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| !word.is_empty())
        .collect();
    // stable, so ties keep their list order
    candidates.sort_by_key(|word| std::cmp::Reverse(word.len()));

    let mut found = Vec::with_capacity(n);
    for word in candidates {
        if found.len() == n {
            break;
        }
        if is_compound(word, &dict) {
            debug!("{} is compound", word);
            found.push(word.to_string());
        } else {
            debug!("{} is not compound", word);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_picks_first_of_equal_length() {
        let words = ["cat", "dog", "catdog", "dogcatcat", "catdogdog"];
        assert_eq!(
            rank_compound_words(&words),
            Ranking {
                longest: Some("dogcatcat".into()),
                second_longest: Some("catdogdog".into()),
            }
        );
    }

    #[test]
    fn test_rank_skips_longer_non_compounds() {
        let words = ["rat", "cat", "cats", "s", "ratcat", "elephant", "ratcats"];
        assert_eq!(
            rank_compound_words(&words),
            Ranking {
                longest: Some("ratcats".into()),
                second_longest: Some("ratcat".into()),
            }
        );
    }

    #[test]
    fn test_tested_words_still_count_as_segments() {
        // "catdog" is both a candidate and a segment of the longest word
        let words = ["catdogcatdog", "catdog", "cat", "dog"];
        let ranking = rank_compound_words(&words);
        assert_eq!(ranking.longest.as_deref(), Some("catdogcatdog"));
        assert_eq!(ranking.second_longest.as_deref(), Some("catdog"));
    }

    #[test]
    fn test_rank_with_one_compound() {
        let words = ["cat", "dog", "catdog", "bird"];
        assert_eq!(
            rank_compound_words(&words),
            Ranking {
                longest: Some("catdog".into()),
                second_longest: None,
            }
        );
    }

    #[test]
    fn test_rank_without_compounds() {
        let words = ["cat", "dog", "bird"];
        assert_eq!(rank_compound_words(&words), Ranking::default());
    }

    #[test]
    fn test_rank_empty_list() {
        let words: [&str; 0] = [];
        assert_eq!(rank_compound_words(&words), Ranking::default());
    }

    #[test]
    fn test_rank_ignores_empty_entries() {
        let words = ["", "", ""];
        assert_eq!(rank_compound_words(&words), Ranking::default());

        let words = ["a", "", "aa"];
        assert_eq!(rank_compound_words(&words).longest.as_deref(), Some("aa"));
    }

    #[test]
    fn test_rank_is_repeatable() {
        let first: Vec<String> = ["cat", "dog", "catdog", "dogcatcat", "catdogdog"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let second = first.clone();
        assert_eq!(rank_compound_words(&first), rank_compound_words(&second));
    }

    #[test]
    fn test_top_n() {
        let words = ["a", "b", "ab", "ba", "aba", "abab", "c"];
        assert_eq!(top_compound_words(&words, 3), vec!["abab", "aba", "ab"]);
        assert_eq!(top_compound_words(&words, 10), vec!["abab", "aba", "ab", "ba"]);
        assert!(top_compound_words(&words, 0).is_empty());
    }
}
