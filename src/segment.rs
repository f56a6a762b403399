//! Splitting a word into smaller dictionary words.
//!
//! The search is a depth-first backtracking walk that tries the shortest
//! dictionary prefix first. Suffix offsets that are known to have no
//! decomposition are remembered, so each offset is expanded at most once.
//!
//! Recursion depth grows with the number of segments, which is bounded by the
//! word length. Natural-language words stay far away from the stack limit, but
//! a pathological input (say a million `a`s over the dictionary `{a}`) would not.

use crate::prefix_tree::PrefixTree;

/// Returns `true` if `word` splits into two or more words from `dict`.
///
/// The word being in `dict` itself doesn't matter either way: a single
/// segment covering the whole word never counts.
pub fn is_compound(word: &str, dict: &PrefixTree) -> bool {
    segments(word, dict).is_some()
}

/// The first decomposition of `word` into two or more dictionary words, trying
/// shorter leading segments before longer ones.
pub fn segments<'w>(word: &'w str, dict: &PrefixTree) -> Option<Vec<&'w str>> {
    if word.is_empty() {
        return None;
    }

    let mut search = Search {
        word,
        dict,
        dead_ends: vec![false; word.len()],
        path: Vec::new(),
    };

    if search.from(0) {
        Some(search.path)
    } else {
        None
    }
}

struct Search<'w, 'd> {
    word: &'w str,
    dict: &'d PrefixTree,
    // dead_ends[i] is set once word[i..] is known to have no decomposition
    dead_ends: Vec<bool>,
    path: Vec<&'w str>,
}

impl<'w> Search<'w, '_> {
    fn from(&mut self, start: usize) -> bool {
        if start == self.word.len() {
            // one segment spanning the whole word is not a compound
            return self.path.len() != 1;
        }
        if self.dead_ends[start] {
            return false;
        }

        let word = self.word;
        for len in self.dict.prefix_lengths(&word[start..]) {
            let end = start + len;
            self.path.push(&word[start..end]);
            if self.from(end) {
                return true;
            }
            self.path.pop();
        }

        // Offset 0 is never revisited, and every later offset already has
        // one segment behind it, so the outcome only depends on the offset.
        self.dead_ends[start] = true;
        false
    }
}
