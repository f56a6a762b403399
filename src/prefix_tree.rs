use std::collections::HashMap;

/// A node in the prefix tree
#[derive(Debug, Default)]
struct PrefixTreeNode {
    // Whether a dictionary word ends at this node
    is_end_of_word: bool,
    // The children of this node, keyed by the character
    children: HashMap<char, Box<PrefixTreeNode>>,
}

impl PrefixTreeNode {
    fn new() -> Self {
        PrefixTreeNode {
            is_end_of_word: false,
            children: HashMap::new(),
        }
    }
}

/// The dictionary used for compound word lookups.
///
/// Words are only ever added. Once the word list is loaded the tree is
/// read-only for the rest of the run.
#[derive(Debug, Default)]
pub struct PrefixTree {
    root: PrefixTreeNode,
    len: usize,
}

impl PrefixTree {
    /// Creates a new, empty prefix tree
    pub fn new() -> Self {
        PrefixTree {
            root: PrefixTreeNode::new(),
            len: 0,
        }
    }

    /// Inserts a word into the prefix tree. Inserting the same word twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut current_node = &mut self.root;
        for c in word.chars() {
            current_node = current_node
                .children
                .entry(c)
                .or_insert_with(|| Box::new(PrefixTreeNode::new()));
        }
        if !current_node.is_end_of_word {
            current_node.is_end_of_word = true;
            self.len += 1;
        }
    }

    /// Returns `true` if `word` was inserted. Prefixes of inserted words don't count.
    pub fn contains(&self, word: &str) -> bool {
        let mut current_node = &self.root;
        for c in word.chars() {
            if let Some(next_node) = current_node.children.get(&c) {
                current_node = next_node;
            } else {
                return false;
            }
        }
        current_node.is_end_of_word
    }

    /// Byte lengths of every dictionary word that is a non-empty prefix of `text`,
    /// shortest first.
    pub fn prefix_lengths(&self, text: &str) -> Vec<usize> {
        let mut current_node = &self.root;
        let mut lengths = Vec::new();
        for (idx, c) in text.char_indices() {
            match current_node.children.get(&c) {
                Some(next_node) => current_node = next_node,
                None => break,
            }
            if current_node.is_end_of_word {
                lengths.push(idx + c.len_utf8());
            }
        }
        lengths
    }

    /// Number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = PrefixTree::new();
        for word in iter {
            tree.insert(word.as_ref());
        }
        tree
    }
}
