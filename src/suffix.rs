//! Reverse-suffix trie used to resolve file names to kinds.
//!
//! Suffixes are reduced to their letter/digit tokens (`-dash.json` becomes
//! `["dash", "json"]`) and stored last token first, so suffixes sharing a
//! tail share nodes: `-dash.json` and `-alert.json` both hang off `json`.
//! A node holds a value when some suffix ends exactly there.

use std::collections::HashMap;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Split a suffix or file name into its letter/digit runs.
///
/// Any run of characters that are neither letters nor digits separates
/// tokens; empty tokens are dropped. Letters and digits are the Unicode
/// general categories L* and N*, so combining marks split tokens.
pub fn tokenize_suffix(value: &str) -> Vec<&str> {
    value
        .split(|c: char| !is_token_char(c))
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_token_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Why `SuffixTree::insert` refused a value.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertError<'a, T> {
    /// The token list was empty and would address the root.
    NoTokens,
    /// A value already ends at the node; carries that value.
    Occupied(&'a T),
}

/// File name portion of `path`: everything after the last `/` or `\`.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[derive(Debug)]
struct SuffixNode<T> {
    value: Option<T>,
    children: HashMap<String, SuffixNode<T>>,
}

impl<T> Default for SuffixNode<T> {
    fn default() -> Self {
        Self {
            value: None,
            children: HashMap::new(),
        }
    }
}

/// Token trie walked from the end of a name toward its start.
#[derive(Debug)]
pub struct SuffixTree<T> {
    root: SuffixNode<T>,
    terminals: usize,
}

impl<T> Default for SuffixTree<T> {
    fn default() -> Self {
        Self {
            root: SuffixNode::default(),
            terminals: 0,
        }
    }
}

impl<T> SuffixTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of suffixes stored.
    pub fn len(&self) -> usize {
        self.terminals
    }

    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    /// Attach `value` at the node for `tokens` (given in suffix order).
    ///
    /// Fails with the value already ending at that exact node; the tree is
    /// unchanged in that case since the whole path exists. Paths passing
    /// through or stopping short of an existing value are fine.
    pub fn insert(&mut self, tokens: &[&str], value: T) -> Result<(), InsertError<'_, T>> {
        if tokens.is_empty() {
            return Err(InsertError::NoTokens);
        }
        let mut node = &mut self.root;
        for token in tokens.iter().rev() {
            node = node.children.entry((*token).to_string()).or_default();
        }
        match node.value {
            Some(ref existing) => Err(InsertError::Occupied(existing)),
            None => {
                node.value = Some(value);
                self.terminals += 1;
                Ok(())
            }
        }
    }

    /// Value registered for exactly `tokens`, if any.
    pub fn exact(&self, tokens: &[&str]) -> Option<&T> {
        if tokens.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for token in tokens.iter().rev() {
            node = node.children.get(*token)?;
        }
        node.value.as_ref()
    }

    /// Deepest value reached walking `tokens` from the last one backward.
    ///
    /// The walk stops at the first token with no child or when tokens run
    /// out; the most recent value seen on the way wins, so longer suffixes
    /// beat shorter ones and a longer suffix that only partially matches
    /// never hides a shorter full match.
    pub fn longest_match(&self, tokens: &[&str]) -> Option<&T> {
        let mut node = &self.root;
        let mut best = None;
        for token in tokens.iter().rev() {
            let Some(child) = node.children.get(*token) else {
                break;
            };
            node = child;
            if let Some(value) = node.value.as_ref() {
                best = Some(value);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_separator_runs() {
        assert_eq!(tokenize_suffix("-dash.json"), vec!["dash", "json"]);
        assert_eq!(tokenize_suffix("_dash_json"), vec!["dash", "json"]);
        assert_eq!(tokenize_suffix(".svg"), vec!["svg"]);
        assert_eq!(tokenize_suffix("README.md"), vec!["README", "md"]);
        assert_eq!(tokenize_suffix("__folder.json"), vec!["folder", "json"]);
        assert_eq!(tokenize_suffix("--..--"), Vec::<&str>::new());
        assert_eq!(tokenize_suffix(""), Vec::<&str>::new());
    }

    #[test]
    fn tokenize_is_unicode_aware() {
        assert_eq!(tokenize_suffix("-größe.json"), vec!["größe", "json"]);
        assert_eq!(tokenize_suffix("-データ.csv"), vec!["データ", "csv"]);
        assert_eq!(tokenize_suffix("-v2.json"), vec!["v2", "json"]);
    }

    #[test]
    fn combining_marks_split_tokens() {
        // U+093F and U+0940 are spacing marks (Mc), U+0902 a nonspacing mark (Mn).
        assert_eq!(tokenize_suffix("-हिंदी.json"), vec!["ह", "द", "json"]);
        assert_eq!(tokenize_suffix("-e\u{301}.json"), vec!["e", "json"]);
        assert_eq!(tokenize_suffix("-Ⅻ½.json"), vec!["Ⅻ½", "json"]);
    }

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(file_name("a/b/home-dash.json"), "home-dash.json");
        assert_eq!(file_name(r"a\b\logo.svg"), "logo.svg");
        assert_eq!(file_name("plain.csv"), "plain.csv");
        assert_eq!(file_name("dir/"), "");
    }

    #[test]
    fn shared_tails_share_nodes() {
        let mut tree = SuffixTree::new();
        tree.insert(&["dash", "json"], "dashboard").unwrap();
        tree.insert(&["alert", "json"], "alert").unwrap();
        assert_eq!(tree.root.children.len(), 1);
        assert_eq!(tree.root.children["json"].children.len(), 2);
        assert!(tree.root.children["json"].value.is_none());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn identical_token_path_conflicts() {
        let mut tree = SuffixTree::new();
        tree.insert(&["dash", "json"], 1).unwrap();
        assert_eq!(
            tree.insert(&["dash", "json"], 2),
            Err(InsertError::Occupied(&1))
        );
        assert_eq!(tree.exact(&["dash", "json"]), Some(&1));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn nested_terminals_coexist() {
        let mut tree = SuffixTree::new();
        tree.insert(&["json"], "json").unwrap();
        tree.insert(&["dash", "json"], "dashboard").unwrap();
        tree.insert(&["home", "dash", "json"], "home").unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.exact(&["json"]), Some(&"json"));
    }

    #[test]
    fn longest_match_prefers_deepest_terminal() {
        let mut tree = SuffixTree::new();
        tree.insert(&["json"], "json").unwrap();
        tree.insert(&["dash", "json"], "dashboard").unwrap();

        assert_eq!(tree.longest_match(&["my", "dash", "json"]), Some(&"dashboard"));
        assert_eq!(tree.longest_match(&["dash", "json"]), Some(&"dashboard"));
        assert_eq!(tree.longest_match(&["alert", "json"]), Some(&"json"));
        assert_eq!(tree.longest_match(&["json"]), Some(&"json"));
        assert_eq!(tree.longest_match(&["json", "yaml"]), None);
        assert_eq!(tree.longest_match(&[]), None);
    }

    #[test]
    fn partial_long_match_falls_back_to_shorter() {
        let mut tree = SuffixTree::new();
        tree.insert(&["csv"], "csv").unwrap();
        tree.insert(&["big", "data", "csv"], "big").unwrap();
        assert_eq!(tree.longest_match(&["data", "csv"]), Some(&"csv"));
        assert_eq!(tree.longest_match(&["x", "data", "csv"]), Some(&"csv"));
        assert_eq!(tree.longest_match(&["big", "data", "csv"]), Some(&"big"));
    }

    #[test]
    fn empty_tokens_are_refused() {
        let mut tree: SuffixTree<u8> = SuffixTree::new();
        assert_eq!(tree.insert(&[], 1), Err(InsertError::NoTokens));
        assert!(tree.is_empty());
    }
}
