//! A multi-keyword matcher based on the [Aho-Corasick algorithm][wikipedia].
//!
//! Keywords are inserted into a trie, then failure transitions are computed so
//! that a text can be scanned in a single pass. Only the failure function is
//! built, not a full transition table, which keeps the automaton small at the
//! cost of following failure transitions during a scan.
//!
//! At each position of the text only the state reached by direct traversal is
//! checked for a keyword. Keywords that are a proper suffix of the path to
//! that state are *not* reported as well, which differs from textbook
//! Aho-Corasick. For example with the keywords 'she' and 'he' the text
//! 'ushers' only reports 'she'.
//!
//! [wikipedia]: https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm

mod build;
mod hit;
mod state;

pub use self::hit::Hit;

use self::state::{State, ROOT, S};
use crate::{Error, Result};

/// A keyword trie that reports every registered keyword found in a text.
///
/// The trie is built by [inserting][TrieTree::insert] keywords, each with a
/// payload identifying it, and then [finalizing][TrieTree::finalize] it. After
/// that it can be used to [scan][TrieTree::find_matches] any number of texts.
///
/// A finalized trie has no interior mutability, so it can be shared between
/// threads and scanned concurrently.
#[derive(Debug, Clone)]
pub struct TrieTree<P> {
    states: Vec<State<P>>,
    case_sensitive: bool,
    max_len: usize,
    len: usize,
    finalized: bool,
}

impl<P> Default for TrieTree<P> {
    /// Returns an empty case sensitive trie.
    #[inline]
    fn default() -> Self {
        Self::new(true)
    }
}

impl<P> TrieTree<P> {
    /// Construct a new empty trie.
    ///
    /// If `case_sensitive` is false then both keywords and scanned text are
    /// lowercased.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            states: vec![State::new(0)],
            case_sensitive,
            max_len: 0,
            len: 0,
            finalized: false,
        }
    }

    /// Construct a finalized trie from the given keywords and payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use linktrie::TrieTree;
    ///
    /// let trie = TrieTree::from_keywords(false, [("Rust", 1), ("Go", 2)])?;
    /// let hits = trie.find_matches("rust and go")?;
    /// assert_eq!(hits.len(), 2);
    /// # Ok::<(), linktrie::Error>(())
    /// ```
    pub fn from_keywords<I, K>(case_sensitive: bool, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, P)>,
        K: AsRef<str>,
    {
        let mut trie = Self::new(case_sensitive);
        for (keyword, payload) in keywords {
            trie.insert(keyword.as_ref(), payload)?;
        }
        trie.finalize();
        Ok(trie)
    }

    /// Scan the haystack and return a hit for every keyword found.
    ///
    /// Hits are returned in the order they were found, that is ordered by
    /// their end position. At most one hit is reported per position.
    ///
    /// # Errors
    ///
    /// If the trie has not been [finalized][TrieTree::finalize] since the last
    /// insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use linktrie::TrieTree;
    ///
    /// let mut trie = TrieTree::new(false);
    /// trie.insert("Note", "note-1")?;
    /// trie.finalize();
    ///
    /// let hits = trie.find_matches("this is a NOTE")?;
    /// assert_eq!(hits[0].range(), 10..14);
    /// assert_eq!(hits[0].text(), "note");
    /// assert_eq!(*hits[0].payload(), "note-1");
    /// # Ok::<(), linktrie::Error>(())
    /// ```
    pub fn find_matches(&self, haystack: &str) -> Result<Vec<Hit<'_, P>>> {
        if !self.finalized {
            return Err(Error::not_finalized());
        }
        let haystack = self.normalize(haystack);
        Ok(self.scan(&haystack))
    }

    /// Returns the payload for a keyword that exactly equals `key`.
    ///
    /// The same case normalization as for inserted keywords is applied. This
    /// does not use failure transitions, so the trie does not need to be
    /// finalized.
    pub fn lookup(&self, key: &str) -> Option<&P> {
        let mut id = ROOT;
        for c in self.normalize(key) {
            id = self.state(id).next_state(c)?;
        }
        self.state(id).payload.as_ref()
    }

    /// The length in characters of the longest keyword inserted.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// The number of distinct keywords in the trie.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trie contains no keywords.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the trie matches keywords case sensitively.
    #[inline]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether the failure transitions are up to date with the keywords.
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Applies case normalization and splits the text into characters.
    ///
    /// Lowercasing maps every character to exactly one character, so offsets
    /// into the normalized text are also offsets into the original text.
    pub(crate) fn normalize(&self, text: &str) -> Vec<char> {
        if self.case_sensitive {
            text.chars().collect()
        } else {
            text.chars().map(to_lower).collect()
        }
    }

    /// Scans already normalized text.
    pub(crate) fn scan(&self, haystack: &[char]) -> Vec<Hit<'_, P>> {
        let mut hits = Vec::new();
        let mut id = ROOT;
        let mut start = 0;

        for (i, &c) in haystack.iter().enumerate() {
            if id == ROOT {
                start = i;
            }

            while id != ROOT && self.state(id).next_state(c).is_none() {
                let depth = self.state(id).depth;
                id = self.state(id).fail;
                start += depth - self.state(id).depth;
            }

            id = self.state(id).next_state(c).unwrap_or(ROOT);

            if let Some(payload) = &self.state(id).payload {
                let end = i + 1;
                let text = haystack[start..end].iter().collect();
                hits.push(Hit::new(start, end, text, payload));
            }
        }

        hits
    }

    fn state(&self, id: S) -> &State<P> {
        &self.states[id]
    }
}

/// Returns the simple lowercase mapping of `c`.
///
/// Characters whose lowercase form is more than one character are kept as is.
fn to_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
