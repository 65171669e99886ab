//! Detection of note title references in free-form text.
//!
//! A raw scan reports keywords anywhere, including inside longer words. Links
//! are only created for hits that start and end on a word boundary, so the
//! title 'Go' is linked in "Learn Go today" but not in "Gopher".

use log::debug;

use crate::trie::{Hit, TrieTree};
use crate::Result;

/// Returns the hits in `text` that start and end on word boundaries.
///
/// # Errors
///
/// If the trie has not been [finalized][TrieTree::finalize].
///
/// # Examples
///
/// ```
/// use linktrie::{links, TrieTree};
///
/// let trie = TrieTree::from_keywords(false, [("go", 1)])?;
/// let hits = links::find_links(&trie, "Gophers learn Go")?;
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].range(), 14..16);
/// # Ok::<(), linktrie::Error>(())
/// ```
pub fn find_links<'t, P>(trie: &'t TrieTree<P>, text: &str) -> Result<Vec<Hit<'t, P>>> {
    if !trie.is_finalized() {
        return Err(crate::Error::not_finalized());
    }
    Ok(links(trie, text))
}

fn links<'t, P>(trie: &'t TrieTree<P>, text: &str) -> Vec<Hit<'t, P>> {
    let text = trie.normalize(text);
    let mut hits = trie.scan(&text);
    hits.retain(|hit| is_boundary(&text, hit.start()) && is_boundary(&text, hit.end()));
    hits
}

fn is_boundary(text: &[char], i: usize) -> bool {
    if i == 0 || i >= text.len() {
        return true;
    }
    !(is_word(text[i - 1]) && is_word(text[i]))
}

#[cfg(feature = "unicode")]
fn is_word(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

#[cfg(not(feature = "unicode"))]
fn is_word(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z' | '_')
}

/// A case insensitive index of note titles.
///
/// The index is rebuilt from the full set of titles whenever a note is added,
/// removed or renamed. It is always finalized, so scanning cannot fail.
#[derive(Debug, Clone)]
pub struct TitleIndex<P> {
    trie: TrieTree<P>,
}

impl<P> Default for TitleIndex<P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<P> TitleIndex<P> {
    /// Construct a new empty index.
    pub fn new() -> Self {
        let mut trie = TrieTree::new(false);
        trie.finalize();
        Self { trie }
    }

    /// Construct an index from the given titles and payloads.
    pub fn from_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = (T, P)>,
        T: AsRef<str>,
    {
        let mut index = Self::new();
        index.rebuild(titles);
        index
    }

    /// Replace the contents of the index with the given titles.
    ///
    /// Empty titles can never be referenced so they are skipped.
    pub fn rebuild<I, T>(&mut self, titles: I)
    where
        I: IntoIterator<Item = (T, P)>,
        T: AsRef<str>,
    {
        let mut trie = TrieTree::new(false);
        for (title, payload) in titles {
            let title = title.as_ref();
            if let Err(err) = trie.insert(title, payload) {
                debug!("skipping title {:?}: {}", title, err);
            }
        }
        trie.finalize();
        debug!("rebuilt title index with {} titles", trie.len());
        self.trie = trie;
    }

    /// Returns the title references in `text`.
    pub fn links(&self, text: &str) -> Vec<Hit<'_, P>> {
        links(&self.trie, text)
    }

    /// Returns the payload for the title equal to `title`, ignoring case.
    pub fn lookup(&self, title: &str) -> Option<&P> {
        self.trie.lookup(title)
    }

    /// The length in characters of the longest title.
    ///
    /// When text is edited, the region around the edit that has to be
    /// scanned again extends this far in both directions.
    pub fn max_len(&self) -> usize {
        self.trie.max_len()
    }

    /// The underlying trie.
    pub fn trie(&self) -> &TrieTree<P> {
        &self.trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_boundary_edges() {
        let text: Vec<_> = "ab cd".chars().collect();
        assert!(is_boundary(&text, 0));
        assert!(!is_boundary(&text, 1));
        assert!(is_boundary(&text, 2));
        assert!(is_boundary(&text, 3));
        assert!(is_boundary(&text, 5));
    }

    #[cfg(feature = "unicode")]
    #[test]
    fn is_boundary_unicode() {
        let text: Vec<_> = "привіт".chars().collect();
        assert!(!is_boundary(&text, 3));
    }

    #[test]
    fn links_unfinalized() {
        let mut trie = TrieTree::new(false);
        trie.insert("lorem", ()).unwrap();
        let err = find_links(&trie, "lorem").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::NotFinalized);
    }
}
