pub mod corpus;
#[cfg(test)]
mod tests;

/// Abstraction for a multi-keyword matcher.
pub trait Matcher: Sized {
    fn name() -> &'static str;
    fn build(keywords: &[String]) -> Self;
    /// Returns the `(start, end)` offsets of every match in the haystack.
    fn find_all(&self, haystack: &str) -> Vec<(usize, usize)>;
}

////////////////////////////////////////////////////////////////////////////////
/// linktrie
////////////////////////////////////////////////////////////////////////////////

pub type LinkTrie = linktrie::TrieTree<usize>;

impl Matcher for LinkTrie {
    #[inline]
    fn name() -> &'static str {
        "linktrie"
    }

    #[inline]
    fn build(keywords: &[String]) -> Self {
        let keywords = keywords.iter().enumerate().map(|(i, k)| (k, i));
        linktrie::TrieTree::from_keywords(true, keywords).unwrap()
    }

    #[inline]
    fn find_all(&self, haystack: &str) -> Vec<(usize, usize)> {
        self.find_matches(haystack)
            .unwrap()
            .iter()
            .map(|h| (h.start(), h.end()))
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
/// aho-corasick
////////////////////////////////////////////////////////////////////////////////

pub type AhoCorasick = aho_corasick::AhoCorasick;

impl Matcher for AhoCorasick {
    #[inline]
    fn name() -> &'static str {
        "aho-corasick"
    }

    #[inline]
    fn build(keywords: &[String]) -> Self {
        aho_corasick::AhoCorasick::new(keywords).unwrap()
    }

    #[inline]
    fn find_all(&self, haystack: &str) -> Vec<(usize, usize)> {
        self.find_overlapping_iter(haystack)
            .map(|m| (m.start(), m.end()))
            .collect()
    }
}
