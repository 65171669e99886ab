use crate::corpus;
use crate::{AhoCorasick, LinkTrie, Matcher};

// With keywords of equal length none is a proper suffix of another, so every
// occurrence is reached directly and both matchers must agree. The corpus is
// ASCII so char offsets equal byte offsets.
#[test]
fn equal_length_keywords_agree() {
    for _ in 0..10 {
        let corpus = corpus::random(50, 3, 500);
        let expected = AhoCorasick::build(&corpus.titles).find_all(&corpus.text);
        let actual = LinkTrie::build(&corpus.titles).find_all(&corpus.text);
        assert_eq!(actual, expected);
    }
}

#[test]
fn titles_are_found() {
    let corpus = corpus::random(10, 8, 200);
    let trie = LinkTrie::build(&corpus.titles);
    for title in &corpus.titles {
        assert_eq!(trie.find_all(title), [(0, title.len())]);
    }
}
