#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    case_sensitive: bool,
    keywords: Vec<&'a str>,
    haystack: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let mut trie = linktrie::TrieTree::new(input.case_sensitive);
    for (i, keyword) in input.keywords.iter().enumerate() {
        let _ = trie.insert(keyword, i);
    }
    trie.finalize();

    let haystack: Vec<char> = input.haystack.chars().collect();
    let hits = trie.find_matches(input.haystack).unwrap();
    for hit in &hits {
        assert!(hit.start() < hit.end());
        assert!(hit.end() <= haystack.len());
        assert_eq!(hit.text().chars().count(), hit.end() - hit.start());
        if input.case_sensitive {
            let text: String = haystack[hit.range()].iter().collect();
            assert_eq!(hit.text(), text);
            assert_eq!(trie.lookup(hit.text()), Some(hit.payload()));
        }
    }
    assert_eq!(hits, trie.find_matches(input.haystack).unwrap());
});
