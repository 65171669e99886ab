#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(&str, u8)>, &str)| {
    let (titles, text) = data;
    let index = linktrie::TitleIndex::from_titles(titles);
    for link in index.links(text) {
        assert!(link.end() - link.start() <= index.max_len());
        assert!(!link.text().is_empty());
    }
});
