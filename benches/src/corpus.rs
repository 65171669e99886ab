use std::collections::BTreeSet;

use rand::Rng;

/// A set of note titles and a body of text referencing some of them.
pub struct Corpus {
    pub titles: Vec<String>,
    pub text: String,
}

/// Generates `n` distinct random titles of `len` lowercase ASCII letters and
/// a text of `words` words where roughly one in eight words is a title.
pub fn random(n: usize, len: usize, words: usize) -> Corpus {
    let mut rng = rand::thread_rng();
    let mut unique = BTreeSet::new();
    while unique.len() < n {
        unique.insert((0..len).map(|_| rng.gen_range('a'..='z')).collect::<String>());
    }
    let titles: Vec<String> = unique.into_iter().collect();
    let mut text = String::new();
    for _ in 0..words {
        if rng.gen_ratio(1, 8) {
            text.push_str(&titles[rng.gen_range(0..n)]);
        } else {
            let word_len = rng.gen_range(1..12);
            text.extend((0..word_len).map(|_| rng.gen_range('a'..='z')));
        }
        text.push(' ');
    }
    Corpus { titles, text }
}
