//! Scans a note body for references to other notes and prints each link.

use linktrie::TitleIndex;

fn main() {
    let index = TitleIndex::from_titles([
        ("Shopping List", 1),
        ("Ideas", 2),
        ("Go", 3),
        ("Bazaar", 4),
    ]);

    let body = "Gophers at the bazaar: see my shopping list.\nMore ideas in Ideas, written in Go.";
    let chars: Vec<char> = body.chars().collect();

    for link in index.links(body) {
        let original: String = chars[link.range()].iter().collect();
        println!(
            "note {} referenced as {:?} at {}..{}",
            link.payload(),
            original,
            link.start(),
            link.end()
        );
    }
}
