//! A multi-keyword matcher for finding references in free-form text.
//!
//! # Features
//!
//! - Scan a text once and find every registered keyword in it
//! - Attach any payload to a keyword to identify what was referenced
//! - Case sensitive or case insensitive matching
//! - Whole-word link detection for note titles
//! - Serialize scan results using [`serde`]
//!
//! # Getting started
//!
//! Your entry point is the [`TrieTree`] struct. Keywords are added with
//! [`.insert`][TrieTree::insert], each with a payload. Once all keywords have
//! been added the trie must be [finalized][TrieTree::finalize].
//!
//! ```
//! let mut trie = linktrie::TrieTree::new(false);
//! trie.insert("Shopping List", 1)?;
//! trie.insert("Ideas", 2)?;
//! trie.finalize();
//! # Ok::<(), linktrie::Error>(())
//! ```
//!
//! Then any number of texts can be scanned with
//! [`.find_matches`][TrieTree::find_matches].
//!
//! ```
//! # let mut trie = linktrie::TrieTree::new(false);
//! # trie.insert("Shopping List", 1)?;
//! # trie.insert("Ideas", 2)?;
//! # trie.finalize();
//! let hits = trie.find_matches("See my shopping list for ideas")?;
//! let found: Vec<_> = hits.iter().map(|h| (h.start(), h.end(), *h.payload())).collect();
//! assert_eq!(found, [(7, 20, 1), (25, 30, 2)]);
//! # Ok::<(), linktrie::Error>(())
//! ```
//!
//! # Examples
//!
//! ### Detect links to other notes
//!
//! A [`TitleIndex`] keeps a case insensitive trie of note titles and only
//! reports titles that appear as whole words.
//!
//! ```
//! use linktrie::TitleIndex;
//!
//! let index = TitleIndex::from_titles([("Go", "note-go"), ("Rust", "note-rust")]);
//!
//! let links = index.links("Gophers like Go, crabs like Rust.");
//! let found: Vec<_> = links.iter().map(|l| *l.payload()).collect();
//! assert_eq!(found, ["note-go", "note-rust"]);
//! ```
//!
//! ### Look up a keyword
//!
//! ```
//! let trie = linktrie::TrieTree::from_keywords(false, [("Ideas", 2)])?;
//! assert_eq!(trie.lookup("IDEAS"), Some(&2));
//! assert_eq!(trie.lookup("idea"), None);
//! # Ok::<(), linktrie::Error>(())
//! ```

mod error;
pub mod links;
mod trie;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::links::TitleIndex;
pub use crate::trie::{Hit, TrieTree};
