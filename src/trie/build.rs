//! Construction of the keyword trie and its failure transitions.
//!
//! Consider inserting the keywords 'he', 'she' and 'hers'. Each keyword gets
//! a path of states from the root, sharing any common prefix. States are shown
//! as `S?` and have an asterisk (`*`) if a keyword terminates there.
//!
//! ```text
//!      h - S1 - e - S2* - r - S3 - s - S4*
//!     /
//! S0 - s - S5 - h - S6 - e - S7*
//! ```
//!
//! After the trie is complete, every state is given a failure transition: the
//! state for the longest proper suffix of its path that is also a path from
//! the root. Above, S6 ('sh') fails to S1 ('h'), S7 ('she') fails to S2
//! ('he') and S4 ('hers') fails to S5 ('s'). All other states fail back to
//! the root.
//!
//! The failure transitions are computed with a breadth-first search starting
//! with the children of the root, which always fail to the root. For every
//! transition out of a dequeued state we follow the failure transitions of
//! that state backward until we find a state with a forward transition on the
//! same character. That forward transition is the failure transition of the
//! child.
//!
//! No transition table is materialized for every (state, character) pair, so
//! a scan still has to walk failure transitions on a mismatch.

use std::collections::VecDeque;

use log::{debug, trace};

use super::state::{State, ROOT, S};
use super::TrieTree;
use crate::{Error, Result};

impl<P> TrieTree<P> {
    /// Add a keyword to the trie with the given payload.
    ///
    /// If the trie is case insensitive then the keyword is lowercased first.
    /// Inserting the same keyword again replaces the previous payload.
    ///
    /// Inserting into a finalized trie is allowed, but the trie must be
    /// [finalized][TrieTree::finalize] again before the next scan.
    ///
    /// # Errors
    ///
    /// If the keyword is empty.
    pub fn insert(&mut self, keyword: &str, payload: P) -> Result<()> {
        if keyword.is_empty() {
            return Err(Error::empty_keyword());
        }
        let keyword = self.normalize(keyword);

        let mut id = ROOT;
        for (depth, &c) in keyword.iter().enumerate() {
            id = match self.state(id).next_state(c) {
                Some(next) => next,
                None => {
                    let next = self.push_state(depth + 1);
                    self.state_mut(id).set_transition(c, next);
                    next
                }
            };
        }

        if !self.state(id).is_match() {
            self.len += 1;
        }
        self.state_mut(id).payload = Some(payload);
        self.max_len = self.max_len.max(keyword.len());
        self.finalized = false;

        trace!("inserted keyword of {} chars at state {}", keyword.len(), id);
        Ok(())
    }

    /// Compute the failure transitions for every state in the trie.
    ///
    /// This must be called after all keywords have been inserted and before
    /// the first scan. Calling it again recomputes every failure transition
    /// from scratch, so it is safe to call more than once.
    pub fn finalize(&mut self) {
        let mut queue = VecDeque::new();

        for i in 0..self.state(ROOT).trans.len() {
            let (_, next) = self.state(ROOT).trans[i];
            self.state_mut(next).fail = ROOT;
            queue.push_back(next);
        }

        while let Some(curr) = queue.pop_front() {
            for i in 0..self.state(curr).trans.len() {
                let (c, next) = self.state(curr).trans[i];

                let fail = {
                    let mut id = self.state(curr).fail;
                    loop {
                        if let Some(n) = self.state(id).next_state(c) {
                            break n;
                        }
                        if id == ROOT {
                            break ROOT;
                        }
                        id = self.state(id).fail;
                    }
                };
                debug_assert!(
                    self.state(fail).depth < self.state(next).depth,
                    "a failure transition must always point to a shallower state"
                );

                self.state_mut(next).fail = fail;
                queue.push_back(next);
            }
        }

        self.finalized = true;
        debug!(
            "computed failure transitions for {} states ({} keywords, max length {})",
            self.states.len(),
            self.len,
            self.max_len
        );
    }

    fn push_state(&mut self, depth: usize) -> S {
        let id = self.states.len();
        self.states.push(State::new(depth));
        id
    }

    fn state_mut(&mut self, id: S) -> &mut State<P> {
        &mut self.states[id]
    }
}
