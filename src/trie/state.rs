/// A unique identifier for a state.
pub type S = usize;

/// The identifier for the root state of a trie.
pub const ROOT: S = 0;

/// A state in a keyword trie.
#[derive(Debug, Clone)]
pub struct State<P> {
    /// The transitions to the child states, sorted by character.
    pub trans: Vec<(char, S)>,

    /// The failure transition.
    ///
    /// This is a back reference into the same arena, never an owning edge.
    pub fail: S,

    /// The payload of the keyword that terminates at this state, if any.
    pub payload: Option<P>,

    /// The number of characters between the root and this state.
    pub depth: usize,
}

impl<P> State<P> {
    pub fn new(depth: usize) -> Self {
        Self {
            trans: Vec::new(),
            fail: ROOT,
            payload: None,
            depth,
        }
    }

    /// Returns the next state for the given input character.
    pub fn next_state(&self, c: char) -> Option<S> {
        self.trans
            .binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|i| self.trans[i].1)
    }

    pub fn set_transition(&mut self, c: char, to: S) {
        match self.trans.binary_search_by_key(&c, |&(k, _)| k) {
            Ok(i) => self.trans[i].1 = to,
            Err(i) => self.trans.insert(i, (c, to)),
        }
    }

    /// Whether or not a keyword terminates at this state.
    pub fn is_match(&self) -> bool {
        self.payload.is_some()
    }
}
