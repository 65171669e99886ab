use std::fmt;

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur when building or scanning with a [`TrieTree`].
///
/// [`TrieTree`]: crate::TrieTree
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An empty keyword was inserted.
    EmptyKeyword,
    /// A scan was attempted before the failure links were computed.
    NotFinalized,
}

impl Error {
    pub(crate) fn empty_keyword() -> Self {
        Self {
            kind: ErrorKind::EmptyKeyword,
            msg: "keyword must not be empty".into(),
        }
    }

    pub(crate) fn not_finalized() -> Self {
        Self {
            kind: ErrorKind::NotFinalized,
            msg: "trie must be finalized before it can be scanned".into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error")
                .field("kind", &self.kind)
                .field("msg", &self.msg)
                .finish()
        } else {
            write!(f, "{}", self.msg)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
