use std::ops::Range;

/// A keyword occurrence found by a scan.
///
/// Offsets are `char` offsets into the scanned text after case
/// normalization, `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<'t, P> {
    start: usize,
    end: usize,
    text: String,
    payload: &'t P,
}

impl<'t, P> Hit<'t, P> {
    pub(crate) fn new(start: usize, end: usize, text: String, payload: &'t P) -> Self {
        Self {
            start,
            end,
            text,
            payload,
        }
    }

    /// The starting position of the hit.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The ending position of the hit.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The `start..end` range of the hit.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text.
    ///
    /// For a case insensitive trie this is the lowercased form.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The payload of the keyword that matched.
    pub fn payload(&self) -> &'t P {
        self.payload
    }
}

#[cfg(feature = "serde")]
impl<P> serde::Serialize for Hit<'_, P>
where
    P: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Hit", 4)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.serialize_field("text", &self.text)?;
        s.serialize_field("payload", self.payload)?;
        s.end()
    }
}
