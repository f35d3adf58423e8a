//! NoteSet: the unordered collection of notes that identifies a chord.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An order-insensitive set of note names.
///
/// Notes are kept sorted and de-duplicated, so two sets built from the same
/// names in any order compare (and hash) equal. Enharmonic spellings are
/// distinct: `"E♭"` and `"D#"` are different notes here.
///
/// Deserialization goes through [`NoteSet::new`], so the same holds for sets
/// read back from JSON or any other serde format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct NoteSet(SmallVec<[String; 4]>);

impl NoteSet {
    pub fn new<I, S>(notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut notes: SmallVec<[String; 4]> = notes.into_iter().map(Into::into).collect();
        notes.sort_unstable();
        notes.dedup();
        Self(notes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, note: &str) -> bool {
        self.0.binary_search_by(|n| n.as_str().cmp(note)).is_ok()
    }

    /// Notes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of notes shared with `other`.
    ///
    /// Both sides are sorted, so this is a single merge pass.
    pub fn shared_count(&self, other: &NoteSet) -> usize {
        let (mut i, mut j, mut shared) = (0, 0, 0);
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].cmp(&other.0[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }
}

impl std::fmt::Display for NoteSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.join(", "))
    }
}

impl From<Vec<String>> for NoteSet {
    fn from(notes: Vec<String>) -> Self {
        Self::new(notes)
    }
}

impl<S: Into<String>> FromIterator<S> for NoteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
