//! Node in the chord graph.

use serde::{Deserialize, Serialize};
use super::{Chord, ChordType, Color, NoteSet};

/// Dense node index, assigned in first-insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A distinct note set together with the label and color it is drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordNode {
    pub id: NodeId,
    pub notes: NoteSet,
    /// Display name of the last catalog entry with these notes.
    pub name: String,
    pub chord_type: ChordType,
    pub color: Color,
}

impl ChordNode {
    pub fn new(id: NodeId, chord: Chord) -> Self {
        let color = chord.color();
        Self {
            id,
            notes: chord.notes,
            name: chord.name,
            chord_type: chord.chord_type,
            color,
        }
    }

    /// Take over the label and category of a later chord with the same notes.
    pub fn relabel(&mut self, chord: Chord) {
        debug_assert_eq!(self.notes, chord.notes);
        self.color = chord.color();
        self.name = chord.name;
        self.chord_type = chord.chord_type;
    }

    pub fn shared_notes(&self, other: &ChordNode) -> usize {
        self.notes.shared_count(&other.notes)
    }
}
