//! Chord and chord-type category.

use serde::{Deserialize, Serialize};
use super::{color_for, Color, NoteSet};

/// Chord-type category, the key into the color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChordType {
    Minor,
    Major,
    Diminished,
    Diminished7,
    Augmented,
    Minor7,
    /// Colored, but the catalog declares no chords of this type.
    Major7,
    /// Colored, but the catalog declares no chords of this type.
    Dominant7,
    MinorMajor7,
    HalfDiminished,
    /// Colored, but the catalog declares no chords of this type.
    Suspended,
}

impl ChordType {
    /// Every category in the color table, in table order.
    pub const ALL: [ChordType; 11] = [
        ChordType::Minor,
        ChordType::Major,
        ChordType::Diminished,
        ChordType::Diminished7,
        ChordType::Augmented,
        ChordType::Minor7,
        ChordType::Major7,
        ChordType::Dominant7,
        ChordType::MinorMajor7,
        ChordType::HalfDiminished,
        ChordType::Suspended,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ChordType::Minor => "Minor",
            ChordType::Major => "Major",
            ChordType::Diminished => "Diminished",
            ChordType::Diminished7 => "Diminished7",
            ChordType::Augmented => "Augmented",
            ChordType::Minor7 => "Minor7",
            ChordType::Major7 => "Major7",
            ChordType::Dominant7 => "Dominant7",
            ChordType::MinorMajor7 => "MinorMajor7",
            ChordType::HalfDiminished => "HalfDiminished",
            ChordType::Suspended => "Suspended",
        }
    }

    pub fn color(&self) -> Color {
        color_for(*self)
    }

    /// Whether the built-in catalog has a section for this type.
    pub fn in_catalog(&self) -> bool {
        crate::catalog::sections().iter().any(|s| s.chord_type == *self)
    }
}

impl std::fmt::Display for ChordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named chord: its notes, display name and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub notes: NoteSet,
    pub name: String,
    pub chord_type: ChordType,
}

impl Chord {
    pub fn new<I, S>(notes: I, name: impl Into<String>, chord_type: ChordType) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            notes: NoteSet::new(notes),
            name: name.into(),
            chord_type,
        }
    }

    pub fn color(&self) -> Color {
        self.chord_type.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_new() {
        let chord = Chord::new(["E", "C", "A"], "Am", ChordType::Minor);
        assert_eq!(chord.notes, NoteSet::new(["A", "C", "E"]));
        assert_eq!(chord.name, "Am");
        assert_eq!(chord.color(), Color::RED);
    }

    #[test]
    fn test_uncatalogued_types() {
        let missing: Vec<ChordType> = ChordType::ALL
            .into_iter()
            .filter(|t| !t.in_catalog())
            .collect();
        assert_eq!(
            missing,
            vec![ChordType::Major7, ChordType::Dominant7, ChordType::Suspended]
        );
    }
}
