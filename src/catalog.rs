//! Built-in chord catalog.
//!
//! Eight sections of twelve chords each, one per root. Note names are
//! spelled as written (sharps, flats with `♭`, double sharps with `##`);
//! no enharmonic normalisation happens anywhere in the crate.
//!
//! Some entries share a note set with an entry in another (or the same)
//! section (`Bm`/`Bdim`, `A#m7`/`A#mMaj7`/`A#m7♭5`, and so on). The graph
//! builder collapses those into one node and keeps the last entry's name.

use crate::model::{Chord, ChordType};

/// One catalog entry: notes and display name.
pub struct CatalogEntry {
    pub notes: &'static [&'static str],
    pub name: &'static str,
}

impl CatalogEntry {
    pub fn to_chord(&self, chord_type: ChordType) -> Chord {
        Chord::new(self.notes.iter().copied(), self.name, chord_type)
    }
}

/// All entries of a single chord type, in declaration order.
pub struct CatalogSection {
    pub chord_type: ChordType,
    pub entries: &'static [CatalogEntry],
}

const fn e(notes: &'static [&'static str], name: &'static str) -> CatalogEntry {
    CatalogEntry { notes, name }
}

// ============================================================================
// Sections
// ============================================================================

const MINOR: &[CatalogEntry] = &[
    e(&["A", "C", "E"], "Am"),
    e(&["A#", "C#", "F"], "A#m"),
    e(&["B", "D", "F"], "Bm"),
    e(&["C", "E♭", "G"], "Cm"),
    e(&["C#", "E", "G#"], "C#m"),
    e(&["D", "F", "A"], "Dm"),
    e(&["D#", "F#", "A#"], "D#m"),
    e(&["E", "G", "B"], "Em"),
    e(&["F", "G#", "C"], "Fm"),
    e(&["F#", "A", "C#"], "F#m"),
    e(&["G", "A#", "D"], "Gm"),
    e(&["G#", "B", "D#"], "G#m"),
];

const MAJOR: &[CatalogEntry] = &[
    e(&["A", "C#", "E"], "A"),
    e(&["A#", "D", "F"], "A#"),
    e(&["B", "D#", "F#"], "B"),
    e(&["C", "E", "G"], "C"),
    e(&["C#", "F", "G#"], "C#"),
    e(&["D", "F#", "A"], "D"),
    e(&["D#", "G", "A#"], "D#"),
    e(&["E", "G#", "B"], "E"),
    e(&["F", "A", "C"], "F"),
    e(&["F#", "A#", "C#"], "F#"),
    e(&["G", "B", "D"], "G"),
    e(&["G#", "C", "D#"], "G#"),
];

const DIMINISHED: &[CatalogEntry] = &[
    e(&["A", "C", "E♭"], "Adim"),
    e(&["A#", "C#", "E"], "A#dim"),
    e(&["B", "D", "F"], "Bdim"),
    e(&["C", "E♭", "G♭"], "Cdim"),
    e(&["C#", "E", "G"], "C#dim"),
    e(&["D", "F", "A♭"], "Ddim"),
    e(&["D#", "F#", "A"], "D#dim"),
    e(&["E", "G", "B♭"], "Edim"),
    e(&["F", "G#", "B"], "Fdim"),
    e(&["F#", "A", "C"], "F#dim"),
    e(&["G", "A#", "C#"], "Gdim"),
    e(&["G#", "B", "D"], "G#dim"),
];

const DIMINISHED7: &[CatalogEntry] = &[
    e(&["A", "C", "E♭", "G♭"], "Adim7"),
    e(&["A#", "C#", "E", "G"], "A#dim7"),
    e(&["B", "D", "F", "A♭"], "Bdim7"),
    e(&["C", "E♭", "G♭", "B♭"], "Cdim7"),
    e(&["C#", "E", "G", "B"], "C#dim7"),
    e(&["D", "F", "A♭", "C♭"], "Ddim7"),
    e(&["D#", "F#", "A", "C"], "D#dim7"),
    e(&["E", "G", "B♭", "D♭"], "Edim7"),
    e(&["F", "A♭", "B", "D"], "Fdim7"),
    e(&["F#", "A", "C", "E♭"], "F#dim7"),
    e(&["G", "A#", "C#", "E"], "Gdim7"),
    e(&["G#", "B", "D", "F"], "G#dim7"),
];

const AUGMENTED: &[CatalogEntry] = &[
    e(&["A", "C#", "E#"], "Aaug"),
    e(&["A#", "D", "F#"], "A#aug"),
    e(&["B", "D#", "G"], "Baug"),
    e(&["C", "E", "G#"], "Caug"),
    e(&["C#", "F", "A"], "C#aug"),
    e(&["D", "F#", "A#"], "Daug"),
    e(&["D#", "G", "B"], "D#aug"),
    e(&["E", "G#", "B#"], "Eaug"),
    e(&["F", "A", "C#"], "Faug"),
    e(&["F#", "A#", "D"], "F#aug"),
    e(&["G", "B", "D#"], "Gaug"),
    e(&["G#", "C", "E"], "G#aug"),
];

const MINOR7: &[CatalogEntry] = &[
    e(&["A", "C", "E", "G"], "Am7"),
    e(&["B", "D", "F#", "A"], "Bm7"),
    e(&["C#", "E", "G#", "B"], "C#m7"),
    e(&["D", "F", "A", "C"], "Dm7"),
    e(&["E", "G", "B", "D"], "Em7"),
    e(&["F#", "A", "C#", "E"], "F#m7"),
    e(&["G#", "B", "D#", "F#"], "G#m7"),
    e(&["A#", "C#", "E", "G#"], "A#m7"),
    e(&["C", "E♭", "G", "B♭"], "Cm7"),
    e(&["D#", "F#", "A#", "C#"], "D#m7"),
    e(&["F", "G#", "C", "D#"], "Fm7"),
    e(&["G", "A#", "D", "F"], "Gm7"),
];

const MINOR_MAJOR7: &[CatalogEntry] = &[
    e(&["A", "C", "E", "G#"], "AmMaj7"),
    e(&["B", "D", "F#", "A#"], "BmMaj7"),
    e(&["C#", "E", "G#", "B#"], "C#mMaj7"),
    e(&["D", "F", "A", "C#"], "DmMaj7"),
    e(&["E", "G", "B", "D#"], "EmMaj7"),
    e(&["F#", "A", "C#", "E#"], "F#mMaj7"),
    e(&["G#", "B", "D#", "F##"], "G#mMaj7"),
    e(&["A#", "C#", "E", "G#"], "A#mMaj7"),
    e(&["C", "E♭", "G", "B"], "CmMaj7"),
    e(&["D#", "F#", "A#", "C##"], "D#mMaj7"),
    e(&["F#", "A", "C#", "E##"], "F#mMaj7"),
    e(&["G#", "B", "D#", "F##"], "G#mMaj7"),
];

const HALF_DIMINISHED: &[CatalogEntry] = &[
    e(&["A", "C", "E♭", "G"], "Am7♭5"),
    e(&["B", "D", "F", "A"], "Bm7♭5"),
    e(&["C#", "E", "G", "B"], "C#m7♭5"),
    e(&["D", "F", "A♭", "C"], "Dm7♭5"),
    e(&["E", "G", "B♭", "D"], "Em7♭5"),
    e(&["F#", "A", "C", "E"], "F#m7♭5"),
    e(&["G#", "B", "D", "F#"], "G#m7♭5"),
    e(&["A#", "C#", "E", "G#"], "A#m7♭5"),
    e(&["C", "E♭", "G♭", "B♭"], "Cm7♭5"),
    e(&["D#", "F#", "A", "C"], "D#m7♭5"),
    e(&["F#", "A", "C", "E♭"], "F#m7♭5"),
    e(&["G#", "B", "D", "F"], "G#m7♭5"),
];

static SECTIONS: [CatalogSection; 8] = [
    CatalogSection { chord_type: ChordType::Minor, entries: MINOR },
    CatalogSection { chord_type: ChordType::Major, entries: MAJOR },
    CatalogSection { chord_type: ChordType::Diminished, entries: DIMINISHED },
    CatalogSection { chord_type: ChordType::Diminished7, entries: DIMINISHED7 },
    CatalogSection { chord_type: ChordType::Augmented, entries: AUGMENTED },
    CatalogSection { chord_type: ChordType::Minor7, entries: MINOR7 },
    CatalogSection { chord_type: ChordType::MinorMajor7, entries: MINOR_MAJOR7 },
    CatalogSection { chord_type: ChordType::HalfDiminished, entries: HALF_DIMINISHED },
];

// ============================================================================
// Access
// ============================================================================

/// Catalog sections in declaration order.
pub fn sections() -> &'static [CatalogSection] {
    &SECTIONS
}

/// Every catalog entry as a `Chord`, section by section.
pub fn chords() -> impl Iterator<Item = Chord> {
    SECTIONS.iter().flat_map(|section| {
        section.entries.iter().map(move |entry| entry.to_chord(section.chord_type))
    })
}

/// Total number of entries, duplicates included.
pub fn len() -> usize {
    SECTIONS.iter().map(|s| s.entries.len()).sum()
}

/// Size of the largest chord in the catalog.
pub fn max_chord_size() -> usize {
    SECTIONS
        .iter()
        .flat_map(|s| s.entries.iter())
        .map(|entry| entry.notes.len())
        .max()
        .unwrap_or(0)
}
