// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes, enharmonic spelling, and semitone arithmetic.
//!
//! Note names arrive in two flavours: the sharp-only names produced from
//! MIDI numbers, and the key-idiomatic spellings stored in the scale tables
//! (`Bb`, `E#`, ...). Everything that compares or measures pitches goes
//! through [`normalize`] first so both flavours meet on the sharp form.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{NebulaError, Result};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Canonical sharp spellings, indexed by pitch class.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Alternate spellings and their sharp/natural equivalents.
const ENHARMONIC_TO_SHARP: [(&str, &str); 9] = [
    ("Bb", "A#"),
    ("Eb", "D#"),
    ("Ab", "G#"),
    ("Db", "C#"),
    ("Gb", "F#"),
    ("Cb", "B"),
    ("Fb", "E"),
    ("E#", "F"),
    ("B#", "C"),
];

/// One of the twelve semitone identities, independent of octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Index 0-11 on the chromatic table (C = 0)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Get pitch class from a chromatic index (wraps at 12)
    pub fn from_index(index: u8) -> Self {
        PitchClass::ALL[(index % 12) as usize]
    }

    /// Pitch class of a MIDI note number; always a sharp or natural
    pub fn from_midi(midi_note: MidiNote) -> Self {
        Self::from_index(midi_note % 12)
    }

    /// Parse a note name in any supported spelling ("C", "F#", "Bb", "E#")
    pub fn parse(name: &str) -> Option<Self> {
        let sharp = normalize(name);
        NOTE_NAMES
            .iter()
            .position(|&n| n == sharp)
            .map(|i| Self::from_index(i as u8))
    }

    /// Canonical sharp name
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.index() as usize]
    }

    /// Shortest distance around the pitch circle, 0..=6
    pub fn distance(self, other: PitchClass) -> u8 {
        let d = (self.index() as i8 - other.index() as i8).unsigned_abs();
        if d > 6 {
            12 - d
        } else {
            d
        }
    }

    /// Frequency of this pitch class in the octave spanning C4..B4, tuned to A4 = 440 Hz
    pub fn cue_frequency(self) -> f64 {
        440.0 * 2f64.powf((self.index() as f64 - 9.0) / 12.0)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A note name as written in a key's scale, paired with its pitch class.
///
/// The spelling is kept for display (chord roots, slash basses); the pitch
/// class is what every comparison uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledNote {
    name: &'static str,
    pitch: PitchClass,
}

impl SpelledNote {
    /// Spell a note; fails if the name is not a recognized pitch
    pub fn new(name: &'static str) -> Result<Self> {
        let pitch =
            PitchClass::parse(name).ok_or_else(|| NebulaError::UnknownNote(name.to_string()))?;
        Ok(Self { name, pitch })
    }

    /// Spelling as written in the scale table
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Normalized pitch class
    pub fn pitch(&self) -> PitchClass {
        self.pitch
    }
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Map flat (and E#/B#) spellings to their sharp/natural equivalent.
///
/// Names outside the table pass through unchanged, so naturals and
/// already-sharp spellings are returned as given.
pub fn normalize(name: &str) -> &str {
    ENHARMONIC_TO_SHARP
        .iter()
        .find(|(alt, _)| *alt == name)
        .map(|(_, sharp)| *sharp)
        .unwrap_or(name)
}

/// Sharp name for a MIDI note number
pub fn midi_to_name(midi_note: MidiNote) -> &'static str {
    PitchClass::from_midi(midi_note).name()
}

/// Name-level voice distance between two spellings.
///
/// Returns `None` when either name is not a recognized pitch; callers
/// only feed names from the closed scale tables, so that is logged as a
/// broken invariant rather than treated as a normal outcome.
pub fn distance(a: &str, b: &str) -> Option<u8> {
    match (PitchClass::parse(a), PitchClass::parse(b)) {
        (Some(pa), Some(pb)) => Some(pa.distance(pb)),
        _ => {
            error!(a, b, "distance requested for unrecognized note name");
            None
        }
    }
}

/// Equal-temperament frequency of a MIDI note, A4 (69) = 440 Hz
pub fn frequency(midi_note: MidiNote) -> f64 {
    440.0 * 2f64.powf((midi_note as f64 - 69.0) / 12.0)
}
