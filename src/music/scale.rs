// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keys, diatonic scale tables, and scale-degree resolution.
//!
//! The scales, degree labels and chord qualities are fixed hand-written
//! tables rather than interval arithmetic: each key keeps its idiomatic
//! spelling (`Bb` in F major, `E#` in F# major) so chord roots display the
//! way a musician reading the key expects.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::chord::Triad;
use super::pitch::SpelledNote;
use crate::error::{NebulaError, Result};

/// Scale mode of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    /// Parse mode from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" | "maj" => Some(Mode::Major),
            "minor" | "min" => Some(Mode::Minor),
            _ => None,
        }
    }

    /// Degree table in scale order
    pub fn degrees(self) -> &'static [Degree; 7] {
        match self {
            Mode::Major => &MAJOR_DEGREES,
            Mode::Minor => &MINOR_DEGREES,
        }
    }

    /// Look up a degree by its roman-numeral label
    pub fn degree(self, label: &str) -> Result<&'static Degree> {
        self.degrees()
            .iter()
            .find(|d| d.label == label)
            .ok_or_else(|| NebulaError::UnknownDegree {
                degree: label.to_string(),
                mode: self,
            })
    }

    /// Tonic spellings that have a scale table in this mode
    pub fn supported_keys(self) -> impl Iterator<Item = &'static str> {
        self.scale_tables().iter().map(|(tonic, _)| *tonic)
    }

    fn scale_tables(self) -> &'static [(&'static str, [&'static str; 7])] {
        match self {
            Mode::Major => &MAJOR_SCALES,
            Mode::Minor => &MINOR_SCALES,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    /// Short suffix used in chord labels
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "maj",
            Quality::Minor => "min",
            Quality::Diminished => "dim",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A roman-numeral scale degree with its fixed triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Degree {
    /// Roman numeral as displayed ("IV", "ii°")
    pub label: &'static str,
    /// 0-based position in the scale
    pub index: usize,
    /// Triad quality built on this degree
    pub quality: Quality,
}

impl Degree {
    const fn new(label: &'static str, index: usize, quality: Quality) -> Self {
        Self {
            label,
            index,
            quality,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const MAJOR_DEGREES: [Degree; 7] = [
    Degree::new("I", 0, Quality::Major),
    Degree::new("ii", 1, Quality::Minor),
    Degree::new("iii", 2, Quality::Minor),
    Degree::new("IV", 3, Quality::Major),
    Degree::new("V", 4, Quality::Major),
    Degree::new("vi", 5, Quality::Minor),
    Degree::new("vii", 6, Quality::Diminished),
];

const MINOR_DEGREES: [Degree; 7] = [
    Degree::new("i", 0, Quality::Minor),
    Degree::new("ii°", 1, Quality::Diminished),
    Degree::new("III", 2, Quality::Major),
    Degree::new("iv", 3, Quality::Minor),
    Degree::new("v", 4, Quality::Minor),
    Degree::new("VI", 5, Quality::Major),
    Degree::new("VII", 6, Quality::Major),
];

const MAJOR_SCALES: [(&str, [&str; 7]); 14] = [
    ("C", ["C", "D", "E", "F", "G", "A", "B"]),
    ("G", ["G", "A", "B", "C", "D", "E", "F#"]),
    ("D", ["D", "E", "F#", "G", "A", "B", "C#"]),
    ("A", ["A", "B", "C#", "D", "E", "F#", "G#"]),
    ("E", ["E", "F#", "G#", "A", "B", "C#", "D#"]),
    ("B", ["B", "C#", "D#", "E", "F#", "G#", "A#"]),
    ("F#", ["F#", "G#", "A#", "B", "C#", "D#", "E#"]),
    ("C#", ["C#", "D#", "E#", "F#", "G#", "A#", "B#"]),
    ("F", ["F", "G", "A", "Bb", "C", "D", "E"]),
    ("Bb", ["Bb", "C", "D", "Eb", "F", "G", "A"]),
    ("Eb", ["Eb", "F", "G", "Ab", "Bb", "C", "D"]),
    ("Ab", ["Ab", "Bb", "C", "Db", "Eb", "F", "G"]),
    ("Db", ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]),
    ("Gb", ["Gb", "Ab", "Bb", "Cb", "Db", "Eb", "F"]),
];

const MINOR_SCALES: [(&str, [&str; 7]); 14] = [
    ("A", ["A", "B", "C", "D", "E", "F", "G"]),
    ("E", ["E", "F#", "G", "A", "B", "C", "D"]),
    ("B", ["B", "C#", "D", "E", "F#", "G", "A"]),
    ("F#", ["F#", "G#", "A", "B", "C#", "D", "E"]),
    ("C#", ["C#", "D#", "E", "F#", "G#", "A", "B"]),
    ("G#", ["G#", "A#", "B", "C#", "D#", "E", "F#"]),
    ("D#", ["D#", "E#", "F#", "G#", "A#", "B", "C#"]),
    ("A#", ["A#", "B#", "C#", "D#", "E#", "F#", "G#"]),
    ("D", ["D", "E", "F", "G", "A", "Bb", "C"]),
    ("G", ["G", "A", "Bb", "C", "D", "Eb", "F"]),
    ("C", ["C", "D", "Eb", "F", "G", "Ab", "Bb"]),
    ("F", ["F", "G", "Ab", "Bb", "C", "Db", "Eb"]),
    ("Bb", ["Bb", "C", "Db", "Eb", "F", "Gb", "Ab"]),
    ("Eb", ["Eb", "F", "Gb", "Ab", "Bb", "Cb", "Db"]),
];

/// A key: tonic spelling, mode, and its seven-note diatonic scale
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    tonic: &'static str,
    mode: Mode,
    scale: Vec<SpelledNote>,
}

impl Key {
    /// Create a key from a tonic spelling; only the tabled keys are supported
    pub fn new(tonic: &str, mode: Mode) -> Result<Self> {
        let &(tonic, names) = mode
            .scale_tables()
            .iter()
            .find(|(t, _)| *t == tonic.trim())
            .ok_or_else(|| NebulaError::UnknownKey {
                key: tonic.to_string(),
                mode,
            })?;

        let scale = names
            .iter()
            .map(|&name| SpelledNote::new(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tonic,
            mode,
            scale,
        })
    }

    /// Tonic as spelled in the table
    pub fn tonic(&self) -> &'static str {
        self.tonic
    }

    /// Mode of this key
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The seven scale notes in key spelling
    pub fn scale(&self) -> &[SpelledNote] {
        &self.scale
    }

    /// Root-position triad on a degree: scale[i], scale[i+2], scale[i+4] (mod 7)
    pub fn triad(&self, degree: &Degree) -> Triad {
        let len = self.scale.len();
        let i = degree.index % len;
        Triad::new([
            self.scale[i],
            self.scale[(i + 2) % len],
            self.scale[(i + 4) % len],
        ])
    }

    /// Resolve a roman-numeral label to its root-position triad in this key
    pub fn triad_for_degree(&self, label: &str) -> Result<Triad> {
        let degree = self.mode.degree(label)?;
        Ok(self.triad(degree))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}
