// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Triads, voice-led inversion selection, and chord labels.

use std::fmt;

use super::pitch::{PitchClass, SpelledNote};
use super::scale::{Degree, Quality};

/// Three spelled notes; the first sounds lowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triad {
    notes: [SpelledNote; 3],
}

impl Triad {
    /// Create a triad from its voices, lowest first
    pub fn new(notes: [SpelledNote; 3]) -> Self {
        Self { notes }
    }

    /// Voices in sounding order
    pub fn notes(&self) -> &[SpelledNote; 3] {
        &self.notes
    }

    /// First voice; for a root-position triad this is the root
    pub fn root(&self) -> SpelledNote {
        self.notes[0]
    }

    /// Lowest voice
    pub fn bass(&self) -> SpelledNote {
        self.notes[0]
    }

    /// Normalized pitch classes in voice order
    pub fn pitches(&self) -> [PitchClass; 3] {
        self.notes.map(|n| n.pitch())
    }

    /// Move the first `k` notes to the end, keeping their relative order.
    ///
    /// Rotation 1 is first inversion, rotation 2 second inversion.
    pub fn rotate(&self, k: usize) -> Triad {
        let mut notes = self.notes;
        let len = notes.len();
        notes.rotate_left(k % len);
        Triad { notes }
    }

    /// Notes sorted by chromatic index (C lowest)
    pub fn ascending(&self) -> [SpelledNote; 3] {
        let mut notes = self.notes;
        notes.sort_by_key(|n| n.pitch().index());
        notes
    }

    /// Total per-voice pitch-class distance to another triad
    pub fn voice_distance(&self, other: &Triad) -> u32 {
        self.notes
            .iter()
            .zip(other.notes.iter())
            .map(|(a, b)| a.pitch().distance(b.pitch()) as u32)
            .sum()
    }
}

impl fmt::Display for Triad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.notes[0], self.notes[1], self.notes[2])
    }
}

/// Result of inversion selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inversion {
    /// The rotated triad
    pub triad: Triad,
    /// Rotation applied: 0 = root position, 1 = first, 2 = second
    pub index: usize,
}

/// Pick the rotation of `chord` closest to the previously sounded chord.
///
/// Only the immediately preceding chord is considered. Ties go to the lowest
/// rotation index. Without a previous chord the triad is returned unaltered.
pub fn closest_inversion(previous: Option<&Triad>, chord: &Triad) -> Inversion {
    let Some(previous) = previous else {
        return Inversion {
            triad: *chord,
            index: 0,
        };
    };

    (0..3)
        .map(|k| Inversion {
            triad: chord.rotate(k),
            index: k,
        })
        .min_by_key(|candidate| previous.voice_distance(&candidate.triad))
        .unwrap_or(Inversion {
            triad: *chord,
            index: 0,
        })
}

/// Display name for a chord.
///
/// Major chords show the bare root, others `"{root} {quality}"`. Inverted
/// chords drop the quality entirely and show `"{root}/{bass}"`, the root taken
/// from the root-position triad and the bass from the inverted one.
pub fn chord_label(
    degree: &Degree,
    original: &Triad,
    inverted: &Triad,
    inversion: usize,
) -> String {
    let root = original.root();
    if inversion > 0 {
        return format!("{}/{}", root, inverted.bass());
    }
    match degree.quality {
        Quality::Major => root.to_string(),
        quality => format!("{} {}", root, quality),
    }
}
