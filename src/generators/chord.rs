// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord generator for harmonic progressions.
//!
//! Walks the mode's progressions degree by degree, resolves each degree to a
//! triad in the key, and picks the inversion closest to the chord before it.

use tracing::debug;

use super::{progression::ProgressionCursor, TargetChord, TargetGenerator};
use crate::music::chord::{chord_label, closest_inversion, Triad};
use crate::music::pitch::SpelledNote;
use crate::music::scale::Key;

/// How the inverted triad is laid out for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordShape {
    /// Any voicing; the root-position triad is displayed
    Voiced,
    /// Low to high in chromatic order
    Ascending,
    /// Inverted bass first, remaining notes ascending
    SlashBass,
}

impl ChordShape {
    /// Arrange an inverted triad into target notes
    fn arrange(self, inverted: &Triad) -> [SpelledNote; 3] {
        match self {
            ChordShape::Voiced | ChordShape::Ascending => inverted.ascending(),
            ChordShape::SlashBass => {
                let notes = inverted.notes();
                let (bass, mut upper) = (notes[0], [notes[1], notes[2]]);
                upper.sort_by_key(|n| n.pitch().index());
                [bass, upper[0], upper[1]]
            }
        }
    }
}

/// Progression-driven chord generator
pub struct ChordGenerator {
    key: Key,
    shape: ChordShape,
    cursor: ProgressionCursor,
    /// Last inverted triad handed out; the voice-leading reference
    previous: Option<Triad>,
}

impl ChordGenerator {
    /// Create a new chord generator
    pub fn new(key: Key, shape: ChordShape) -> Self {
        let cursor = ProgressionCursor::new(key.mode());
        Self {
            key,
            shape,
            cursor,
            previous: None,
        }
    }

    /// Voice-leading reference for the next chord
    pub fn previous(&self) -> Option<&Triad> {
        self.previous.as_ref()
    }
}

impl TargetGenerator for ChordGenerator {
    fn next_target(&mut self) -> TargetChord {
        let degree = self.cursor.next();
        let original = self.key.triad(degree);
        let inversion = closest_inversion(self.previous.as_ref(), &original);
        self.previous = Some(inversion.triad);

        let label = chord_label(degree, &original, &inversion.triad, inversion.index);
        let arranged = self.shape.arrange(&inversion.triad);
        let display = match self.shape {
            ChordShape::Voiced => original.notes().to_vec(),
            _ => arranged.to_vec(),
        };

        debug!(
            degree = degree.label,
            chord = %inversion.triad,
            inversion = inversion.index,
            label = %label,
            "generated chord"
        );

        TargetChord {
            label,
            notes: arranged.iter().map(|n| n.pitch()).collect(),
            display_notes: display,
            degree: Some(degree),
            inversion: inversion.index,
        }
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.previous = None;
    }

    fn name(&self) -> &'static str {
        "chord"
    }
}
