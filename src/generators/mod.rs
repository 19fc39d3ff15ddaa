// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Target generators for falling chords.
//!
//! Each level pulls its targets from one generator: chord levels walk the
//! fixed progressions with voice-led inversions, note levels walk or sample
//! the scale.

pub mod chord;
pub mod note;
pub mod progression;

pub use chord::{ChordGenerator, ChordShape};
pub use note::{RandomNoteGenerator, ScaleWalkGenerator};
pub use progression::ProgressionCursor;

use crate::config::Level;
use crate::music::pitch::{PitchClass, SpelledNote};
use crate::music::scale::{Degree, Key};

/// What a falling circle asks the player to play
#[derive(Debug, Clone, PartialEq)]
pub struct TargetChord {
    /// Display name ("C", "D min", "F/C", or a single note)
    pub label: String,
    /// Normalized pitch classes in match order
    pub notes: Vec<PitchClass>,
    /// Key-spelled notes to show the player
    pub display_notes: Vec<SpelledNote>,
    /// Scale degree the chord was built on; `None` for single notes
    pub degree: Option<&'static Degree>,
    /// Rotation applied to the triad (0 for single notes)
    pub inversion: usize,
}

impl TargetChord {
    /// A single-note target labeled with its key spelling
    pub fn single(note: SpelledNote) -> Self {
        Self {
            label: note.to_string(),
            notes: vec![note.pitch()],
            display_notes: vec![note],
            degree: None,
            inversion: 0,
        }
    }

    /// Number of keys the player must hold
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True for a target with no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Trait for all target generator implementations
pub trait TargetGenerator: Send {
    /// Produce the next target
    fn next_target(&mut self) -> TargetChord;

    /// Reset the generator state
    ///
    /// Called when a session starts or restarts.
    fn reset(&mut self);

    /// Get the generator type name
    fn name(&self) -> &'static str;
}

/// Build the generator a level draws its targets from
pub fn for_level(level: Level, key: &Key, seed: Option<u64>) -> Box<dyn TargetGenerator> {
    match level {
        Level::ScaleWalk => Box::new(ScaleWalkGenerator::new(key.clone())),
        Level::RandomNote => Box::new(RandomNoteGenerator::new(key.clone(), seed)),
        Level::Chord => Box::new(ChordGenerator::new(key.clone(), ChordShape::Voiced)),
        Level::AscendingChord => Box::new(ChordGenerator::new(key.clone(), ChordShape::Ascending)),
        Level::SlashChord => Box::new(ChordGenerator::new(key.clone(), ChordShape::SlashBass)),
    }
}
