// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The set of keys currently held down by the player.

use crate::music::pitch::{MidiNote, PitchClass};

/// A key currently held on the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedNote {
    /// Sharp-normalized pitch class of the key
    pub note: PitchClass,
    /// MIDI note number (0-127)
    pub midi: MidiNote,
}

impl PlayedNote {
    pub fn new(midi: MidiNote) -> Self {
        Self {
            note: PitchClass::from_midi(midi),
            midi,
        }
    }
}

/// Held notes in the order they were struck, keyed by MIDI number.
///
/// Never contains the same MIDI number twice. Releases are matched by MIDI
/// number, so releasing one of two held C's in different octaves removes
/// exactly that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldNotes {
    notes: Vec<PlayedNote>,
}

impl HeldNotes {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns false if the key was already held
    pub fn press(&mut self, midi: MidiNote) -> bool {
        if self.contains(midi) {
            return false;
        }
        self.notes.push(PlayedNote::new(midi));
        true
    }

    /// Record a key release; returns false if the key was not held
    pub fn release(&mut self, midi: MidiNote) -> bool {
        match self.notes.iter().position(|n| n.midi == midi) {
            Some(idx) => {
                self.notes.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether a MIDI number is currently held
    pub fn contains(&self, midi: MidiNote) -> bool {
        self.notes.iter().any(|n| n.midi == midi)
    }

    /// Release everything, returning what was held in strike order
    pub fn drain(&mut self) -> Vec<PlayedNote> {
        std::mem::take(&mut self.notes)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Held notes in strike order
    pub fn as_slice(&self) -> &[PlayedNote] {
        &self.notes
    }

    /// Held notes sorted low to high by MIDI number
    pub fn ascending(&self) -> Vec<PlayedNote> {
        let mut sorted = self.notes.clone();
        sorted.sort_by_key(|n| n.midi);
        sorted
    }
}
