// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Match predicates comparing held keys against a target chord.
//!
//! A non-match is the normal, frequent outcome; none of these report
//! errors. Every policy rejects on a note-count mismatch before looking
//! at individual notes.

use std::collections::BTreeSet;

use super::held::HeldNotes;
use crate::music::pitch::PitchClass;

/// How held notes are compared against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Same pitch classes, any order or octave
    Set,
    /// Held notes, low to high, spell the target sorted by chromatic index
    Ordered,
    /// Held notes, low to high, spell the target in its given order, and the
    /// first-struck key is not above the second-struck key.
    ///
    /// The player has to strike the bass before the next key up; a correct
    /// voicing struck top-down is rejected.
    BassConstrained,
}

impl MatchPolicy {
    /// Decide whether the held notes satisfy the target
    pub fn matches(self, held: &HeldNotes, target: &[PitchClass]) -> bool {
        if held.len() != target.len() {
            return false;
        }

        match self {
            MatchPolicy::Set => set_match(held, target),
            MatchPolicy::Ordered => ordered_match(held, target),
            MatchPolicy::BassConstrained => bass_constrained_match(held, target),
        }
    }
}

fn set_match(held: &HeldNotes, target: &[PitchClass]) -> bool {
    let wanted: BTreeSet<PitchClass> = target.iter().copied().collect();
    let played: BTreeSet<PitchClass> = held.as_slice().iter().map(|n| n.note).collect();
    wanted == played
}

fn ordered_match(held: &HeldNotes, target: &[PitchClass]) -> bool {
    let mut wanted = target.to_vec();
    wanted.sort_by_key(|p| p.index());
    sequence_match(held, &wanted)
}

fn bass_constrained_match(held: &HeldNotes, target: &[PitchClass]) -> bool {
    if !sequence_match(held, target) {
        return false;
    }
    match held.as_slice() {
        [bass, second, ..] => bass.midi <= second.midi,
        _ => true,
    }
}

fn sequence_match(held: &HeldNotes, wanted: &[PitchClass]) -> bool {
    held.ascending()
        .iter()
        .zip(wanted)
        .all(|(played, &want)| played.note == want)
}
