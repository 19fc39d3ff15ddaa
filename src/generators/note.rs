// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Single-note generators for the beginner levels.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{TargetChord, TargetGenerator};
use crate::music::scale::Key;

/// Walks the scale upward, wrapping back to the tonic
pub struct ScaleWalkGenerator {
    key: Key,
    position: usize,
}

impl ScaleWalkGenerator {
    /// Create a new scale walk starting at the tonic
    pub fn new(key: Key) -> Self {
        Self { key, position: 0 }
    }
}

impl TargetGenerator for ScaleWalkGenerator {
    fn next_target(&mut self) -> TargetChord {
        let scale = self.key.scale();
        let note = scale[self.position % scale.len()];
        self.position = (self.position + 1) % scale.len();
        TargetChord::single(note)
    }

    fn reset(&mut self) {
        self.position = 0;
    }

    fn name(&self) -> &'static str {
        "scale_walk"
    }
}

/// Uniformly random scale notes
pub struct RandomNoteGenerator {
    key: Key,
    seed: Option<u64>,
    rng: StdRng,
}

impl RandomNoteGenerator {
    /// Create a new random note generator; seeded runs repeat exactly
    pub fn new(key: Key, seed: Option<u64>) -> Self {
        Self {
            key,
            seed,
            rng: make_rng(seed),
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl TargetGenerator for RandomNoteGenerator {
    fn next_target(&mut self) -> TargetChord {
        let scale = self.key.scale();
        let note = scale[self.rng.gen_range(0..scale.len())];
        TargetChord::single(note)
    }

    fn reset(&mut self) {
        self.rng = make_rng(self.seed);
    }

    fn name(&self) -> &'static str {
        "random_note"
    }
}
