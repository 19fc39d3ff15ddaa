// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Cyclic traversal of the fixed chord progressions for a mode.

use crate::music::scale::{Degree, Mode};

/// Progressions as indices into the mode's degree table
const MAJOR_PROGRESSIONS: [[usize; 4]; 3] = [
    [0, 3, 4, 0], // I-IV-V-I
    [0, 5, 3, 4], // I-vi-IV-V
    [1, 4, 0, 0], // ii-V-I-I
];

const MINOR_PROGRESSIONS: [[usize; 4]; 3] = [
    [0, 3, 4, 0], // i-iv-v-i
    [0, 5, 2, 6], // i-VI-III-VII
    [1, 4, 0, 0], // ii°-v-i-i
];

/// The progression set for a mode
pub fn progressions(mode: Mode) -> &'static [[usize; 4]] {
    match mode {
        Mode::Major => &MAJOR_PROGRESSIONS,
        Mode::Minor => &MINOR_PROGRESSIONS,
    }
}

/// Position in the progression set: which progression, which chord within it.
///
/// Each call to [`next`](ProgressionCursor::next) yields one degree; when a
/// progression is exhausted the cursor moves on to the next one, wrapping
/// around the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionCursor {
    mode: Mode,
    progression_index: usize,
    chord_index: usize,
}

impl ProgressionCursor {
    /// Create a cursor at (0, 0)
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            progression_index: 0,
            chord_index: 0,
        }
    }

    /// Current (progression, chord) indices
    pub fn position(&self) -> (usize, usize) {
        (self.progression_index, self.chord_index)
    }

    /// Number of calls after which the sequence repeats
    pub fn cycle_len(&self) -> usize {
        progressions(self.mode).iter().map(|p| p.len()).sum()
    }

    /// Yield the current degree and advance
    pub fn next(&mut self) -> &'static Degree {
        let set = progressions(self.mode);
        let progression = &set[self.progression_index];
        let degree = &self.mode.degrees()[progression[self.chord_index]];

        self.chord_index += 1;
        if self.chord_index >= progression.len() {
            self.chord_index = 0;
            self.progression_index = (self.progression_index + 1) % set.len();
        }

        degree
    }

    /// Back to the first chord of the first progression
    pub fn reset(&mut self) {
        self.progression_index = 0;
        self.chord_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(cursor: &mut ProgressionCursor, n: usize) -> Vec<&'static str> {
        (0..n).map(|_| cursor.next().label).collect()
    }

    #[test]
    fn test_major_sequence() {
        let mut cursor = ProgressionCursor::new(Mode::Major);
        assert_eq!(
            labels(&mut cursor, 12),
            ["I", "IV", "V", "I", "I", "vi", "IV", "V", "ii", "V", "I", "I"]
        );
    }

    #[test]
    fn test_minor_sequence() {
        let mut cursor = ProgressionCursor::new(Mode::Minor);
        assert_eq!(
            labels(&mut cursor, 12),
            ["i", "iv", "v", "i", "i", "VI", "III", "VII", "ii°", "v", "i", "i"]
        );
    }

    #[test]
    fn test_position_advances_and_wraps() {
        let mut cursor = ProgressionCursor::new(Mode::Major);
        assert_eq!(cursor.position(), (0, 0));
        cursor.next();
        assert_eq!(cursor.position(), (0, 1));
        for _ in 0..3 {
            cursor.next();
        }
        assert_eq!(cursor.position(), (1, 0));
    }

    #[test]
    fn test_cycle_returns_to_start() {
        for mode in [Mode::Major, Mode::Minor] {
            let mut cursor = ProgressionCursor::new(mode);
            let n = cursor.cycle_len();
            assert_eq!(n, 12);

            let first = labels(&mut cursor, n);
            assert_eq!(cursor.position(), (0, 0));
            let second = labels(&mut cursor, n);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_reset() {
        let mut cursor = ProgressionCursor::new(Mode::Minor);
        labels(&mut cursor, 5);
        cursor.reset();
        assert_eq!(cursor.position(), (0, 0));
        assert_eq!(cursor.next().label, "i");
    }
}
