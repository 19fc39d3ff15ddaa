// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Difficulty levels.

use std::fmt;

use crate::matching::MatchPolicy;

/// Difficulty level, 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Single notes walking up the scale
    ScaleWalk,
    /// Single random scale notes
    RandomNote,
    /// Triads, any voicing
    Chord,
    /// Triads played low to high in chromatic order
    AscendingChord,
    /// Slash chords: named bass at the bottom
    SlashChord,
}

impl Level {
    /// Level used when the configured number is out of range
    pub const DEFAULT: Level = Level::AscendingChord;

    /// Level from its 1-based number
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Level::ScaleWalk),
            2 => Some(Level::RandomNote),
            3 => Some(Level::Chord),
            4 => Some(Level::AscendingChord),
            5 => Some(Level::SlashChord),
            _ => None,
        }
    }

    /// 1-based level number
    pub fn number(self) -> u8 {
        match self {
            Level::ScaleWalk => 1,
            Level::RandomNote => 2,
            Level::Chord => 3,
            Level::AscendingChord => 4,
            Level::SlashChord => 5,
        }
    }

    /// Match policy applied to targets at this level
    pub fn match_policy(self) -> MatchPolicy {
        match self {
            Level::ScaleWalk | Level::RandomNote | Level::Chord => MatchPolicy::Set,
            Level::AscendingChord => MatchPolicy::Ordered,
            Level::SlashChord => MatchPolicy::BassConstrained,
        }
    }

    /// Whether targets are chords rather than single notes
    pub fn spawns_chords(self) -> bool {
        !matches!(self, Level::ScaleWalk | Level::RandomNote)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_numbers() {
        for n in 1..=5 {
            assert_eq!(Level::from_number(n).map(Level::number), Some(n));
        }
        assert_eq!(Level::from_number(0), None);
        assert_eq!(Level::from_number(6), None);
    }

    #[test]
    fn test_level_policies() {
        assert_eq!(Level::ScaleWalk.match_policy(), MatchPolicy::Set);
        assert_eq!(Level::Chord.match_policy(), MatchPolicy::Set);
        assert_eq!(Level::AscendingChord.match_policy(), MatchPolicy::Ordered);
        assert_eq!(Level::SlashChord.match_policy(), MatchPolicy::BassConstrained);
    }

    #[test]
    fn test_default_level() {
        assert_eq!(Level::default().number(), 4);
        assert!(Level::default().spawns_chords());
        assert!(!Level::RandomNote.spawns_chords());
    }
}
