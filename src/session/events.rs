// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Events a session reports to its rendering and sound collaborators.

use std::fmt;

use crate::music::pitch::{MidiNote, PitchClass, SpelledNote};

/// Identifies one falling chord for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChordId(pub u64);

impl fmt::Display for ChordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload for drawing a newly spawned chord
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSpawn {
    pub id: ChordId,
    /// Chord or note name
    pub label: String,
    /// Pitch classes the player must play, in match order
    pub notes: Vec<PitchClass>,
    /// Roman numeral, when degree display is on and the target is a chord
    pub display_degree: Option<&'static str>,
    /// Key-spelled note names, when note display applies at the current score
    pub display_notes: Option<Vec<SpelledNote>>,
    /// Fall speed multiplier
    pub speed: f64,
}

/// Output of a session step
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A target entered the screen
    Spawned(ChordSpawn),
    /// The held keys satisfied a target; `cue` holds one frequency per note
    Matched {
        id: ChordId,
        label: String,
        cue: Vec<f64>,
    },
    /// A target crossed the bottom boundary
    Missed { id: ChordId, lives_left: u32 },
    /// Lives ran out
    SessionEnded { final_score: u32 },
    /// Start a tone for a struck key
    ToneOn {
        midi: MidiNote,
        frequency: f64,
        gain: f64,
    },
    /// Stop the tone for a released key
    ToneOff { midi: MidiNote },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Spawned(spawn) => {
                write!(f, "spawned {} {}", spawn.id, spawn.label)?;
                if let Some(degree) = spawn.display_degree {
                    write!(f, " ({})", degree)?;
                }
                if let Some(notes) = &spawn.display_notes {
                    let names: Vec<&str> = notes.iter().map(|n| n.name()).collect();
                    write!(f, " [{}]", names.join(" "))?;
                }
                Ok(())
            }
            GameEvent::Matched { id, label, .. } => write!(f, "matched {} {}", id, label),
            GameEvent::Missed { id, lives_left } => {
                write!(f, "missed {} ({} lives left)", id, lives_left)
            }
            GameEvent::SessionEnded { final_score } => {
                write!(f, "session ended, final score {}", final_score)
            }
            GameEvent::ToneOn { midi, frequency, .. } => {
                write!(f, "tone on {} ({:.2} Hz)", midi, frequency)
            }
            GameEvent::ToneOff { midi } => write!(f, "tone off {}", midi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let spawn = GameEvent::Spawned(ChordSpawn {
            id: ChordId(3),
            label: "F/C".to_string(),
            notes: vec![PitchClass::C, PitchClass::F, PitchClass::A],
            display_degree: Some("IV"),
            display_notes: Some(["C", "F", "A"].map(|n| SpelledNote::new(n).unwrap()).to_vec()),
            speed: 1.0,
        });
        assert_eq!(spawn.to_string(), "spawned #3 F/C (IV) [C F A]");

        let missed = GameEvent::Missed {
            id: ChordId(1),
            lives_left: 2,
        };
        assert_eq!(missed.to_string(), "missed #1 (2 lives left)");
        assert_eq!(
            GameEvent::SessionEnded { final_score: 7 }.to_string(),
            "session ended, final score 7"
        );
    }
}
