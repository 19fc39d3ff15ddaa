// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Game session controller.
//!
//! A [`Session`] owns all mutable game state: score, lives, the held keys,
//! and the chords currently falling. It is driven by two external sources,
//! note events from the input device and elapsed-time ticks, and answers
//! each with the [`GameEvent`]s the rendering and sound layers act on.
//!
//! Each call runs to completion before the next one is handled. Matched and
//! missed chords are first marked `destroyed` and then compacted out in a
//! separate pass, so the active collection is never spliced mid-scan.

pub mod events;

pub use events::{ChordId, ChordSpawn, GameEvent};

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::{SessionConfig, ValidatedConfig};
use crate::error::Result;
use crate::generators::{self, TargetChord, TargetGenerator};
use crate::matching::{HeldNotes, MatchPolicy};
use crate::midi::InputEvent;
use crate::music::pitch::{frequency, MidiNote};
use crate::timing::SpawnClock;

/// Peak gain for a struck key at full velocity
const TONE_GAIN: f64 = 0.3;

/// A target on its way down the screen
#[derive(Debug, Clone, PartialEq)]
pub struct FallingChord {
    pub id: ChordId,
    pub target: TargetChord,
    /// 0.0 at the top, 1.0 at the bottom boundary
    pub progress: f64,
    /// Fall speed multiplier
    pub speed: f64,
    /// Matched or missed; removed on the next compaction
    pub destroyed: bool,
}

/// Whether the session still accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended,
}

/// Mutable state of one game
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub score: u32,
    pub lives: u32,
    /// Targets spawned so far
    pub spawn_count: u64,
    pub held: HeldNotes,
    pub chords: Vec<FallingChord>,
    pub phase: Phase,
}

impl SessionState {
    fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            spawn_count: 0,
            held: HeldNotes::new(),
            chords: Vec::new(),
            phase: Phase::Running,
        }
    }

    /// Drop chords marked destroyed
    fn compact(&mut self) {
        self.chords.retain(|chord| !chord.destroyed);
    }
}

/// Controller for one game session
pub struct Session {
    config: ValidatedConfig,
    policy: MatchPolicy,
    generator: Box<dyn TargetGenerator>,
    clock: SpawnClock,
    state: SessionState,
    next_id: u64,
}

impl Session {
    /// Validate a configuration and start a session with it.
    ///
    /// Refuses to start on an unsupported key or a missing input device.
    pub fn start(config: &SessionConfig) -> Result<Self> {
        let validated = config.validate()?;
        Ok(Self::with_config(validated))
    }

    /// Start a session from an already validated configuration.
    ///
    /// A [`ValidatedConfig`] only comes out of [`SessionConfig::validate`],
    /// so the device and pacing checks have always run.
    pub fn with_config(config: ValidatedConfig) -> Self {
        let generator = generators::for_level(config.level, &config.key, config.seed);
        let session = Self {
            policy: config.level.match_policy(),
            generator,
            clock: SpawnClock::new(config.spawn_interval_ms),
            state: SessionState::new(config.lives),
            next_id: 0,
            config,
        };
        info!(
            key = %session.config.key,
            level = %session.config.level,
            device = %session.config.input_device,
            "session started"
        );
        session
    }

    /// Reset everything to a fresh game with the same configuration.
    ///
    /// Returns a `ToneOff` for every key still held so no tone outlives the
    /// game it was struck in.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.release_all(&mut events);
        self.generator.reset();
        self.clock.reset();
        self.state = SessionState::new(self.config.lives);
        self.next_id = 0;
        info!(key = %self.config.key, "session restarted");
        events
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Match policy for the configured level
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == Phase::Running
    }

    /// Chords currently on screen, oldest first
    pub fn active_chords(&self) -> &[FallingChord] {
        &self.state.chords
    }

    /// Time until the next spawn
    pub fn time_until_spawn(&self) -> u64 {
        self.clock.time_until_next()
    }

    /// Apply one note event
    pub fn handle(&mut self, event: InputEvent) -> Vec<GameEvent> {
        if !self.is_running() {
            debug!(?event, "input after session end ignored");
            return Vec::new();
        }

        match event {
            InputEvent::NoteOn { note, velocity } if velocity > 0 => self.note_on(note, velocity),
            InputEvent::NoteOn { note, .. } | InputEvent::NoteOff { note } => self.note_off(note),
        }
    }

    /// Apply one raw MIDI message; anything but note on/off is ignored
    pub fn handle_midi(&mut self, data: &[u8]) -> Vec<GameEvent> {
        match InputEvent::from_bytes(data) {
            Some(event) => self.handle(event),
            None => {
                debug!(bytes = ?data, "non-note MIDI message ignored");
                Vec::new()
            }
        }
    }

    fn note_on(&mut self, midi: MidiNote, velocity: u8) -> Vec<GameEvent> {
        if !self.state.held.press(midi) {
            debug!(midi, "duplicate note-on ignored");
            return Vec::new();
        }

        let mut events = vec![GameEvent::ToneOn {
            midi,
            frequency: frequency(midi),
            gain: velocity as f64 / 127.0 * TONE_GAIN,
        }];
        self.scan_matches(&mut events);
        events
    }

    fn note_off(&mut self, midi: MidiNote) -> Vec<GameEvent> {
        if self.state.held.release(midi) {
            vec![GameEvent::ToneOff { midi }]
        } else {
            debug!(midi, "release of a key not held");
            Vec::new()
        }
    }

    /// Check every unmatched chord against the held keys, newest first
    fn scan_matches(&mut self, events: &mut Vec<GameEvent>) {
        let policy = self.policy;
        let held = &self.state.held;
        let mut matched = 0;

        for chord in self.state.chords.iter_mut().rev() {
            if chord.destroyed || !policy.matches(held, &chord.target.notes) {
                continue;
            }
            chord.destroyed = true;
            matched += 1;
            info!(id = %chord.id, label = %chord.target.label, "chord matched");
            events.push(GameEvent::Matched {
                id: chord.id,
                label: chord.target.label.clone(),
                cue: chord.target.notes.iter().map(|p| p.cue_frequency()).collect(),
            });
        }

        self.state.score += matched;
        self.state.compact();
    }

    /// Advance the simulation by `elapsed_ms`.
    ///
    /// Moves chords, reports misses, and spawns whatever fell due. Once lives
    /// run out the session ends and nothing further spawns.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        if !self.is_running() {
            return Vec::new();
        }

        let mut events = Vec::new();
        let step = elapsed_ms as f64 / self.config.fall_duration_ms as f64;

        for chord in self.state.chords.iter_mut() {
            if chord.destroyed {
                continue;
            }
            chord.progress += step * chord.speed;
            if chord.progress < 1.0 {
                continue;
            }

            chord.destroyed = true;
            self.state.lives = self.state.lives.saturating_sub(1);
            warn!(id = %chord.id, label = %chord.target.label, lives = self.state.lives, "chord missed");
            events.push(GameEvent::Missed {
                id: chord.id,
                lives_left: self.state.lives,
            });

            if self.state.lives == 0 {
                break;
            }
        }
        self.state.compact();

        if self.state.lives == 0 {
            self.end(&mut events);
            return events;
        }

        for _ in 0..self.clock.advance(elapsed_ms) {
            events.push(self.spawn());
        }
        events
    }

    fn spawn(&mut self) -> GameEvent {
        let target = self.generator.next_target();
        let speed = 1.0 + self.state.spawn_count as f64 * self.config.speedup_per_spawn;
        let id = ChordId(self.next_id);
        self.next_id += 1;
        self.state.spawn_count += 1;

        let display = self.config.display;
        let show_degree = display.show_degrees && self.config.level.spawns_chords();
        let payload = ChordSpawn {
            id,
            label: target.label.clone(),
            notes: target.notes.clone(),
            display_degree: target
                .degree
                .filter(|_| show_degree)
                .map(|d| d.label),
            display_notes: display
                .notes_visible(self.state.score)
                .then(|| target.display_notes.clone()),
            speed,
        };

        debug!(id = %id, label = %target.label, speed, "chord spawned");
        self.state.chords.push(FallingChord {
            id,
            target,
            progress: 0.0,
            speed,
            destroyed: false,
        });
        GameEvent::Spawned(payload)
    }

    /// Silence every held key
    fn release_all(&mut self, events: &mut Vec<GameEvent>) {
        for note in self.state.held.drain() {
            debug!(midi = note.midi, "releasing held key");
            events.push(GameEvent::ToneOff { midi: note.midi });
        }
    }

    fn end(&mut self, events: &mut Vec<GameEvent>) {
        self.state.phase = Phase::Ended;
        self.state.chords.clear();
        self.release_all(events);
        self.clock.reset();
        info!(final_score = self.state.score, "session ended");
        events.push(GameEvent::SessionEnded {
            final_score: self.state.score,
        });
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("policy", &self.policy)
            .field("generator", &self.generator.name())
            .field("state", &self.state)
            .finish()
    }
}
