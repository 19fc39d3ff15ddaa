// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scripted sessions.
//!
//! A script is a YAML list of steps replayed against a [`Session`] in order,
//! standing in for the tick source and the input device:
//!
//! ```yaml
//! steps:
//!   - advance: 3000
//!   - note_on: { note: 60, velocity: 100 }
//!   - note_off: 60
//!   - midi: [0x90, 64, 90]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::midi::InputEvent;
use crate::session::{GameEvent, Session};

/// Key struck in a script step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteOnStep {
    pub note: u8,
    #[serde(default = "default_velocity")]
    pub velocity: u8,
}

fn default_velocity() -> u8 {
    100
}

/// One script line; exactly one field must be set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_on: Option<NoteOnStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_off: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi: Option<Vec<u8>>,
}

/// What a step asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Advance(u64),
    Input(InputEvent),
    Midi(Vec<u8>),
}

impl Step {
    /// Resolve the step to its single action
    pub fn action(&self) -> Result<Action> {
        let mut actions = Vec::with_capacity(1);
        if let Some(ms) = self.advance {
            actions.push(Action::Advance(ms));
        }
        if let Some(on) = self.note_on {
            actions.push(Action::Input(InputEvent::note_on(on.note, on.velocity)));
        }
        if let Some(note) = self.note_off {
            actions.push(Action::Input(InputEvent::NoteOff { note }));
        }
        if let Some(bytes) = &self.midi {
            actions.push(Action::Midi(bytes.clone()));
        }

        match actions.len() {
            1 => Ok(actions.remove(0)),
            0 => bail!("Empty script step"),
            n => bail!("Script step sets {} actions, expected one", n),
        }
    }
}

/// An ordered list of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Load a script from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read script file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a script from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML script")
    }

    /// Replay every step against `session`, collecting the events.
    ///
    /// Steps after the session ends still run; the session ignores them.
    pub fn run(&self, session: &mut Session) -> Result<Vec<GameEvent>> {
        let mut events = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            let action = step
                .action()
                .with_context(|| format!("Invalid script step {}", index + 1))?;
            debug!(step = index + 1, ?action, "replaying step");
            events.extend(match action {
                Action::Advance(ms) => session.advance(ms),
                Action::Input(event) => session.handle(event),
                Action::Midi(bytes) => session.handle_midi(&bytes),
            });
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    fn session(level: u8) -> Session {
        let config = SessionConfig {
            level,
            input_device: Some("Script".to_string()),
            ..Default::default()
        };
        Session::start(&config).unwrap()
    }

    #[test]
    fn test_parse_script() {
        let yaml = r#"
steps:
  - advance: 3000
  - note_on: { note: 60, velocity: 90 }
  - note_on: { note: 64 }
  - note_off: 60
  - midi: [0x90, 67, 100]
"#;
        let script = Script::from_yaml(yaml).unwrap();
        let actions: Vec<Action> = script.steps.iter().map(|s| s.action().unwrap()).collect();
        assert_eq!(
            actions,
            vec![
                Action::Advance(3000),
                Action::Input(InputEvent::NoteOn {
                    note: 60,
                    velocity: 90
                }),
                Action::Input(InputEvent::NoteOn {
                    note: 64,
                    velocity: 100
                }),
                Action::Input(InputEvent::NoteOff { note: 60 }),
                Action::Midi(vec![0x90, 67, 100]),
            ]
        );
    }

    #[test]
    fn test_step_needs_one_action() {
        assert!(Step::default().action().is_err());
        let both = Step {
            advance: Some(10),
            note_off: Some(60),
            ..Default::default()
        };
        assert!(both.action().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Script::from_yaml("steps:\n  - wait: 10\n").is_err());
    }

    #[test]
    fn test_run_scores_a_chord() {
        let yaml = r#"
steps:
  - advance: 3000
  - note_on: { note: 60 }
  - note_on: { note: 64 }
  - midi: [0x90, 67, 100]
"#;
        let script = Script::from_yaml(yaml).unwrap();
        let mut s = session(4);
        let events = script.run(&mut s).unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::Matched { label, .. } if label == "C")));
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_run_reports_bad_step() {
        let script = Script {
            steps: vec![Step::default()],
        };
        let err = script.run(&mut session(4)).unwrap_err();
        assert!(err.to_string().contains("Invalid script step 1"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.yaml");
        fs::write(&path, "steps:\n  - advance: 500\n").unwrap();
        let script = Script::load(&path).unwrap();
        assert_eq!(script.steps.len(), 1);
        assert!(Script::load(dir.path().join("missing.yaml")).is_err());
    }
}
