// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session configuration.
//!
//! This module provides the YAML-backed settings chosen before a game
//! starts (key, mode, level, display options, input device, pacing) and
//! their validation into a ready-to-run form.

pub mod level;

pub use level::Level;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{self, NebulaError};
use crate::midi::device;
use crate::music::scale::{Key, Mode};

/// Settings for one game session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Tonic spelling (e.g., "C", "F#", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    /// Scale mode
    #[serde(default)]
    pub mode: Mode,
    /// Difficulty level (1-5)
    #[serde(default = "default_level")]
    pub level: u8,
    /// Show note names on spawned targets
    #[serde(default = "default_true")]
    pub show_notes: bool,
    /// Show roman-numeral degrees on spawned targets
    #[serde(default)]
    pub show_degrees: bool,
    /// Note names are hidden once the score exceeds this (null disables)
    #[serde(default = "default_hide_notes_above_score")]
    pub hide_notes_above_score: Option<u32>,
    /// Selected MIDI input device name
    #[serde(default)]
    pub input_device: Option<String>,
    /// Starting lives
    #[serde(default = "default_lives")]
    pub lives: u32,
    /// Time between spawns
    #[serde(default = "default_spawn_interval_ms")]
    pub spawn_interval_ms: u64,
    /// Time for a speed-1.0 target to fall to the bottom boundary
    #[serde(default = "default_fall_duration_ms")]
    pub fall_duration_ms: u64,
    /// Speed increase per spawned target
    #[serde(default = "default_speedup_per_spawn")]
    pub speedup_per_spawn: f64,
    /// RNG seed for random note selection (entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_level() -> u8 {
    Level::DEFAULT.number()
}
fn default_true() -> bool {
    true
}
fn default_hide_notes_above_score() -> Option<u32> {
    Some(5)
}
fn default_lives() -> u32 {
    3
}
fn default_spawn_interval_ms() -> u64 {
    3000
}
fn default_fall_duration_ms() -> u64 {
    12_000
}
fn default_speedup_per_spawn() -> f64 {
    0.01
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            mode: Mode::default(),
            level: default_level(),
            show_notes: true,
            show_degrees: false,
            hide_notes_above_score: default_hide_notes_above_score(),
            input_device: None,
            lives: default_lives(),
            spawn_interval_ms: default_spawn_interval_ms(),
            fall_duration_ms: default_fall_duration_ms(),
            speedup_per_spawn: default_speedup_per_spawn(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Load a session configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a session configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check the settings and resolve the key and level.
    ///
    /// An out-of-range level falls back to [`Level::DEFAULT`]; everything
    /// else that is wrong is an error and the session must not start.
    pub fn validate(&self) -> error::Result<ValidatedConfig> {
        let key = Key::new(&self.key, self.mode)?;

        let level = Level::from_number(self.level).unwrap_or_else(|| {
            warn!(level = self.level, fallback = %Level::DEFAULT, "level out of range");
            Level::DEFAULT
        });

        let input_device = device::validate_input_device(self.input_device.as_deref())?;

        if self.lives == 0 {
            return Err(NebulaError::InvalidConfig("lives must be at least 1".into()));
        }
        if self.spawn_interval_ms == 0 {
            return Err(NebulaError::InvalidConfig("spawn_interval_ms must be positive".into()));
        }
        if self.fall_duration_ms == 0 {
            return Err(NebulaError::InvalidConfig("fall_duration_ms must be positive".into()));
        }
        if !self.speedup_per_spawn.is_finite() || self.speedup_per_spawn < 0.0 {
            return Err(NebulaError::InvalidConfig(
                "speedup_per_spawn must be a non-negative number".into(),
            ));
        }

        Ok(ValidatedConfig {
            key,
            level,
            display: DisplayRules {
                show_notes: self.show_notes,
                show_degrees: self.show_degrees,
                hide_notes_above_score: self.hide_notes_above_score,
            },
            input_device: input_device.to_string(),
            lives: self.lives,
            spawn_interval_ms: self.spawn_interval_ms,
            fall_duration_ms: self.fall_duration_ms,
            speedup_per_spawn: self.speedup_per_spawn,
            seed: self.seed,
        })
    }
}

/// Which labels accompany a spawned target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRules {
    pub show_notes: bool,
    pub show_degrees: bool,
    pub hide_notes_above_score: Option<u32>,
}

impl DisplayRules {
    /// Whether note names are shown at the given score
    pub fn notes_visible(&self, score: u32) -> bool {
        self.show_notes && self.hide_notes_above_score.map_or(true, |limit| score <= limit)
    }
}

/// Configuration that passed validation.
///
/// Fields are read-only outside the crate; [`SessionConfig::validate`] is
/// the only constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub(crate) key: Key,
    pub(crate) level: Level,
    pub(crate) display: DisplayRules,
    pub(crate) input_device: String,
    pub(crate) lives: u32,
    pub(crate) spawn_interval_ms: u64,
    pub(crate) fall_duration_ms: u64,
    pub(crate) speedup_per_spawn: f64,
    pub(crate) seed: Option<u64>,
}

impl ValidatedConfig {
    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn display(&self) -> DisplayRules {
        self.display
    }

    /// Selected input device; never blank or the loopback port
    pub fn input_device(&self) -> &str {
        &self.input_device
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn spawn_interval_ms(&self) -> u64 {
        self.spawn_interval_ms
    }

    /// Always positive
    pub fn fall_duration_ms(&self) -> u64 {
        self.fall_duration_ms
    }

    pub fn speedup_per_spawn(&self) -> f64 {
        self.speedup_per_spawn
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_device() -> SessionConfig {
        SessionConfig {
            input_device: Some("USB Keyboard".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_session_config() {
        let yaml = r#"
key: "Bb"
mode: minor
level: 5
show_notes: false
show_degrees: true
input_device: "Digital Piano"
lives: 5
seed: 42
"#;

        let config = SessionConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.key, "Bb");
        assert_eq!(config.mode, Mode::Minor);
        assert_eq!(config.level, 5);
        assert!(!config.show_notes);
        assert!(config.show_degrees);
        assert_eq!(config.input_device, Some("Digital Piano".to_string()));
        assert_eq!(config.lives, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_default_values() {
        let config = SessionConfig::from_yaml("input_device: \"Keys\"\n").unwrap();
        assert_eq!(config.key, "C");
        assert_eq!(config.mode, Mode::Major);
        assert_eq!(config.level, 4);
        assert!(config.show_notes);
        assert!(!config.show_degrees);
        assert_eq!(config.hide_notes_above_score, Some(5));
        assert_eq!(config.lives, 3);
        assert_eq!(config.spawn_interval_ms, 3000);
        assert_eq!(config.fall_duration_ms, 12_000);
    }

    #[test]
    fn test_null_disables_note_hiding() {
        let config = SessionConfig::from_yaml("hide_notes_above_score: null\n").unwrap();
        assert_eq!(config.hide_notes_above_score, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        let config = SessionConfig {
            key: "E".to_string(),
            mode: Mode::Minor,
            level: 3,
            ..with_device()
        };
        config.save(&path).unwrap();

        let loaded = SessionConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SessionConfig::load("/nonexistent/session.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_validate() {
        let validated = with_device().validate().unwrap();
        assert_eq!(validated.key.tonic(), "C");
        assert_eq!(validated.level, Level::AscendingChord);
        assert_eq!(validated.input_device, "USB Keyboard");
    }

    #[test]
    fn test_validate_unknown_key() {
        let config = SessionConfig {
            key: "G#".to_string(),
            mode: Mode::Major,
            ..with_device()
        };
        assert!(matches!(
            config.validate(),
            Err(NebulaError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_validate_level_fallback() {
        let config = SessionConfig {
            level: 9,
            ..with_device()
        };
        assert_eq!(config.validate().unwrap().level, Level::AscendingChord);
    }

    #[test]
    fn test_validate_requires_input_device() {
        assert_eq!(
            SessionConfig::default().validate(),
            Err(NebulaError::NoInputDevice)
        );
    }

    #[test]
    fn test_validate_rejects_zero_pacing() {
        let config = SessionConfig {
            spawn_interval_ms: 0,
            ..with_device()
        };
        assert!(matches!(config.validate(), Err(NebulaError::InvalidConfig(_))));

        let config = SessionConfig {
            lives: 0,
            ..with_device()
        };
        assert!(matches!(config.validate(), Err(NebulaError::InvalidConfig(_))));

        let config = SessionConfig {
            fall_duration_ms: 0,
            ..with_device()
        };
        assert!(matches!(config.validate(), Err(NebulaError::InvalidConfig(_))));
    }

    #[test]
    fn test_validated_config_accessors() {
        let config = SessionConfig {
            key: "Eb".to_string(),
            level: 2,
            input_device: Some("  Stage Piano ".to_string()),
            seed: Some(9),
            ..Default::default()
        };
        let validated = config.validate().unwrap();
        assert_eq!(validated.key().tonic(), "Eb");
        assert_eq!(validated.level(), Level::RandomNote);
        assert_eq!(validated.input_device(), "Stage Piano");
        assert_eq!(validated.lives(), 3);
        assert_eq!(validated.spawn_interval_ms(), 3000);
        assert_eq!(validated.fall_duration_ms(), 12_000);
        assert_eq!(validated.speedup_per_spawn(), 0.01);
        assert_eq!(validated.seed(), Some(9));
        assert!(validated.display().notes_visible(0));
    }

    #[test]
    fn test_notes_visible() {
        let rules = DisplayRules {
            show_notes: true,
            show_degrees: false,
            hide_notes_above_score: Some(5),
        };
        assert!(rules.notes_visible(0));
        assert!(rules.notes_visible(5));
        assert!(!rules.notes_visible(6));

        let always = DisplayRules {
            hide_notes_above_score: None,
            ..rules
        };
        assert!(always.notes_visible(100));

        let never = DisplayRules {
            show_notes: false,
            ..rules
        };
        assert!(!never.notes_visible(0));
    }
}
