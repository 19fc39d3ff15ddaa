// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord Nebula - ear-training chord game engine.
//!
//! Falling targets are drawn from fixed chord progressions in a chosen key,
//! voiced for smooth voice leading, and matched against the keys held on a
//! MIDI keyboard. The engine is deterministic and I/O-free: it consumes note
//! events and elapsed-time ticks and produces [`session::GameEvent`]s.

pub mod config;
pub mod error;
pub mod generators;
pub mod matching;
pub mod midi;
pub mod music;
pub mod replay;
pub mod session;
pub mod timing;

pub use config::{Level, SessionConfig};
pub use error::{NebulaError, Result};
pub use midi::InputEvent;
pub use session::{ChordId, GameEvent, Session};
