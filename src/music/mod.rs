// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory for the game engine.
//!
//! This module provides pitch classes and enharmonic spelling, the
//! fixed key/degree tables, triad construction, voice-led inversion
//! selection, and chord labels.

pub mod chord;
pub mod pitch;
pub mod scale;

pub use chord::{chord_label, closest_inversion, Inversion, Triad};
pub use pitch::{frequency, midi_to_name, normalize, MidiNote, PitchClass, SpelledNote};
pub use scale::{Degree, Key, Mode, Quality};
