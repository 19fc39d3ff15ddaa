// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI input boundary.
//!
//! The engine never talks to hardware. A transport collaborator hands
//! over raw MIDI bytes (or already-decoded note events); this module turns
//! them into [`InputEvent`]s and checks that a usable input device was
//! chosen before a session starts.

pub mod device;
pub mod input;

pub use device::{select_input, validate_input_device, THROUGH_PORT};
pub use input::{InputEvent, MidiMessage};

/// MIDI message constants
pub mod messages {
    // Channel Voice Messages (upper nibble, lower nibble is channel 0-15)
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
    pub const CONTROL_CHANGE: u8 = 0xB0;

    // System Real-Time Messages
    pub const TIMING_CLOCK: u8 = 0xF8;
    pub const ACTIVE_SENSING: u8 = 0xFE;
}
