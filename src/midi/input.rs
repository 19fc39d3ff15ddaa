// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Decoding raw MIDI bytes into note events for the game.

use super::messages;
use crate::music::pitch::MidiNote;

/// Parsed MIDI message types
#[derive(Debug, Clone, PartialEq)]
pub enum MidiMessage {
    /// Note On: channel (0-15), note (0-127), velocity (1-127)
    NoteOn { channel: u8, note: u8, velocity: u8 },
    /// Note Off: channel (0-15), note (0-127), velocity (0-127)
    NoteOff { channel: u8, note: u8, velocity: u8 },
    /// Control Change: channel (0-15), controller (0-127), value (0-127)
    ControlChange { channel: u8, controller: u8, value: u8 },
    /// Any other status byte, kept raw
    Unknown(Vec<u8>),
}

impl MidiMessage {
    /// Parse raw MIDI bytes into a MidiMessage
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let status = data[0];
        let msg_type = status & 0xF0;
        let channel = status & 0x0F;

        match msg_type {
            messages::NOTE_OFF if data.len() >= 3 => Some(MidiMessage::NoteOff {
                channel,
                note: data[1] & 0x7F,
                velocity: data[2] & 0x7F,
            }),
            messages::NOTE_ON if data.len() >= 3 => {
                let velocity = data[2] & 0x7F;
                // Note On with velocity 0 is equivalent to Note Off
                if velocity == 0 {
                    Some(MidiMessage::NoteOff {
                        channel,
                        note: data[1] & 0x7F,
                        velocity: 0,
                    })
                } else {
                    Some(MidiMessage::NoteOn {
                        channel,
                        note: data[1] & 0x7F,
                        velocity,
                    })
                }
            }
            messages::CONTROL_CHANGE if data.len() >= 3 => Some(MidiMessage::ControlChange {
                channel,
                controller: data[1] & 0x7F,
                value: data[2] & 0x7F,
            }),
            _ => Some(MidiMessage::Unknown(data.to_vec())),
        }
    }

    /// The note event carried by this message, if any
    pub fn to_input(&self) -> Option<InputEvent> {
        match *self {
            MidiMessage::NoteOn { note, velocity, .. } => {
                Some(InputEvent::NoteOn { note, velocity })
            }
            MidiMessage::NoteOff { note, .. } => Some(InputEvent::NoteOff { note }),
            _ => None,
        }
    }
}

/// Note events consumed by the session, channel-agnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key struck; velocity is always above zero
    NoteOn { note: MidiNote, velocity: u8 },
    /// Key released
    NoteOff { note: MidiNote },
}

impl InputEvent {
    /// Decode raw MIDI bytes; non-note messages yield `None`
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        MidiMessage::parse(data)?.to_input()
    }

    /// Build a note-on, folding velocity 0 into a note-off
    pub fn note_on(note: MidiNote, velocity: u8) -> Self {
        if velocity == 0 {
            InputEvent::NoteOff { note }
        } else {
            InputEvent::NoteOn { note, velocity }
        }
    }
}
