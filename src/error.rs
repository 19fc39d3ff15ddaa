// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the game engine.

use thiserror::Error;

use crate::music::scale::Mode;

/// Errors raised by the music engine and session controller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NebulaError {
    #[error("Unsupported key {key} {mode}")]
    UnknownKey { key: String, mode: Mode },

    #[error("Unknown scale degree {degree} in {mode}")]
    UnknownDegree { degree: String, mode: Mode },

    #[error("Unrecognized note name: {0}")]
    UnknownNote(String),

    #[error("Please select a valid MIDI input device")]
    NoInputDevice,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NebulaError>;
