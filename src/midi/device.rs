// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Input device selection checks.

use tracing::debug;

use crate::error::{NebulaError, Result};

/// The ALSA loopback port; present on most Linux systems, never a keyboard
pub const THROUGH_PORT: &str = "Midi Through Port-0";

/// Accept a selected device name, rejecting a missing, blank, or loopback selection
pub fn validate_input_device(selected: Option<&str>) -> Result<&str> {
    match selected.map(str::trim) {
        Some(name) if !name.is_empty() && name != THROUGH_PORT => Ok(name),
        _ => Err(NebulaError::NoInputDevice),
    }
}

/// Pick an input from the devices a transport reports.
///
/// With a wanted name, that device must be present. Without one, the first
/// device that is not the loopback port is chosen.
pub fn select_input<'a>(available: &'a [String], wanted: Option<&str>) -> Result<&'a str> {
    let chosen = match wanted {
        Some(name) => available.iter().find(|d| d.as_str() == name),
        None => available.iter().find(|d| d.as_str() != THROUGH_PORT),
    };

    let name = chosen.ok_or(NebulaError::NoInputDevice)?;
    debug!(device = %name, "selected MIDI input");
    validate_input_device(Some(name))
}
