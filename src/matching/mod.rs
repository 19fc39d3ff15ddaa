// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord matching against the player's held keys.

pub mod held;
pub mod policy;

pub use held::{HeldNotes, PlayedNote};
pub use policy::MatchPolicy;
