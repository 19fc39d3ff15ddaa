// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Timing module.
//!
//! The engine owns no clock of its own; elapsed time arrives from an
//! external tick source and is accumulated here.

pub mod spawn;

pub use spawn::SpawnClock;
