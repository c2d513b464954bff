// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Domain types for the dare cards prototype
//!
//! This crate contains the entities shown by the dare card list and the
//! achievements screen, together with the derived rules the screens render
//! (status colors, winner detection, result text, purity tiers).
//!
//! These types are UI-agnostic: every derived value is a plain function of
//! the record and is recomputed on each read.

pub mod achievement;
pub mod color;
pub mod dare;
pub mod purity;

// Re-export commonly used types
pub use achievement::*;
pub use color::*;
pub use dare::*;
pub use purity::*;
