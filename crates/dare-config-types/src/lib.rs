// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Strongly-typed configuration structs for the dare cards UI.
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! yields the stock gesture tuning. Files only need to name the keys they
//! override.

pub mod loader;
pub mod swipe;
pub mod ui;

pub use loader::{ConfigError, from_toml_str, load_from_file, schema_json};
pub use swipe::{AnimationConfig, EasingKind, SwipeConfig};
pub use ui::{Screen, UiConfig};
