// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Root UI configuration

use serde::{Deserialize, Serialize};

use crate::swipe::{AnimationConfig, SwipeConfig};

/// Root configuration of the `dare-cards` binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct UiConfig {
    /// Screen shown at launch
    pub screen: Screen,
    /// Identity of the local viewer; when unset, any participant winner
    /// counts as a win
    pub viewer_id: Option<String>,
    /// High contrast palette toggle
    pub high_contrast: bool,
    /// Logical pixels per terminal column, used to convert pointer columns
    /// into gesture distances
    pub pixels_per_column: f64,
    /// Log level (error/warn/info/debug/trace)
    pub log_level: Option<String>,
    pub swipe: SwipeConfig,
    pub animation: AnimationConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            viewer_id: None,
            high_contrast: false,
            pixels_per_column: 8.0,
            log_level: None,
            swipe: SwipeConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Cards,
    Achievements,
}
