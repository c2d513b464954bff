// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Gesture and animation tuning

use serde::{Deserialize, Serialize};

/// Coefficients of the swipe drag response and the release decision.
///
/// Distances are logical pixels, angles are degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct SwipeConfig {
    /// Release offset that must be exceeded (strictly) to commit
    pub commit_threshold: f64,
    /// Horizontal offset a committed card flies out to
    pub exit_offset: f64,
    /// Rotation a committed card ends at
    pub exit_rotation: f64,
    /// Rotation saturates at +/- this angle while dragging
    pub max_rotation: f64,
    /// rotation = delta^2 / rotation_divisor
    pub rotation_divisor: f64,
    /// scale = 1 + |delta| / scale_divisor
    pub scale_divisor: f64,
    pub max_scale: f64,
    /// opacity = 1 - |delta| / opacity_divisor
    pub opacity_divisor: f64,
    pub min_opacity: f64,
    /// Shadow and glow radius at rest
    pub base_effect_radius: f64,
    pub max_effect_radius: f64,
    pub shadow_radius_divisor: f64,
    /// Shadow x offset = delta / shadow_offset_divisor
    pub shadow_offset_divisor: f64,
    /// Shadow y offset while dragging
    pub shadow_offset_y: f64,
    pub glow_radius_divisor: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 100.0,
            exit_offset: 400.0,
            exit_rotation: 15.0,
            max_rotation: 15.0,
            rotation_divisor: 5000.0,
            scale_divisor: 700.0,
            max_scale: 1.2,
            opacity_divisor: 400.0,
            min_opacity: 0.3,
            base_effect_radius: 5.0,
            max_effect_radius: 15.0,
            shadow_radius_divisor: 50.0,
            shadow_offset_divisor: 20.0,
            shadow_offset_y: 5.0,
            glow_radius_divisor: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    Linear,
    #[default]
    EaseOut,
    EaseIn,
    EaseInOut,
}

/// Durations of the card and button animations, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnimationConfig {
    /// Release animation (approve, decline and snap-back)
    pub release_ms: u64,
    pub release_easing: EasingKind,
    /// Action button hover scale transition
    pub hover_ms: u64,
    pub hover_scale: f64,
    /// One pulse cycle of the action button on press
    pub pulse_ms: u64,
    pub pulse_cycles: u32,
    /// Event loop tick interval
    pub tick_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            release_ms: 300,
            release_easing: EasingKind::EaseOut,
            hover_ms: 200,
            hover_scale: 1.1,
            pulse_ms: 300,
            pulse_cycles: 2,
            tick_ms: 16,
        }
    }
}
