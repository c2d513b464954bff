// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Tick-driven tweens
//!
//! Nothing here reads a clock. The event loop advances every running tween
//! with the elapsed tick duration, which keeps animations deterministic in
//! tests.

use std::time::Duration;

use dare_config_types::EasingKind;
use dare_domain_types::RgbColor;

/// Maps linear progress in [0, 1] to eased progress.
pub fn ease(kind: EasingKind, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match kind {
        EasingKind::Linear => t,
        EasingKind::EaseOut => 1.0 - (1.0 - t).powi(3),
        EasingKind::EaseIn => t.powi(3),
        EasingKind::EaseInOut => {
            if t < 0.5 {
                4.0 * t.powi(3)
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

/// Values a [`Tween`] can blend between
pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for RgbColor {
    fn interpolate(self, to: Self, t: f64) -> Self {
        self.mix(to, t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: Duration,
    elapsed: Duration,
    easing: EasingKind,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration: Duration, easing: EasingKind) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Move the tween forward and return the new value.
    pub fn advance(&mut self, dt: Duration) -> T {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        self.from.interpolate(self.to, ease(self.easing, self.progress()))
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> T {
        self.to
    }
}
