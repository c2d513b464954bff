// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Swipe Gesture Controller
//!
//! Turns press/drag/release pointer events on one card into a continuous
//! transform and, on release, one of three outcomes: approve (fly out to the
//! right), decline (fly out to the left) or snap back to rest.
//!
//! The drag response is a set of pure functions of the horizontal pointer
//! delta. The per-gesture snapshot is a [`GestureSession`] value created on
//! press and dropped on release; [`SwipeController`] only owns the card's
//! current transform, its effect parameters and the running release tween.
//!
//! ```text
//! Idle --press--> Dragging --release--> Approving --tween done--> Removed
//!                     |                 Declining --tween done--> Removed
//!                     +----release----> Idle (snap-back tween)
//! ```

use std::time::Duration;

use dare_config_types::{AnimationConfig, EasingKind, SwipeConfig};
use tracing::{debug, info};

use super::animation::{Interpolate, Tween};
use crate::error::GestureStateError;

/// Visual transform of a card relative to its resting slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal offset in logical pixels
    pub offset_x: f64,
    /// Degrees, positive is clockwise
    pub rotation: f64,
    /// Uniform scale on both axes
    pub scale: f64,
    pub opacity: f64,
}

impl CardTransform {
    pub const REST: CardTransform = CardTransform {
        offset_x: 0.0,
        rotation: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::REST
    }
}

impl Interpolate for CardTransform {
    fn interpolate(self, to: Self, t: f64) -> Self {
        CardTransform {
            offset_x: self.offset_x.interpolate(to.offset_x, t),
            rotation: self.rotation.interpolate(to.rotation, t),
            scale: self.scale.interpolate(to.scale, t),
            opacity: self.opacity.interpolate(to.opacity, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowParams {
    pub radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Release animation of a card: translate, rotate, scale and fade at once
pub type TransformAnimation = Tween<CardTransform>;

/// Drop shadow and inner glow parameters of a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParams {
    pub shadow: ShadowParams,
    pub glow_radius: f64,
}

impl EffectParams {
    /// Resting radii with zero shadow offset
    pub fn baseline(config: &SwipeConfig) -> Self {
        Self {
            shadow: ShadowParams {
                radius: config.base_effect_radius,
                offset_x: 0.0,
                offset_y: 0.0,
            },
            glow_radius: config.base_effect_radius,
        }
    }
}

/// Which of the two effects is applied to the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectMode {
    #[default]
    ShadowOnly,
    GlowActive,
}

/// Snapshot taken when a gesture starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub start_x: f64,
    pub base_offset_x: f64,
    pub base_rotation: f64,
    pub base_scale: f64,
}

impl GestureSession {
    pub fn begin(start_x: f64, current: &CardTransform) -> Self {
        Self {
            start_x,
            base_offset_x: current.offset_x,
            base_rotation: current.rotation,
            base_scale: current.scale,
        }
    }

    pub fn delta(&self, pointer_x: f64) -> f64 {
        pointer_x - self.start_x
    }
}

/// Quadratic rotation response, saturating at `max_rotation`.
pub fn rotation_for_delta(delta: f64, config: &SwipeConfig) -> f64 {
    let magnitude = (delta * delta / config.rotation_divisor).min(config.max_rotation.abs());
    magnitude.copysign(delta)
}

pub fn scale_factor_for_delta(delta: f64, config: &SwipeConfig) -> f64 {
    (1.0 + delta.abs() / config.scale_divisor).min(config.max_scale)
}

pub fn opacity_for_delta(delta: f64, config: &SwipeConfig) -> f64 {
    (1.0 - delta.abs() / config.opacity_divisor).max(config.min_opacity)
}

pub fn shadow_for_delta(delta: f64, config: &SwipeConfig) -> ShadowParams {
    ShadowParams {
        radius: (config.base_effect_radius + delta.abs() / config.shadow_radius_divisor)
            .min(config.max_effect_radius),
        offset_x: delta / config.shadow_offset_divisor,
        offset_y: config.shadow_offset_y,
    }
}

pub fn glow_radius_for_delta(delta: f64, config: &SwipeConfig) -> f64 {
    (config.base_effect_radius + delta.abs() / config.glow_radius_divisor)
        .min(config.max_effect_radius)
}

/// Transform and effects for one pointer-move event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFrame {
    pub transform: CardTransform,
    pub effects: EffectParams,
}

pub fn drag_frame(session: &GestureSession, pointer_x: f64, config: &SwipeConfig) -> DragFrame {
    let delta = session.delta(pointer_x);
    DragFrame {
        transform: CardTransform {
            offset_x: session.base_offset_x + delta,
            rotation: session.base_rotation + rotation_for_delta(delta, config),
            scale: session.base_scale * scale_factor_for_delta(delta, config),
            opacity: opacity_for_delta(delta, config),
        },
        effects: EffectParams {
            shadow: shadow_for_delta(delta, config),
            glow_radius: glow_radius_for_delta(delta, config),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeOutcome {
    Approve,
    Decline,
    SnapBack,
}

impl SwipeOutcome {
    /// Decide from the final offset alone; both bounds are strict.
    pub fn resolve(offset_x: f64, threshold: f64) -> Self {
        if offset_x > threshold {
            SwipeOutcome::Approve
        } else if offset_x < -threshold {
            SwipeOutcome::Decline
        } else {
            SwipeOutcome::SnapBack
        }
    }

    pub fn target(self, config: &SwipeConfig) -> CardTransform {
        match self {
            SwipeOutcome::Approve => CardTransform {
                offset_x: config.exit_offset,
                rotation: config.exit_rotation,
                scale: 1.0,
                opacity: 0.0,
            },
            SwipeOutcome::Decline => CardTransform {
                offset_x: -config.exit_offset,
                rotation: -config.exit_rotation,
                scale: 1.0,
                opacity: 0.0,
            },
            SwipeOutcome::SnapBack => CardTransform::REST,
        }
    }

    pub fn is_commit(self) -> bool {
        !matches!(self, SwipeOutcome::SnapBack)
    }

    /// Confirmation text for committed outcomes
    pub fn confirmation(self) -> Option<&'static str> {
        match self {
            SwipeOutcome::Approve => Some("Dare Approved!"),
            SwipeOutcome::Decline => Some("Dare Declined!"),
            SwipeOutcome::SnapBack => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeOutcome::Approve => "approve",
            SwipeOutcome::Decline => "decline",
            SwipeOutcome::SnapBack => "snap-back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipePhase {
    Idle,
    Dragging(GestureSession),
    Approving,
    Declining,
    Removed,
}

impl SwipePhase {
    pub fn is_committed(&self) -> bool {
        matches!(self, SwipePhase::Approving | SwipePhase::Declining | SwipePhase::Removed)
    }
}

/// Gesture state of a single card
#[derive(Debug, Clone)]
pub struct SwipeController {
    config: SwipeConfig,
    release_duration: Duration,
    release_easing: EasingKind,
    transform: CardTransform,
    effects: EffectParams,
    effect_mode: EffectMode,
    phase: SwipePhase,
    release: Option<TransformAnimation>,
}

impl SwipeController {
    pub fn new(config: SwipeConfig, animation: &AnimationConfig) -> Self {
        let effects = EffectParams::baseline(&config);
        Self {
            config,
            release_duration: Duration::from_millis(animation.release_ms),
            release_easing: animation.release_easing,
            transform: CardTransform::REST,
            effects,
            effect_mode: EffectMode::ShadowOnly,
            phase: SwipePhase::Idle,
            release: None,
        }
    }

    pub fn transform(&self) -> CardTransform {
        self.transform
    }

    pub fn effects(&self) -> EffectParams {
        self.effects
    }

    pub fn effect_mode(&self) -> EffectMode {
        self.effect_mode
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn is_animating(&self) -> bool {
        self.release.is_some()
    }

    pub fn is_removed(&self) -> bool {
        matches!(self.phase, SwipePhase::Removed)
    }

    /// Outcome the card would commit to if released now
    pub fn pending_outcome(&self) -> Option<SwipeOutcome> {
        match self.phase {
            SwipePhase::Dragging(_) => Some(SwipeOutcome::resolve(
                self.transform.offset_x,
                self.config.commit_threshold,
            )),
            _ => None,
        }
    }

    /// Start a gesture at `pointer_x`. A snap-back still in flight is
    /// cancelled and the gesture starts from its current transform.
    pub fn press(&mut self, pointer_x: f64) -> Result<GestureSession, GestureStateError> {
        if self.phase.is_committed() {
            return Err(GestureStateError::CardCommitted);
        }
        if self.release.take().is_some() {
            debug!(offset_x = self.transform.offset_x, "press cancelled snap-back");
        }

        let session = GestureSession::begin(pointer_x, &self.transform);
        self.transform.opacity = 1.0;
        self.effects = EffectParams::baseline(&self.config);
        self.phase = SwipePhase::Dragging(session);
        Ok(session)
    }

    pub fn drag(&mut self, pointer_x: f64) -> Result<DragFrame, GestureStateError> {
        let session = match self.phase {
            SwipePhase::Dragging(session) => session,
            phase if phase.is_committed() => return Err(GestureStateError::CardCommitted),
            _ => return Err(GestureStateError::DragWithoutPress),
        };

        let frame = drag_frame(&session, pointer_x, &self.config);
        self.transform = frame.transform;
        self.effects = frame.effects;
        self.effect_mode = EffectMode::GlowActive;
        Ok(frame)
    }

    /// End the gesture and start the release tween for the resolved outcome.
    pub fn release(&mut self) -> Result<SwipeOutcome, GestureStateError> {
        match self.phase {
            SwipePhase::Dragging(_) => {}
            phase if phase.is_committed() => return Err(GestureStateError::CardCommitted),
            _ => return Err(GestureStateError::ReleaseWithoutPress),
        }

        let outcome = SwipeOutcome::resolve(self.transform.offset_x, self.config.commit_threshold);
        info!(
            outcome = outcome.as_str(),
            offset_x = self.transform.offset_x,
            "swipe released"
        );

        self.phase = match outcome {
            SwipeOutcome::Approve => SwipePhase::Approving,
            SwipeOutcome::Decline => SwipePhase::Declining,
            SwipeOutcome::SnapBack => {
                self.effects = EffectParams::baseline(&self.config);
                self.effect_mode = EffectMode::ShadowOnly;
                SwipePhase::Idle
            }
        };
        self.release = Some(TransformAnimation::new(
            self.transform,
            outcome.target(&self.config),
            self.release_duration,
            self.release_easing,
        ));
        Ok(outcome)
    }

    /// Advance the release tween. Returns `true` exactly once: on the tick
    /// where a committed card's exit animation completes.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(tween) = self.release.as_mut() else {
            return false;
        };
        self.transform = tween.advance(dt);
        if !tween.is_finished() {
            return false;
        }

        self.release = None;
        match self.phase {
            SwipePhase::Approving | SwipePhase::Declining => {
                self.phase = SwipePhase::Removed;
                true
            }
            _ => false,
        }
    }
}
