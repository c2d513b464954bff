// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Contextual card button: "Post" for a win, "Add Proof" for a loss

use std::time::Duration;

use dare_config_types::{AnimationConfig, EasingKind};
use dare_core::ProofReceipt;
use dare_domain_types::{palette, DareAction, RgbColor};
use tracing::{info, warn};

use super::animation::Tween;
use super::CardCollaborators;

/// What an activation ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Posted,
    ProofAttached(ProofReceipt),
    ProofCancelled,
    ProofRejected(String),
}

#[derive(Debug, Clone)]
pub struct ActionButtonViewModel {
    action: DareAction,
    base_color: RgbColor,
    hover_duration: Duration,
    hover_scale: f64,
    pulse_cycle: Duration,
    pulse_cycles: u32,
    hovered: bool,
    scale: f64,
    hover_tween: Option<Tween<f64>>,
    /// Time since the current pulse started
    pulse_elapsed: Option<Duration>,
    proof: Option<ProofReceipt>,
}

impl ActionButtonViewModel {
    pub fn new(action: DareAction, base_color: RgbColor, animation: &AnimationConfig) -> Self {
        Self {
            action,
            base_color,
            hover_duration: Duration::from_millis(animation.hover_ms),
            hover_scale: animation.hover_scale,
            pulse_cycle: Duration::from_millis(animation.pulse_ms),
            pulse_cycles: animation.pulse_cycles,
            hovered: false,
            scale: 1.0,
            hover_tween: None,
            pulse_elapsed: None,
            proof: None,
        }
    }

    pub fn action(&self) -> DareAction {
        self.action
    }

    pub fn label(&self) -> &'static str {
        self.action.label()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse_elapsed.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.hover_tween.is_some() || self.pulse_elapsed.is_some()
    }

    pub fn proof(&self) -> Option<&ProofReceipt> {
        self.proof.as_ref()
    }

    /// Background color: the result color, flashing through white while a
    /// pulse runs.
    pub fn color(&self) -> RgbColor {
        let Some(elapsed) = self.pulse_elapsed else {
            return self.base_color;
        };
        if self.pulse_cycle.is_zero() {
            return self.base_color;
        }
        let cycle = self.pulse_cycle.as_secs_f64();
        let phase = (elapsed.as_secs_f64() % cycle) / cycle;
        if phase < 0.5 {
            self.base_color.mix(palette::WHITE, phase * 2.0)
        } else {
            palette::WHITE.mix(self.base_color, (phase - 0.5) * 2.0)
        }
    }

    /// Pointer entered or left the button; returns whether anything changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        let target = if hovered { self.hover_scale } else { 1.0 };
        self.hover_tween = Some(Tween::new(
            self.scale,
            target,
            self.hover_duration,
            EasingKind::Linear,
        ));
        true
    }

    /// Start (or restart) the press pulse.
    pub fn press(&mut self) {
        self.pulse_elapsed = Some(Duration::ZERO);
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(tween) = self.hover_tween.as_mut() {
            self.scale = tween.advance(dt);
            if tween.is_finished() {
                self.hover_tween = None;
            }
        }

        if let Some(elapsed) = self.pulse_elapsed {
            let elapsed = elapsed + dt;
            let total = self.pulse_cycle * self.pulse_cycles;
            self.pulse_elapsed = (elapsed < total).then_some(elapsed);
        }
    }

    /// Run the button's action for `dare_id`.
    pub fn activate(&mut self, dare_id: &str, collaborators: &CardCollaborators) -> ActionOutcome {
        match self.action {
            DareAction::Post => {
                info!(dare_id, "posting win");
                collaborators
                    .notifier
                    .show_message("Post Action", "Posting your win!");
                ActionOutcome::Posted
            }
            DareAction::AddProof => {
                let Some(path) = collaborators.file_picker.pick_file("Add Proof") else {
                    info!(dare_id, "proof selection cancelled");
                    return ActionOutcome::ProofCancelled;
                };
                match collaborators.proof_uploader.upload(dare_id, &path) {
                    Ok(receipt) => {
                        collaborators.notifier.show_message(
                            "Add Proof",
                            &format!("Attached {}", receipt.file_name),
                        );
                        self.proof = Some(receipt.clone());
                        ActionOutcome::ProofAttached(receipt)
                    }
                    Err(err) => {
                        warn!(dare_id, error = %err, "proof rejected");
                        let message = err.to_string();
                        collaborators.notifier.show_message("Add Proof", &message);
                        ActionOutcome::ProofRejected(message)
                    }
                }
            }
        }
    }
}
