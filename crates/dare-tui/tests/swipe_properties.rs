// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::time::Duration;

use dare_config_types::{AnimationConfig, SwipeConfig};
use dare_tui::view_model::swipe::{
    glow_radius_for_delta, opacity_for_delta, rotation_for_delta, scale_factor_for_delta,
    shadow_for_delta,
};
use dare_tui::view_model::{CardTransform, EffectMode, EffectParams};
use dare_tui::{GestureStateError, SwipeController, SwipeOutcome, SwipePhase};

const EPS: f64 = 1e-9;

fn config() -> SwipeConfig {
    SwipeConfig::default()
}

fn controller() -> SwipeController {
    SwipeController::new(config(), &AnimationConfig::default())
}

fn release_at(offset: f64) -> (SwipeController, SwipeOutcome) {
    let mut card = controller();
    card.press(0.0).unwrap();
    card.drag(offset).unwrap();
    let outcome = card.release().unwrap();
    (card, outcome)
}

#[test]
fn rotation_is_quadratic_until_it_saturates() {
    let config = config();
    for delta in (-270..=270).step_by(15).map(f64::from) {
        let expected = delta * delta / 5000.0 * delta.signum();
        assert!(
            (rotation_for_delta(delta, &config) - expected).abs() < EPS,
            "delta {delta}"
        );
    }
    assert!(rotation_for_delta(273.8, &config) < 15.0);
    assert_eq!(rotation_for_delta(273.9, &config), 15.0);
    assert_eq!(rotation_for_delta(-600.0, &config), -15.0);
    assert_eq!(rotation_for_delta(0.0, &config), 0.0);
}

#[test]
fn scale_saturates_at_140() {
    let config = config();
    assert!(scale_factor_for_delta(139.0, &config) < 1.2);
    assert!((scale_factor_for_delta(140.0, &config) - 1.2).abs() < EPS);
    assert_eq!(scale_factor_for_delta(-500.0, &config), 1.2);
    assert_eq!(scale_factor_for_delta(0.0, &config), 1.0);
}

#[test]
fn opacity_floor_is_reached_at_280() {
    let config = config();
    assert!(opacity_for_delta(279.0, &config) > 0.3 + EPS);
    assert!((opacity_for_delta(280.0, &config) - 0.3).abs() < EPS);
    assert_eq!(opacity_for_delta(-1000.0, &config), 0.3);
}

#[test]
fn effect_radii_clamp_at_15() {
    let config = config();
    let shadow = shadow_for_delta(-100.0, &config);
    assert!((shadow.radius - 7.0).abs() < EPS);
    assert!((shadow.offset_x + 5.0).abs() < EPS);
    assert_eq!(shadow.offset_y, 5.0);
    assert!(shadow_for_delta(499.0, &config).radius < 15.0);
    assert_eq!(shadow_for_delta(500.0, &config).radius, 15.0);

    assert!(glow_radius_for_delta(299.0, &config) < 15.0);
    assert_eq!(glow_radius_for_delta(300.0, &config), 15.0);
    assert_eq!(glow_radius_for_delta(0.0, &config), 5.0);
}

#[test]
fn release_outcomes() {
    assert_eq!(release_at(150.0).1, SwipeOutcome::Approve);
    assert_eq!(release_at(-150.0).1, SwipeOutcome::Decline);
    assert_eq!(release_at(50.0).1, SwipeOutcome::SnapBack);
}

#[test]
fn threshold_is_strict() {
    assert_eq!(release_at(100.0).1, SwipeOutcome::SnapBack);
    assert_eq!(release_at(-100.0).1, SwipeOutcome::SnapBack);
    assert_eq!(release_at(100.5).1, SwipeOutcome::Approve);
}

#[test]
fn snap_back_returns_to_rest_with_shadow() {
    let (mut card, outcome) = release_at(50.0);
    assert_eq!(outcome, SwipeOutcome::SnapBack);
    assert_eq!(card.phase(), SwipePhase::Idle);
    assert_eq!(card.effect_mode(), EffectMode::ShadowOnly);
    assert_eq!(card.effects(), EffectParams::baseline(card.config()));

    assert!(!card.tick(Duration::from_millis(300)));
    assert_eq!(card.transform(), CardTransform::REST);
    assert!(!card.is_animating());

    // can be dragged again
    card.press(10.0).unwrap();
    assert!(card.drag(20.0).is_ok());
}

#[test]
fn approve_flies_out_and_is_removed_after_the_animation() {
    let (mut card, _) = release_at(150.0);
    assert_eq!(card.phase(), SwipePhase::Approving);
    assert!(!card.tick(Duration::from_millis(150)));
    let mid = card.transform();
    assert!(mid.offset_x > 150.0 && mid.offset_x < 400.0);
    assert!(!card.is_removed());

    assert!(card.tick(Duration::from_millis(150)));
    assert!(card.is_removed());
    assert_eq!(
        card.transform(),
        CardTransform {
            offset_x: 400.0,
            rotation: 15.0,
            scale: 1.0,
            opacity: 0.0,
        }
    );
    assert!(!card.tick(Duration::from_millis(16)));
}

#[test]
fn decline_mirrors_approve() {
    let (mut card, _) = release_at(-150.0);
    assert_eq!(card.phase(), SwipePhase::Declining);
    card.tick(Duration::from_millis(300));
    let end = card.transform();
    assert_eq!((end.offset_x, end.rotation, end.opacity), (-400.0, -15.0, 0.0));
}

#[test]
fn release_uses_accumulated_offset() {
    let mut card = controller();
    card.press(0.0).unwrap();
    card.drag(300.0).unwrap();
    card.drag(60.0).unwrap();
    assert_eq!(card.release(), Ok(SwipeOutcome::SnapBack));
}

#[test]
fn press_during_snap_back_cancels_it() {
    let (mut card, _) = release_at(80.0);
    card.tick(Duration::from_millis(100));
    let mid = card.transform();
    assert!(mid.offset_x > 0.0 && mid.offset_x < 80.0);

    let session = card.press(500.0).unwrap();
    assert!(!card.is_animating());
    assert_eq!(session.base_offset_x, mid.offset_x);
    assert_eq!(session.base_rotation, mid.rotation);
    assert_eq!(session.base_scale, mid.scale);
    assert_eq!(card.transform().opacity, 1.0);

    card.tick(Duration::from_millis(300));
    assert_eq!(card.transform().offset_x, mid.offset_x);

    card.drag(520.0).unwrap();
    assert!((card.transform().offset_x - (mid.offset_x + 20.0)).abs() < EPS);
}

#[test]
fn committed_cards_ignore_new_gestures() {
    let (mut card, _) = release_at(150.0);
    assert_eq!(card.press(0.0), Err(GestureStateError::CardCommitted));
    assert_eq!(card.drag(10.0), Err(GestureStateError::CardCommitted));
    assert_eq!(card.release(), Err(GestureStateError::CardCommitted));
    assert_eq!(card.phase(), SwipePhase::Approving);
}

#[test]
fn events_without_press_are_rejected() {
    let mut card = controller();
    assert_eq!(card.release(), Err(GestureStateError::ReleaseWithoutPress));
    assert_eq!(card.drag(40.0), Err(GestureStateError::DragWithoutPress));
    assert_eq!(card.transform(), CardTransform::REST);
}

#[test]
fn custom_threshold_and_exit() {
    let config = SwipeConfig {
        commit_threshold: 40.0,
        exit_offset: 250.0,
        ..SwipeConfig::default()
    };
    let mut card = SwipeController::new(config, &AnimationConfig::default());
    card.press(0.0).unwrap();
    card.drag(-45.0).unwrap();
    assert_eq!(card.release(), Ok(SwipeOutcome::Decline));
    card.tick(Duration::from_millis(300));
    assert_eq!(card.transform().offset_x, -250.0);
}
