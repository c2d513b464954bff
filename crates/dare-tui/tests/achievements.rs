// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dare_core::{MockDareService, Notification, RecordingNotifier};
use dare_domain_types::AchievementType;
use dare_tui::{AchievementsViewModel, MouseAction, Msg};

fn screen() -> (AchievementsViewModel, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let vm = AchievementsViewModel::new(&MockDareService::new(), notifier.clone());
    (vm, notifier)
}

#[test]
fn lists_achievements_in_source_order() {
    let (vm, _) = screen();
    let titles: Vec<&str> = vm.achievements().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Won $20 Blackjack Dare",
            "Lost $5 Dice Roll",
            "Won $10 Rock Paper Scissors"
        ]
    );
    assert_eq!(vm.achievements()[1].kind, AchievementType::Loss);
    assert_eq!(vm.total_reward(), 30);
}

#[test]
fn reward_is_claimed_once() {
    let (mut vm, notifier) = screen();
    vm.update(Msg::PointerUp {
        target: Some(MouseAction::ClaimReward),
        column: 10,
        row: 30,
    });
    assert!(vm.is_claimed());
    assert_eq!(
        notifier.messages(),
        [Notification::new("Claim Reward", "Reward claimed (+30 total)")]
    );

    assert!(!vm.claim());
    vm.update(Msg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    assert_eq!(notifier.count(), 1);
}

#[test]
fn claim_button_tracks_hover() {
    let (mut vm, _) = screen();
    vm.needs_redraw = false;
    vm.update(Msg::PointerMove {
        target: Some(MouseAction::ClaimReward),
    });
    assert!(vm.is_claim_hovered());
    assert!(vm.needs_redraw);
    vm.update(Msg::PointerMove { target: None });
    assert!(!vm.is_claim_hovered());
}

#[test]
fn scrolling_stays_within_the_list() {
    let (mut vm, _) = screen();
    vm.update(Msg::ScrollUp);
    assert_eq!(vm.scroll_offset(), 0);
    for _ in 0..5 {
        vm.update(Msg::ScrollDown);
    }
    assert_eq!(vm.scroll_offset(), 2);
}
