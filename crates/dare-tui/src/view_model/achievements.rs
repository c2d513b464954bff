// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Achievement List screen view model

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use dare_core::{DareSource, Notifier};
use dare_domain_types::{total_reward, Achievement};
use tracing::{debug, info};

use super::{MouseAction, Msg};

pub const HEADER_TITLE: &str = "Dare Results";
pub const CLAIM_LABEL: &str = "Claim Reward";

pub struct AchievementsViewModel {
    achievements: Vec<Achievement>,
    notifier: Arc<dyn Notifier>,
    claim_hovered: bool,
    claimed: bool,
    scroll: usize,
    pub needs_redraw: bool,
    exit_requested: bool,
}

impl AchievementsViewModel {
    pub fn new(source: &dyn DareSource, notifier: Arc<dyn Notifier>) -> Self {
        let achievements = source.list_achievements();
        info!(achievements = achievements.len(), "achievements loaded");
        Self {
            achievements,
            notifier,
            claim_hovered: false,
            claimed: false,
            scroll: 0,
            needs_redraw: true,
            exit_requested: false,
        }
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn total_reward(&self) -> i64 {
        total_reward(&self.achievements)
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn is_claim_hovered(&self) -> bool {
        self.claim_hovered
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    /// Claim the reward. Only the first claim notifies; returns whether this
    /// call did.
    pub fn claim(&mut self) -> bool {
        if self.claimed {
            debug!("reward already claimed");
            return false;
        }
        self.claimed = true;
        let total = self.total_reward();
        info!(total, "claim reward pressed");
        self.notifier
            .show_message(CLAIM_LABEL, &format!("Reward claimed ({total:+} total)"));
        self.needs_redraw = true;
        true
    }

    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::PointerUp {
                target: Some(MouseAction::ClaimReward),
                ..
            } => {
                self.claim();
            }
            Msg::PointerMove { target } => {
                let hovered = target == Some(MouseAction::ClaimReward);
                if hovered != self.claim_hovered {
                    self.claim_hovered = hovered;
                    self.needs_redraw = true;
                }
            }
            Msg::ScrollUp => self.scroll_by(-1),
            Msg::ScrollDown => self.scroll_by(1),
            Msg::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.exit_requested = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => self.exit_requested = true,
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.claim();
                }
                KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
                _ => {}
            },
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let last = self.achievements.len().saturating_sub(1);
        let next = self.scroll.saturating_add_signed(delta).min(last);
        if next != self.scroll {
            self.scroll = next;
            self.needs_redraw = true;
        }
    }
}
