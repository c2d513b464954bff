// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dare Card screen view model
//!
//! Owns one [`SwipeCardViewModel`] per completed dare and routes pointer
//! and keyboard input to them:
//!
//! - a press on a card surface starts a gesture on that card; drags and the
//!   release go to the same card until the gesture ends
//! - a press on an action button pulses it; the release activates it when
//!   the pointer is still over the same button
//! - ticks advance every running animation; cards whose exit animation just
//!   completed are removed from the list, each exactly once
//!
//! Pointer columns become logical pixels through `pixels_per_column`, so a
//! swipe of 13 columns at the default 8 px per column crosses the commit
//! threshold.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dare_config_types::UiConfig;
use dare_core::DareSource;
use tracing::{debug, info};

use super::action_button::ActionOutcome;
use super::dare_card::SwipeCardViewModel;
use super::swipe::SwipeOutcome;
use super::{CardCollaborators, MouseAction, Msg};
use crate::error::GestureStateError;

/// Title of the approve/decline confirmation
pub const SWIPE_NOTIFICATION_TITLE: &str = "Action";

pub struct DareCardsViewModel {
    cards: Vec<SwipeCardViewModel>,
    collaborators: CardCollaborators,
    pixels_per_column: f64,
    commit_threshold: f64,
    /// Card currently being dragged
    gesture: Option<String>,
    /// Action button held down
    pressed_button: Option<String>,
    hovered_button: Option<String>,
    selected: usize,
    scroll: usize,
    removed: Vec<String>,
    last_outcome: Option<(String, SwipeOutcome)>,
    last_action: Option<ActionOutcome>,
    pub needs_redraw: bool,
    exit_requested: bool,
}

impl DareCardsViewModel {
    pub fn new(source: &dyn DareSource, config: &UiConfig, collaborators: CardCollaborators) -> Self {
        let cards: Vec<SwipeCardViewModel> = source
            .list_completed_dares()
            .into_iter()
            .map(|dare| {
                SwipeCardViewModel::new(
                    dare,
                    config.viewer_id.clone(),
                    config.swipe.clone(),
                    &config.animation,
                )
            })
            .collect();
        info!(cards = cards.len(), source = source.description(), "dare cards loaded");

        Self {
            cards,
            collaborators,
            pixels_per_column: config.pixels_per_column,
            commit_threshold: config.swipe.commit_threshold,
            gesture: None,
            pressed_button: None,
            hovered_button: None,
            selected: 0,
            scroll: 0,
            removed: Vec::new(),
            last_outcome: None,
            last_action: None,
            needs_redraw: true,
            exit_requested: false,
        }
    }

    pub fn cards(&self) -> &[SwipeCardViewModel] {
        &self.cards
    }

    pub fn card(&self, id: &str) -> Option<&SwipeCardViewModel> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Ids of the cards removed so far, in removal order
    pub fn removed_ids(&self) -> &[String] {
        &self.removed
    }

    pub fn last_outcome(&self) -> Option<&(String, SwipeOutcome)> {
        self.last_outcome.as_ref()
    }

    pub fn last_action(&self) -> Option<&ActionOutcome> {
        self.last_action.as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.cards.get(self.selected).map(SwipeCardViewModel::id)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn pixels_per_column(&self) -> f64 {
        self.pixels_per_column
    }

    pub fn column_to_pixels(&self, column: u16) -> f64 {
        f64::from(column) * self.pixels_per_column
    }

    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(SwipeCardViewModel::is_animating)
    }

    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    /// Keep the selected card within a window of `visible` cards.
    pub fn ensure_visible(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }
        self.scroll = self.scroll.min(self.cards.len().saturating_sub(1));
    }

    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::PointerDown { target, column, .. } => self.pointer_down(target, column),
            Msg::PointerDrag { column, .. } => self.pointer_drag(column),
            Msg::PointerUp { target, .. } => self.pointer_up(target),
            Msg::PointerMove { target } => self.pointer_move(target),
            Msg::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                self.needs_redraw = true;
            }
            Msg::ScrollDown => {
                self.scroll = (self.scroll + 1).min(self.cards.len().saturating_sub(1));
                self.needs_redraw = true;
            }
            Msg::Key(key) => self.key(key),
            Msg::Tick(dt) => self.tick(dt),
        }
    }

    fn pointer_down(&mut self, target: Option<MouseAction>, column: u16) {
        if let Some(stale) = self.gesture.take() {
            debug!(dare_id = %stale, "press without release, ending previous gesture");
            self.finish_gesture(&stale);
        }

        match target {
            Some(MouseAction::Card(id)) => {
                let x = self.column_to_pixels(column);
                let Some(index) = self.index_of(&id) else {
                    return;
                };
                match self.cards[index].swipe.press(x) {
                    Ok(_) => {
                        self.selected = index;
                        self.gesture = Some(id);
                    }
                    Err(err) => debug!(dare_id = %id, error = %err, "ignoring press"),
                }
            }
            Some(MouseAction::ActionButton(id)) => {
                if let Some(index) = self.index_of(&id) {
                    self.selected = index;
                    self.cards[index].button.press();
                    self.pressed_button = Some(id);
                }
            }
            _ => {}
        }
        self.needs_redraw = true;
    }

    fn pointer_drag(&mut self, column: u16) {
        let Some(id) = self.gesture.clone() else {
            debug!(error = %GestureStateError::DragWithoutPress, "ignoring drag");
            return;
        };
        let x = self.column_to_pixels(column);
        if let Some(index) = self.index_of(&id) {
            if let Err(err) = self.cards[index].swipe.drag(x) {
                debug!(dare_id = %id, error = %err, "ignoring drag");
            }
            self.needs_redraw = true;
        }
    }

    fn pointer_up(&mut self, target: Option<MouseAction>) {
        if let Some(id) = self.gesture.take() {
            self.finish_gesture(&id);
        } else if let Some(id) = self.pressed_button.take() {
            if target == Some(MouseAction::ActionButton(id.clone())) {
                self.activate(&id);
            }
        } else {
            debug!(error = %GestureStateError::ReleaseWithoutPress, "ignoring release");
        }
        self.needs_redraw = true;
    }

    fn pointer_move(&mut self, target: Option<MouseAction>) {
        let hovered = match target {
            Some(MouseAction::ActionButton(id)) => Some(id),
            _ => None,
        };
        if hovered == self.hovered_button {
            return;
        }

        if let Some(previous) = self.hovered_button.take() {
            if let Some(index) = self.index_of(&previous) {
                self.cards[index].button.set_hovered(false);
            }
        }
        if let Some(id) = &hovered {
            if let Some(index) = self.index_of(id) {
                self.cards[index].button.set_hovered(true);
            }
        }
        self.hovered_button = hovered;
        self.needs_redraw = true;
    }

    fn key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit_requested = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.exit_requested = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.cards.len().saturating_sub(1));
            }
            KeyCode::Right | KeyCode::Char('l') => self.keyboard_swipe(1.0),
            KeyCode::Left | KeyCode::Char('h') => self.keyboard_swipe(-1.0),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id().map(str::to_string) {
                    if let Some(index) = self.index_of(&id) {
                        self.cards[index].button.press();
                    }
                    self.activate(&id);
                }
            }
            _ => return,
        }
        self.needs_redraw = true;
    }

    /// Swipe the selected card past the threshold in `direction` (+1 right,
    /// -1 left) as if dragged with the pointer.
    fn keyboard_swipe(&mut self, direction: f64) {
        if self.gesture.is_some() {
            return;
        }
        let Some(id) = self.selected_id().map(str::to_string) else {
            return;
        };
        let distance = (self.commit_threshold * 1.5).max(self.commit_threshold + 1.0);
        let Some(index) = self.index_of(&id) else {
            return;
        };
        let swipe = &mut self.cards[index].swipe;
        let dragged = swipe.press(0.0).and_then(|_| swipe.drag(direction * distance));
        match dragged {
            Ok(_) => self.finish_gesture(&id),
            Err(err) => debug!(dare_id = %id, error = %err, "ignoring keyboard swipe"),
        }
    }

    fn finish_gesture(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        match self.cards[index].swipe.release() {
            Ok(outcome) => {
                if let Some(message) = outcome.confirmation() {
                    self.collaborators
                        .notifier
                        .show_message(SWIPE_NOTIFICATION_TITLE, message);
                }
                self.last_outcome = Some((id.to_string(), outcome));
            }
            Err(err) => debug!(dare_id = %id, error = %err, "ignoring release"),
        }
    }

    fn activate(&mut self, id: &str) {
        let Some(card) = self.cards.iter_mut().find(|card| card.id() == id) else {
            return;
        };
        if card.swipe.phase().is_committed() {
            debug!(dare_id = %id, "card is leaving, action ignored");
            return;
        }
        let dare_id = card.id().to_string();
        let outcome = card.button.activate(&dare_id, &self.collaborators);
        self.last_action = Some(outcome);
    }

    fn tick(&mut self, dt: Duration) {
        let mut changed = false;
        let mut finished = Vec::new();
        for card in &mut self.cards {
            changed |= card.is_animating();
            if card.swipe.tick(dt) {
                finished.push(card.id().to_string());
            }
            card.button.tick(dt);
        }

        if !finished.is_empty() {
            self.cards.retain(|card| !card.swipe.is_removed());
            for id in finished {
                info!(dare_id = %id, remaining = self.cards.len(), "card removed");
                if self.hovered_button.as_deref() == Some(id.as_str()) {
                    self.hovered_button = None;
                }
                if self.pressed_button.as_deref() == Some(id.as_str()) {
                    self.pressed_button = None;
                }
                self.removed.push(id);
            }
            let last = self.cards.len().saturating_sub(1);
            self.selected = self.selected.min(last);
            self.scroll = self.scroll.min(last);
        }

        if changed {
            self.needs_redraw = true;
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }
}
