// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! ViewModel Layer - UI state and interaction logic
//!
//! View models own every piece of screen state (gesture progress, running
//! animations, hover and pulse state, which cards are still in the list) and
//! react to [`Msg`] values. They never touch the terminal; views read them to
//! render, and the event loop translates crossterm events into messages.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEvent;
use dare_core::{FilePicker, Notifier, ProofUploader};

pub mod achievements;
pub mod action_button;
pub mod animation;
pub mod card_list;
pub mod dare_card;
pub mod swipe;

pub use achievements::AchievementsViewModel;
pub use action_button::{ActionButtonViewModel, ActionOutcome};
pub use animation::{Interpolate, Tween, ease};
pub use card_list::DareCardsViewModel;
pub use dare_card::SwipeCardViewModel;
pub use swipe::{
    CardTransform, DragFrame, EffectMode, EffectParams, GestureSession, ShadowParams,
    SwipeController, SwipeOutcome, SwipePhase, TransformAnimation,
};

/// Semantic targets registered by the views for hit testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseAction {
    /// Swipeable surface of the card with this dare id
    Card(String),
    /// Action button ("Post" / "Add Proof") of the card with this dare id
    ActionButton(String),
    ClaimReward,
    DismissModal,
}

/// Input to the screen view models
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    PointerDown {
        target: Option<MouseAction>,
        column: u16,
        row: u16,
    },
    PointerDrag {
        column: u16,
        row: u16,
    },
    PointerUp {
        target: Option<MouseAction>,
        column: u16,
        row: u16,
    },
    /// Pointer moved with no button held
    PointerMove {
        target: Option<MouseAction>,
    },
    ScrollUp,
    ScrollDown,
    Key(KeyEvent),
    /// Time elapsed since the previous tick
    Tick(Duration),
}

/// Host capabilities handed to the screens
#[derive(Clone)]
pub struct CardCollaborators {
    pub notifier: Arc<dyn Notifier>,
    pub file_picker: Arc<dyn FilePicker>,
    pub proof_uploader: Arc<dyn ProofUploader>,
}
