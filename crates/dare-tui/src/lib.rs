// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Terminal User Interface for the dare cards prototype
//!
//! Two screens built on ratatui: the swipeable Dare Card list and the
//! Achievement List. The crate follows a view model / view split: view
//! models are headless and unit-testable, views only draw them.

pub mod cards_loop;
pub mod error;
pub mod path_picker;
pub mod terminal;
pub mod theme;
pub mod view;
pub mod view_model;

pub use cards_loop::{run_cards, ActiveScreen, CardsApp, CardsDependencies};
pub use error::GestureStateError;
pub use path_picker::{InputGate, TerminalPathPicker};
pub use theme::Theme;
pub use view::HitTestRegistry;
pub use view_model::{
    AchievementsViewModel, CardCollaborators, DareCardsViewModel, MouseAction, Msg,
    SwipeCardViewModel, SwipeController, SwipeOutcome, SwipePhase,
};

use ratatui::{backend::TestBackend, Terminal};

/// Deterministic terminal for tests and snapshot runners
pub fn create_test_terminal(width: u16, height: u16) -> std::io::Result<Terminal<TestBackend>> {
    Terminal::new(TestBackend::new(width, height))
}
