// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dare (wager) records and the rules derived from them
//!
//! Nothing here is cached: the card list asks for `status_color`, `result`
//! and friends on every render, so upstream data may change between frames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::color::{palette, RgbColor};

/// Number of participant avatars a card shows
pub const MAX_DISPLAYED_PARTICIPANTS: usize = 3;

/// Recoverable problems found while deriving display state from a dare.
///
/// None of these reach the viewer: callers fall back to a neutral value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DareError {
    #[error("unrecognized dare status '{0}'")]
    InvalidStatus(String),
    #[error("winner '{winner_id}' is not a participant of dare '{dare_id}'")]
    MissingWinner { dare_id: String, winner_id: String },
}

/// Lifecycle status of a dare
///
/// Unknown strings are kept verbatim in `Other` so they survive a
/// serialize/deserialize cycle; they render with the neutral color.
/// Build statuses from strings with [`DareStatus::parse_lenient`]; an
/// `Other` holding a known status name is still colored as that status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DareStatus {
    Open,
    Active,
    Completed,
    Cancelled,
    Other(String),
}

impl DareStatus {
    /// Accept any status string, mapping unknown values to `Other`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: DareError| {
            debug!(status = value, error = %err, "falling back to neutral dare status");
            DareStatus::Other(value.to_string())
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            DareStatus::Open => "open",
            DareStatus::Active => "active",
            DareStatus::Completed => "completed",
            DareStatus::Cancelled => "cancelled",
            DareStatus::Other(raw) => raw,
        }
    }

    pub fn color(&self) -> RgbColor {
        match self {
            DareStatus::Open => palette::STATUS_OPEN,
            DareStatus::Active => palette::STATUS_ACTIVE,
            DareStatus::Completed => palette::STATUS_COMPLETED,
            DareStatus::Cancelled => palette::STATUS_CANCELLED,
            DareStatus::Other(raw) => match raw.parse::<DareStatus>() {
                Ok(known) => known.color(),
                Err(_) => palette::NEUTRAL,
            },
        }
    }
}

impl std::str::FromStr for DareStatus {
    type Err = DareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(DareStatus::Open),
            "active" => Ok(DareStatus::Active),
            "completed" => Ok(DareStatus::Completed),
            "cancelled" => Ok(DareStatus::Cancelled),
            _ => Err(DareError::InvalidStatus(s.to_string())),
        }
    }
}

impl From<String> for DareStatus {
    fn from(value: String) -> Self {
        DareStatus::parse_lenient(&value)
    }
}

impl From<DareStatus> for String {
    fn from(status: DareStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for DareStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color for an arbitrary status string; unknown values get the neutral gray.
pub fn status_color_for(status: &str) -> RgbColor {
    DareStatus::parse_lenient(status).color()
}

/// Outcome of a finished dare from the card's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DareResult {
    Won,
    Lost,
}

impl DareResult {
    pub fn text(self) -> &'static str {
        match self {
            DareResult::Won => "You Won",
            DareResult::Lost => "You Lost",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            DareResult::Won => "Won",
            DareResult::Lost => "Lost",
        }
    }

    pub fn color(self) -> RgbColor {
        match self {
            DareResult::Won => palette::ACCENT_POSITIVE,
            DareResult::Lost => palette::ACCENT_NEGATIVE,
        }
    }

    pub fn action(self) -> DareAction {
        match self {
            DareResult::Won => DareAction::Post,
            DareResult::Lost => DareAction::AddProof,
        }
    }
}

/// Contextual action offered on a completed dare card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DareAction {
    /// Share the win
    Post,
    /// Attach proof for a lost dare
    AddProof,
}

impl DareAction {
    pub fn label(self) -> &'static str {
        match self {
            DareAction::Post => "Post",
            DareAction::AddProof => "Add Proof",
        }
    }
}

/// Wager record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dare {
    pub id: String,
    pub title: String,
    pub creator_id: String,
    pub status: DareStatus,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    pub entry_stake: u32,
    #[serde(default)]
    pub winner_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Dare {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        creator_id: impl Into<String>,
        status: DareStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            creator_id: creator_id.into(),
            status,
            participants: Vec::new(),
            deadline: None,
            entry_stake: 0,
            winner_id: None,
            created_at: None,
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stake(mut self, entry_stake: u32) -> Self {
        self.entry_stake = entry_stake;
        self
    }

    pub fn with_winner(mut self, winner_id: impl Into<String>) -> Self {
        self.winner_id = Some(winner_id.into());
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// True iff a deadline is set and lies strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| deadline < now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn status_color(&self) -> RgbColor {
        self.status.color()
    }

    /// Uppercase status text shown on the card
    pub fn status_label(&self) -> String {
        self.status.as_str().to_uppercase()
    }

    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    /// The winner, validated against the participant list.
    ///
    /// `Ok(None)` when no winner is recorded, `Err(MissingWinner)` when the
    /// recorded winner did not take part.
    pub fn winner(&self) -> Result<Option<&str>, DareError> {
        match self.winner_id.as_deref() {
            None => Ok(None),
            Some(winner) if self.is_participant(winner) => Ok(Some(winner)),
            Some(winner) => Err(DareError::MissingWinner {
                dare_id: self.id.clone(),
                winner_id: winner.to_string(),
            }),
        }
    }

    /// A winner is recorded and is one of the participants.
    pub fn is_winner(&self) -> bool {
        match self.winner() {
            Ok(winner) => winner.is_some(),
            Err(err) => {
                debug!(dare_id = %self.id, error = %err, "treating dare as lost");
                false
            }
        }
    }

    /// `viewer` participated and is the recorded winner.
    pub fn is_winner_for(&self, viewer: &str) -> bool {
        matches!(self.winner(), Ok(Some(winner)) if winner == viewer)
    }

    /// Result for an optional viewer; without a viewer the membership rule
    /// of [`Dare::is_winner`] applies.
    pub fn result_for(&self, viewer: Option<&str>) -> DareResult {
        let won = match viewer {
            Some(viewer) => self.is_winner_for(viewer),
            None => self.is_winner(),
        };
        if won {
            DareResult::Won
        } else {
            DareResult::Lost
        }
    }

    pub fn result(&self) -> DareResult {
        self.result_for(None)
    }

    pub fn result_text(&self) -> &'static str {
        self.result().text()
    }

    pub fn result_color(&self) -> RgbColor {
        self.result().color()
    }

    pub fn action_label(&self) -> &'static str {
        self.result().action().label()
    }

    pub fn displayed_participants(&self) -> &[String] {
        let shown = self.participants.len().min(MAX_DISPLAYED_PARTICIPANTS);
        &self.participants[..shown]
    }
}
