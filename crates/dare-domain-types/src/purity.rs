// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Purity scoring for dare cards
//!
//! A weighted score over difficulty, engagement, stake, duration, opponent
//! strength and proof level. The score picks the card gradient and the stone
//! reward paid out for the dare.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::color::RgbColor;
use crate::dare::Dare;

const DEFAULT_DIFFICULTY: f64 = 5.0;
const DEFAULT_OPPONENT_STRENGTH: f64 = 3.0;
const DEFAULT_PUBLIC_VERIFICATION: f64 = 1.0;

const HIGH_PURITY: f64 = 7.5;
const MEDIUM_PURITY: f64 = 4.0;

/// Raw inputs to the purity formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurityInputs {
    pub difficulty: f64,
    pub likes: u32,
    pub comments: u32,
    pub wager_value: f64,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub opponent_strength: f64,
    pub public_verification: f64,
}

impl PurityInputs {
    /// Inputs for a dare with no engagement data yet.
    pub fn from_dare(dare: &Dare) -> Self {
        let wager_value = if dare.entry_stake > 0 { dare.entry_stake as f64 } else { 1.0 };
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            likes: 0,
            comments: 0,
            wager_value,
            start: dare.created_at,
            end: dare.deadline,
            opponent_strength: DEFAULT_OPPONENT_STRENGTH,
            public_verification: DEFAULT_PUBLIC_VERIFICATION,
        }
    }

    /// Whole days between start and end, rounded up. Zero if either is missing.
    pub fn duration_days(&self) -> i64 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                let seconds = (end - start).num_seconds().abs();
                (seconds + 86_399) / 86_400
            }
            _ => 0,
        }
    }

    pub fn engagement_score(&self) -> f64 {
        (self.likes as f64 / 10.0 + self.comments as f64 / 5.0).min(10.0)
    }

    pub fn time_commitment_score(&self) -> f64 {
        match self.duration_days() {
            days if days > 90 => 5.0,
            days if days >= 30 => 3.0,
            _ => 1.0,
        }
    }

    pub fn score(&self) -> f64 {
        let wager = self.wager_value.clamp(1.0, 5.0);
        let opponent = self.opponent_strength.clamp(1.0, 5.0);
        let verification = self.public_verification.clamp(0.0, 3.0);

        self.difficulty * 0.3
            + self.engagement_score() * 0.3
            + wager * 0.2
            + self.time_commitment_score() * 0.1
            + opponent * 0.05
            + verification * 0.05
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum PurityTier {
    RedOrange,
    BlueGray,
    PurpleBlue,
}

impl PurityTier {
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_PURITY {
            PurityTier::RedOrange
        } else if score >= MEDIUM_PURITY {
            PurityTier::BlueGray
        } else {
            PurityTier::PurpleBlue
        }
    }

    /// Top-to-bottom gradient stops for the card background
    pub fn gradient(self) -> [RgbColor; 3] {
        match self {
            PurityTier::RedOrange => [
                RgbColor::new(0xFF, 0x6B, 0x6B),
                RgbColor::new(0xD6, 0x30, 0x31),
                RgbColor::new(0xA2, 0x0F, 0x0F),
            ],
            PurityTier::BlueGray => [
                RgbColor::new(0x74, 0xB9, 0xFF),
                RgbColor::new(0x29, 0x80, 0xB9),
                RgbColor::new(0x2C, 0x3E, 0x50),
            ],
            PurityTier::PurpleBlue => [
                RgbColor::new(0xA2, 0x9B, 0xFE),
                RgbColor::new(0x6A, 0x5A, 0xCD),
                RgbColor::new(0x48, 0x3D, 0x8B),
            ],
        }
    }

    pub fn stone_reward(self) -> StoneReward {
        match self {
            PurityTier::RedOrange => StoneReward { kind: StoneKind::Diamond, amount: 1 },
            PurityTier::BlueGray => StoneReward { kind: StoneKind::Sapphire, amount: 3 },
            PurityTier::PurpleBlue => StoneReward { kind: StoneKind::Quartz, amount: 5 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneKind {
    Diamond,
    Sapphire,
    Quartz,
}

impl std::fmt::Display for StoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoneKind::Diamond => write!(f, "Diamond"),
            StoneKind::Sapphire => write!(f, "Sapphire"),
            StoneKind::Quartz => write!(f, "Quartz"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneReward {
    pub kind: StoneKind,
    pub amount: u32,
}

/// Score and tier of a dare using default engagement inputs.
pub fn purity_of(dare: &Dare) -> (f64, PurityTier) {
    let score = PurityInputs::from_dare(dare).score();
    (score, PurityTier::from_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dare::DareStatus;
    use chrono::{Duration, TimeZone};

    fn inputs() -> PurityInputs {
        PurityInputs::from_dare(&Dare::new("d", "t", "u", DareStatus::Completed).with_stake(20))
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(PurityTier::from_score(7.5), PurityTier::BlueGray);
        assert_eq!(PurityTier::from_score(7.51), PurityTier::RedOrange);
        assert_eq!(PurityTier::from_score(4.0), PurityTier::BlueGray);
        assert_eq!(PurityTier::from_score(3.99), PurityTier::PurpleBlue);
    }

    #[test]
    fn default_inputs_score() {
        // 5*0.3 + 0 + 5*0.2 + 1*0.1 + 3*0.05 + 1*0.05
        let score = inputs().score();
        assert!((score - 2.8).abs() < 1e-9, "score was {score}");
        assert_eq!(PurityTier::from_score(score).stone_reward().kind, StoneKind::Quartz);
    }

    #[test]
    fn engagement_is_capped() {
        let mut heavy = inputs();
        heavy.likes = 1_000;
        heavy.comments = 1_000;
        assert_eq!(heavy.engagement_score(), 10.0);
        // 1.5 + 3.0 + 1.0 + 0.1 + 0.15 + 0.05
        assert!((heavy.score() - 5.8).abs() < 1e-9);
        assert_eq!(PurityTier::from_score(heavy.score()), PurityTier::BlueGray);
    }

    #[test]
    fn duration_rounds_up_to_whole_days() {
        let start = Utc.with_ymd_and_hms(2025, 10, 17, 18, 0, 0).unwrap();
        let mut timed = inputs();
        timed.start = Some(start);
        timed.end = Some(start + Duration::days(29) + Duration::hours(1));
        assert_eq!(timed.duration_days(), 30);
        assert_eq!(timed.time_commitment_score(), 3.0);

        timed.end = Some(start - Duration::days(91));
        assert_eq!(timed.time_commitment_score(), 5.0);
    }

    #[test]
    fn zero_stake_counts_as_one() {
        let dare = Dare::new("d", "t", "u", DareStatus::Completed);
        assert_eq!(PurityInputs::from_dare(&dare).wager_value, 1.0);
    }
}
