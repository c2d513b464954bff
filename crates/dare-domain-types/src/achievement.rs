// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Reward/achievement records shown on the results screen

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::color::RgbColor;

/// Avatar placeholders rendered per achievement card
pub const AVATAR_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum AchievementType {
    Win,
    Loss,
}

impl AchievementType {
    pub fn as_str(self) -> &'static str {
        match self {
            AchievementType::Win => "win",
            AchievementType::Loss => "loss",
        }
    }

    /// Capitalized form used in the "Type: ..." line
    pub fn display_name(self) -> &'static str {
        match self {
            AchievementType::Win => "Win",
            AchievementType::Loss => "Loss",
        }
    }
}

impl std::fmt::Display for AchievementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    /// Signed amount as displayed, e.g. "+15" or "-5"
    pub reward: String,
    pub reward_color: RgbColor,
    pub proof_image_ref: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: AchievementType,
    /// Unused placeholders for now; always `AVATAR_SLOTS` long
    pub avatar_refs: [Option<String>; AVATAR_SLOTS],
}

impl Achievement {
    pub fn type_label(&self) -> String {
        format!("Type: {}", self.kind.display_name())
    }

    /// Numeric value of `reward`, if it parses.
    pub fn reward_amount(&self) -> Option<i64> {
        let trimmed = self.reward.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        unsigned.parse().ok()
    }
}

/// Net reward over a list of achievements, skipping unparsable amounts.
pub fn total_reward(achievements: &[Achievement]) -> i64 {
    achievements.iter().filter_map(Achievement::reward_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    fn achievement(reward: &str, kind: AchievementType) -> Achievement {
        Achievement {
            title: "Test".to_string(),
            reward: reward.to_string(),
            reward_color: palette::ACCENT_POSITIVE,
            proof_image_ref: String::new(),
            timestamp: String::new(),
            kind,
            avatar_refs: Default::default(),
        }
    }

    #[test]
    fn type_label_is_capitalized() {
        assert_eq!(achievement("+1", AchievementType::Win).type_label(), "Type: Win");
        assert_eq!(achievement("-1", AchievementType::Loss).type_label(), "Type: Loss");
    }

    #[test]
    fn every_type_round_trips_through_serde() {
        use strum::IntoEnumIterator;

        let kinds: Vec<AchievementType> = AchievementType::iter().collect();
        assert_eq!(kinds, [AchievementType::Win, AchievementType::Loss]);
        for kind in kinds {
            let label = achievement("+0", kind).type_label();
            assert_eq!(label, format!("Type: {}", kind.display_name()));
            assert!(kind.display_name().eq_ignore_ascii_case(kind.as_str()));

            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            assert_eq!(serde_json::from_str::<AchievementType>(&json).unwrap(), kind);
        }
    }

    #[test]
    fn reward_amount_handles_signs() {
        assert_eq!(achievement("+15", AchievementType::Win).reward_amount(), Some(15));
        assert_eq!(achievement("-5", AchievementType::Loss).reward_amount(), Some(-5));
        assert_eq!(achievement("n/a", AchievementType::Loss).reward_amount(), None);
    }

    #[test]
    fn total_skips_unparsable() {
        let list = vec![
            achievement("+15", AchievementType::Win),
            achievement("-5", AchievementType::Loss),
            achievement("?", AchievementType::Win),
        ];
        assert_eq!(total_reward(&list), 10);
    }
}
