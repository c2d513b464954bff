// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! In-memory data source with the prototype's fixed records

use dare_domain_types::{palette, Achievement, AchievementType, Dare, DareStatus, RgbColor};
use tracing::debug;

use crate::dare_source::DareSource;

/// Fixed lists built once and never mutated
#[derive(Debug, Clone)]
pub struct MockDareService {
    dares: Vec<Dare>,
    achievements: Vec<Achievement>,
}

impl MockDareService {
    pub fn new() -> Self {
        Self {
            dares: mock_dares(),
            achievements: mock_achievements(),
        }
    }

    /// Custom record lists, mostly for tests
    pub fn with_records(dares: Vec<Dare>, achievements: Vec<Achievement>) -> Self {
        Self { dares, achievements }
    }

    /// Every dare, regardless of status
    pub fn all_dares(&self) -> &[Dare] {
        &self.dares
    }
}

impl Default for MockDareService {
    fn default() -> Self {
        Self::new()
    }
}

impl DareSource for MockDareService {
    fn list_completed_dares(&self) -> Vec<Dare> {
        let completed: Vec<Dare> = self
            .dares
            .iter()
            .filter(|dare| dare.status == DareStatus::Completed)
            .cloned()
            .collect();
        debug!(total = self.dares.len(), completed = completed.len(), "listing completed dares");
        completed
    }

    fn list_achievements(&self) -> Vec<Achievement> {
        self.achievements.clone()
    }

    fn description(&self) -> &str {
        "built-in mock records"
    }
}

fn mock_dares() -> Vec<Dare> {
    vec![
        Dare::new(
            "dare-1",
            "The Kings will be better than the Bulls this season",
            "user1",
            DareStatus::Completed,
        )
        .with_participants(["user1", "user2"])
        .with_stake(20)
        .with_winner("user1"),
        Dare::new("dare-2", "Bitcoin will not reach $110,000", "user2", DareStatus::Completed)
            .with_participants(["user2", "user3"])
            .with_stake(5)
            .with_winner("user3"),
        Dare::new("dare-3", "Bitcoin will not reach $110,000", "user2", DareStatus::Completed)
            .with_participants(["user4", "user5"])
            .with_stake(15),
    ]
}

fn achievement(
    title: &str,
    reward: &str,
    reward_color: RgbColor,
    proof: &str,
    timestamp: &str,
    kind: AchievementType,
) -> Achievement {
    Achievement {
        title: title.to_string(),
        reward: reward.to_string(),
        reward_color,
        proof_image_ref: format!("https://via.placeholder.com/200x100?text={proof}"),
        timestamp: timestamp.to_string(),
        kind,
        avatar_refs: Default::default(),
    }
}

fn mock_achievements() -> Vec<Achievement> {
    vec![
        achievement(
            "Won $20 Blackjack Dare",
            "+15",
            palette::ACCENT_POSITIVE,
            "Blackjack+Proof",
            "03:08 PM EDT, Oct 17, 2025",
            AchievementType::Win,
        ),
        achievement(
            "Lost $5 Dice Roll",
            "-5",
            palette::ACCENT_NEGATIVE,
            "Dice+Proof",
            "02:15 PM EDT, Oct 17, 2025",
            AchievementType::Loss,
        ),
        achievement(
            "Won $10 Rock Paper Scissors",
            "+20",
            palette::ACCENT_POSITIVE,
            "RPS+Proof",
            "01:30 PM EDT, Oct 17, 2025",
            AchievementType::Win,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_completed_dares_are_listed() {
        let mut dares = mock_dares();
        dares.push(Dare::new("dare-open", "Open one", "user9", DareStatus::Open));
        let service = MockDareService::with_records(dares, Vec::new());

        let listed = service.list_completed_dares();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|d| d.status == DareStatus::Completed));
        assert_eq!(service.all_dares().len(), 4);
    }

    #[test]
    fn stock_records() {
        let service = MockDareService::new();
        let dares = service.list_completed_dares();
        let ids: Vec<&str> = dares.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["dare-1", "dare-2", "dare-3"]);
        assert_eq!(dares[0].action_label(), "Post");
        assert_eq!(dares[1].action_label(), "Post");
        assert_eq!(dares[2].action_label(), "Add Proof");

        let achievements = service.list_achievements();
        assert_eq!(achievements.len(), 3);
        assert_eq!(achievements[1].kind, AchievementType::Loss);
        assert!(achievements.iter().all(|a| a.avatar_refs.iter().all(Option::is_none)));
    }
}
