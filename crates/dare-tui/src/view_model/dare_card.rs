// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! One swipeable dare card

use dare_config_types::{AnimationConfig, SwipeConfig};
use dare_domain_types::{purity_of, Dare, DareResult, PurityTier, RgbColor, StoneReward};

use super::action_button::ActionButtonViewModel;
use super::swipe::SwipeController;

/// Icons shown in the middle row of every card
pub const CARD_ICONS: [&str; 4] = ["▶", "•••", "✖", "▶"];

#[derive(Debug, Clone)]
pub struct SwipeCardViewModel {
    dare: Dare,
    viewer: Option<String>,
    pub swipe: SwipeController,
    pub button: ActionButtonViewModel,
}

impl SwipeCardViewModel {
    pub fn new(
        dare: Dare,
        viewer: Option<String>,
        swipe: SwipeConfig,
        animation: &AnimationConfig,
    ) -> Self {
        let result = dare.result_for(viewer.as_deref());
        let button = ActionButtonViewModel::new(result.action(), result.color(), animation);
        Self {
            dare,
            viewer,
            swipe: SwipeController::new(swipe, animation),
            button,
        }
    }

    pub fn id(&self) -> &str {
        &self.dare.id
    }

    pub fn dare(&self) -> &Dare {
        &self.dare
    }

    pub fn title(&self) -> &str {
        &self.dare.title
    }

    /// `@name` labels of the displayed participants
    pub fn participant_labels(&self) -> Vec<String> {
        self.dare
            .displayed_participants()
            .iter()
            .map(|p| format!("@{p}"))
            .collect()
    }

    pub fn status_label(&self) -> String {
        self.dare.status_label()
    }

    pub fn status_color(&self) -> RgbColor {
        self.dare.status_color()
    }

    pub fn result(&self) -> DareResult {
        self.dare.result_for(self.viewer.as_deref())
    }

    pub fn purity(&self) -> (f64, PurityTier) {
        purity_of(&self.dare)
    }

    pub fn stone_reward(&self) -> StoneReward {
        self.purity().1.stone_reward()
    }

    pub fn is_animating(&self) -> bool {
        self.swipe.is_animating() || self.button.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dare_domain_types::{DareAction, DareStatus};

    fn card(viewer: Option<&str>) -> SwipeCardViewModel {
        let dare = Dare::new("d", "Kings vs Bulls", "user1", DareStatus::Completed)
            .with_participants(["user1", "user2", "user3", "user4"])
            .with_winner("user1");
        SwipeCardViewModel::new(
            dare,
            viewer.map(str::to_string),
            SwipeConfig::default(),
            &AnimationConfig::default(),
        )
    }

    #[test]
    fn shows_three_participants() {
        assert_eq!(card(None).participant_labels(), ["@user1", "@user2", "@user3"]);
    }

    #[test]
    fn viewer_decides_the_button() {
        assert_eq!(card(None).button.action(), DareAction::Post);
        assert_eq!(card(Some("user1")).result(), DareResult::Won);

        let loser = card(Some("user2"));
        assert_eq!(loser.result(), DareResult::Lost);
        assert_eq!(loser.button.label(), "Add Proof");
    }
}
