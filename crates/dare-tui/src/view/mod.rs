// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! View Layer - Pure rendering
//!
//! Views read view models and draw them with ratatui. Every interactive
//! area is registered in the frame's [`HitTestRegistry`] so the event loop
//! can map pointer positions back to [`MouseAction`]s.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use dare_domain_types::palette;

use crate::theme::{to_color, Theme};
use crate::view_model::achievements::{CLAIM_LABEL, HEADER_TITLE};
use crate::view_model::{AchievementsViewModel, DareCardsViewModel, MouseAction};

pub mod achievement_card;
pub mod dare_card;
pub mod hit_test;
pub mod modal;

pub use hit_test::{HitMatch, HitTestRegistry};

pub const CARD_HEIGHT: u16 = 10;
pub const CARD_MAX_WIDTH: u16 = 48;
pub const ACHIEVEMENT_CARD_HEIGHT: u16 = 6;
const CARD_GAP: u16 = 1;

fn card_slot(area: Rect, index: u16, height: u16) -> Rect {
    let width = area.width.saturating_sub(2).min(CARD_MAX_WIDTH);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + index * (height + CARD_GAP),
        width,
        height,
    )
}

fn visible_slots(area: Rect, height: u16) -> usize {
    usize::from((area.height + CARD_GAP) / (height + CARD_GAP)).max(1)
}

/// Render the Dare Card screen
pub fn render_cards(
    frame: &mut Frame,
    view_model: &mut DareCardsViewModel,
    theme: &Theme,
    hits: &mut HitTestRegistry<MouseAction>,
) {
    hits.clear();
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(to_color(theme.bg))), area);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut title = theme.header_line("🃏", "Dare Cards");
    title.push_span(Span::styled(
        format!("  {} left", view_model.cards().len()),
        theme.muted_style(),
    ));
    frame.render_widget(Paragraph::new(title), header);

    if view_model.cards().is_empty() {
        frame.render_widget(
            Paragraph::new("No dares left").style(theme.muted_style()).alignment(Alignment::Center),
            body,
        );
    } else {
        let visible = visible_slots(body, CARD_HEIGHT);
        view_model.ensure_visible(visible);
        let scroll = view_model.scroll_offset();
        let selected = view_model.selected_index();
        let pixels_per_column = view_model.pixels_per_column();
        for (slot, (index, card)) in view_model
            .cards()
            .iter()
            .enumerate()
            .skip(scroll)
            .take(visible)
            .enumerate()
        {
            dare_card::render_dare_card(
                frame,
                card_slot(body, slot as u16, CARD_HEIGHT),
                body,
                card,
                index == selected,
                pixels_per_column,
                theme,
                hits,
            );
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "drag or ←/→ swipe · ↑/↓ select · enter action · q quit",
            theme.muted_style(),
        )))
        .alignment(Alignment::Center),
        footer,
    );
}

/// Render the Achievement List screen
pub fn render_achievements(
    frame: &mut Frame,
    view_model: &AchievementsViewModel,
    theme: &Theme,
    hits: &mut HitTestRegistry<MouseAction>,
) {
    hits.clear();
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(to_color(theme.bg))), area);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(theme.header_line("🏆", HEADER_TITLE))
            .style(Style::default().bg(to_color(theme.surface))),
        header,
    );

    let visible = visible_slots(body, ACHIEVEMENT_CARD_HEIGHT);
    for (slot, achievement) in view_model
        .achievements()
        .iter()
        .skip(view_model.scroll_offset())
        .take(visible)
        .enumerate()
    {
        let rect = card_slot(body, slot as u16, ACHIEVEMENT_CARD_HEIGHT).intersection(body);
        if !rect.is_empty() {
            achievement_card::render_achievement_card(frame, rect, achievement, theme);
        }
    }

    let label = if view_model.is_claimed() {
        "  Reward Claimed  ".to_string()
    } else {
        format!("  {CLAIM_LABEL}  ")
    };
    let width = (label.chars().count() as u16).min(footer.width);
    let button = Rect::new(footer.x + (footer.width - width) / 2, footer.y + 1, width, 1)
        .intersection(footer);
    let fill = if view_model.is_claimed() {
        theme.muted
    } else if view_model.is_claim_hovered() {
        theme.accent.mix(palette::WHITE, 0.25)
    } else {
        theme.accent
    };
    frame.render_widget(Paragraph::new(label).style(theme.button_style(fill)), button);
    hits.register(button, MouseAction::ClaimReward);
}
