// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use dare_domain_types::Achievement;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{to_color, Theme};

pub fn render_achievement_card(frame: &mut Frame, rect: Rect, achievement: &Achievement, theme: &Theme) {
    let reward = to_color(achievement.reward_color);
    let title = Line::from(Span::styled(
        format!(" {} ", achievement.title),
        theme.text_style().add_modifier(Modifier::BOLD),
    ));
    let badge = Line::from(Span::styled(
        format!(" {} ", achievement.reward),
        Style::default().fg(Color::Black).bg(reward).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    let block = theme.card_block(Some(title), to_color(theme.border)).title(badge);

    let avatars: Vec<Span> = achievement
        .avatar_refs
        .iter()
        .map(|avatar| {
            let glyph = if avatar.is_some() { "◉ " } else { "◯ " };
            Span::styled(glyph, Style::default().fg(reward))
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(achievement.type_label(), theme.muted_style())),
        Line::from(avatars),
        Line::from(Span::styled(
            format!("🖼  {}", achievement.proof_image_ref),
            theme.muted_style(),
        )),
        Line::from(Span::styled(achievement.timestamp.as_str(), theme.muted_style())),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
