// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Rendering of one swipeable dare card
//!
//! The card is drawn in its list slot shifted by the swipe offset (converted
//! back to columns) and clipped to the list area. Opacity fades every color
//! towards the card surface. The active effect picks the frame: a glow
//! tints the border with the accent color in proportion to the glow radius,
//! a shadow is drawn as a darker copy of the frame behind the card.

use dare_domain_types::RgbColor;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BorderType, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{to_color, Theme};
use crate::view::HitTestRegistry;
use crate::view_model::dare_card::CARD_ICONS;
use crate::view_model::{EffectMode, MouseAction, SwipeCardViewModel, SwipeOutcome};

/// Line of the card body holding the action button
const BUTTON_LINE: u16 = 6;

/// `slot` moved by `shift` columns and clipped to `bounds`
pub fn shifted_rect(slot: Rect, shift: i32, bounds: Rect) -> Option<Rect> {
    let left = i32::from(slot.x) + shift;
    let right = left + i32::from(slot.width);
    let clip_left = left.max(i32::from(bounds.x));
    let clip_right = right.min(i32::from(bounds.right()));
    let top = slot.y.max(bounds.y);
    let bottom = slot.bottom().min(bounds.bottom());
    if clip_right <= clip_left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        clip_left as u16,
        top,
        (clip_right - clip_left) as u16,
        bottom - top,
    ))
}

fn columns_for(pixels: f64, pixels_per_column: f64) -> i32 {
    (pixels / pixels_per_column).round() as i32
}

#[allow(clippy::too_many_arguments)]
pub fn render_dare_card(
    frame: &mut Frame,
    slot: Rect,
    bounds: Rect,
    card: &SwipeCardViewModel,
    selected: bool,
    pixels_per_column: f64,
    theme: &Theme,
    hits: &mut HitTestRegistry<MouseAction>,
) {
    let transform = card.swipe.transform();
    let effects = card.swipe.effects();
    let config = card.swipe.config();
    let shift = columns_for(transform.offset_x, pixels_per_column);
    let Some(rect) = shifted_rect(slot, shift, bounds) else {
        return;
    };
    let opacity = transform.opacity;
    let fade = |color: RgbColor| theme.faded(color, opacity);

    let border = match card.swipe.effect_mode() {
        EffectMode::GlowActive => {
            let span = (config.max_effect_radius - config.base_effect_radius).max(f64::EPSILON);
            let intensity = (effects.glow_radius - config.base_effect_radius) / span;
            fade(theme.border.mix(theme.accent, 0.4 + 0.6 * intensity))
        }
        EffectMode::ShadowOnly => {
            let shadow_shift = shift + columns_for(effects.shadow.offset_x, pixels_per_column);
            let drop = (effects.shadow.offset_y / pixels_per_column).round() as u16;
            let shadow_slot = Rect { y: slot.y.saturating_add(drop), ..slot };
            if let Some(shadow) = shifted_rect(shadow_slot, shadow_shift, bounds) {
                let block = theme
                    .card_block(None, to_color(theme.shadow))
                    .style(Style::default().bg(to_color(theme.shadow)));
                frame.render_widget(block, shadow);
            }
            if selected {
                fade(theme.selected)
            } else {
                fade(theme.border)
            }
        }
    };

    let mut title_spans = vec![Span::styled(
        format!(" {} ", card.status_label()),
        Style::default().fg(fade(card.status_color())).add_modifier(Modifier::BOLD),
    )];
    if transform.rotation.abs() >= 1.0 {
        let tilt = if transform.rotation > 0.0 { "╱" } else { "╲" };
        title_spans.push(Span::styled(
            format!("{tilt} {:.0}° ", transform.rotation),
            Style::default().fg(fade(theme.muted)),
        ));
    }

    let mut block = theme.card_block(Some(Line::from(title_spans)), border);
    if transform.scale > 1.1 {
        block = block.border_type(BorderType::Thick);
    }
    if let Some(outcome) = card.swipe.pending_outcome().filter(|o| o.is_commit()) {
        let (label, color) = match outcome {
            SwipeOutcome::Approve => ("APPROVE ›", theme.approve),
            _ => ("‹ DECLINE", theme.decline),
        };
        block = block.title(
            Line::from(Span::styled(
                format!(" {label} "),
                Style::default().fg(to_color(color)).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(rect);
    let text = Style::default().fg(fade(theme.text));
    let muted = Style::default().fg(fade(theme.muted));

    let mut participants = Vec::new();
    for label in card.participant_labels() {
        participants.push(Span::styled(label, muted));
        participants.push(Span::styled(" ◯  ", Style::default().fg(fade(card.status_color()))));
    }

    let result = card.result();
    let stone = card.stone_reward();
    let (purity, _) = card.purity();
    let footer = match card.button.proof() {
        Some(receipt) => Line::from(Span::styled(format!("📎 {}", receipt.file_name), muted)),
        None => Line::from(Span::styled(
            format!("purity {purity:.1} · {} ×{}", stone.kind, stone.amount),
            muted,
        )),
    };

    let lines = vec![
        Line::from(Span::styled(card.title(), text.add_modifier(Modifier::BOLD))),
        Line::from(participants).alignment(Alignment::Center),
        Line::from(Span::styled(
            card.status_label(),
            Style::default().fg(fade(card.status_color())),
        )),
        Line::from(Span::styled(CARD_ICONS.join("   "), text)).alignment(Alignment::Center),
        Line::from(Span::styled(
            result.text(),
            Style::default().fg(fade(result.color())).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::default(),
        footer,
    ];
    frame.render_widget(Paragraph::new(lines).block(block), rect);
    hits.register(rect, MouseAction::Card(card.id().to_string()));

    if inner.height <= BUTTON_LINE {
        return;
    }
    // Hover grows the button by one column per side for every 0.05 of scale
    let pad = ((card.button.scale() - 1.0) / 0.05).round().max(0.0) as usize;
    let label = format!("{space}  {}  {space}", card.button.label(), space = " ".repeat(pad));
    let width = (label.width() as u16).min(inner.width);
    let button = Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.y + BUTTON_LINE,
        width,
        1,
    );
    let fill = card.button.color();
    let style = theme.button_style(fill).bg(fade(fill));
    frame.render_widget(Paragraph::new(label).style(style), button);
    hits.register(button, MouseAction::ActionButton(card.id().to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_rect_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 40, 20);
        let slot = Rect::new(5, 2, 30, 10);
        assert_eq!(shifted_rect(slot, 0, bounds), Some(slot));
        assert_eq!(shifted_rect(slot, 20, bounds), Some(Rect::new(25, 2, 15, 10)));
        assert_eq!(shifted_rect(slot, -10, bounds), Some(Rect::new(0, 2, 25, 10)));
        assert_eq!(shifted_rect(slot, 50, bounds), None);
    }

    #[test]
    fn offset_converts_to_columns() {
        assert_eq!(columns_for(400.0, 8.0), 50);
        assert_eq!(columns_for(-12.0, 8.0), -2);
    }
}
