// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Message box shown for each queued notification

use dare_core::Notification;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::{to_color, Theme};
use crate::view::HitTestRegistry;
use crate::view_model::MouseAction;

const OK_LABEL: &str = "  OK  ";

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn render_message_modal(
    frame: &mut Frame,
    area: Rect,
    notification: &Notification,
    theme: &Theme,
    hits: &mut HitTestRegistry<MouseAction>,
) {
    let rect = centered_rect(44, 7, area);
    frame.render_widget(Clear, rect);

    let title = Line::from(Span::styled(
        format!(" {} ", notification.title),
        theme.text_style().add_modifier(Modifier::BOLD),
    ));
    let block = theme.card_block(Some(title), to_color(theme.accent));
    let inner = block.inner(rect);
    let body = Paragraph::new(notification.body.as_str())
        .style(theme.text_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(body, rect);

    if inner.height == 0 {
        return;
    }
    let width = (OK_LABEL.len() as u16).min(inner.width);
    let button = Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.bottom() - 1,
        width,
        1,
    );
    frame.render_widget(
        Paragraph::new(OK_LABEL).style(theme.button_style(theme.accent)),
        button,
    );
    hits.register(button, MouseAction::DismissModal);
}
