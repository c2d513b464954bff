// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Shared TUI theme
//!
//! Semantic color roles resolved once at startup and passed to every view.

use dare_domain_types::{palette, RgbColor};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bg: RgbColor,
    pub surface: RgbColor,
    pub border: RgbColor,
    pub text: RgbColor,
    pub muted: RgbColor,
    /// Shadow and glow tint of the dare cards
    pub accent: RgbColor,
    pub shadow: RgbColor,
    pub approve: RgbColor,
    pub decline: RgbColor,
    pub selected: RgbColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: RgbColor::new(0x00, 0x00, 0x00),
            surface: RgbColor::new(0x22, 0x22, 0x22),
            border: RgbColor::new(0x33, 0x33, 0x33),
            text: palette::WHITE,
            muted: RgbColor::new(0xD3, 0xD3, 0xD3), // lightgray
            accent: palette::ACCENT_POSITIVE,
            shadow: RgbColor::new(0x11, 0x11, 0x11),
            approve: palette::STATUS_COMPLETED,
            decline: palette::STATUS_CANCELLED,
            selected: RgbColor::new(0x8A, 0x8A, 0x8A),
        }
    }
}

impl Theme {
    pub fn high_contrast() -> Self {
        Self {
            surface: RgbColor::new(0x00, 0x00, 0x00),
            border: palette::WHITE,
            muted: palette::WHITE,
            shadow: RgbColor::new(0x44, 0x44, 0x44),
            selected: RgbColor::new(0xFF, 0xD7, 0x00),
            ..Self::default()
        }
    }

    pub fn for_config(high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else {
            Self::default()
        }
    }

    /// Blend `color` towards the card surface; `opacity` 1.0 keeps it as is.
    pub fn faded(&self, color: RgbColor, opacity: f64) -> Color {
        to_color(self.surface.mix(color, opacity))
    }

    /// Rounded card frame with an optional title
    pub fn card_block<'a>(&self, title: Option<Line<'a>>, border: Color) -> Block<'a> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(to_color(self.surface)));
        match title {
            Some(title) => block.title(title),
            None => block,
        }
    }

    pub fn header_line<'a>(&self, icon: &'a str, title: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::raw(format!(" {icon} ")),
            Span::styled(
                title,
                Style::default().fg(to_color(self.text)).add_modifier(Modifier::BOLD),
            ),
        ])
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(to_color(self.text))
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(to_color(self.muted))
    }

    /// Filled button: black label on `fill`
    pub fn button_style(&self, fill: RgbColor) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(to_color(fill))
            .add_modifier(Modifier::BOLD)
    }
}

pub fn to_color(color: RgbColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
