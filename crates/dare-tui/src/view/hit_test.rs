// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use ratatui::layout::{Position, Rect};

/// Matched zone of a hit-test lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitMatch<A> {
    pub rect: Rect,
    pub action: A,
}

/// Interactive zones collected while rendering a frame.
///
/// Views register zones back to front; lookups return the zone registered
/// last, which is the one drawn on top.
#[derive(Debug)]
pub struct HitTestRegistry<A> {
    zones: Vec<(Rect, A)>,
}

impl<A> Default for HitTestRegistry<A> {
    fn default() -> Self {
        Self { zones: Vec::new() }
    }
}

impl<A> HitTestRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn register(&mut self, rect: Rect, action: A) {
        if !rect.is_empty() {
            self.zones.push((rect, action));
        }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl<A: Clone + PartialEq> HitTestRegistry<A> {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitMatch<A>> {
        let position = Position::new(column, row);
        self.zones
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|(rect, action)| HitMatch {
                rect: *rect,
                action: action.clone(),
            })
    }

    /// Bounds of the top-most zone registered for `action`
    pub fn rect_of(&self, action: &A) -> Option<Rect> {
        self.zones
            .iter()
            .rev()
            .find(|(_, registered)| registered == action)
            .map(|(rect, _)| *rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_most_zone_wins() {
        let mut registry = HitTestRegistry::new();
        registry.register(Rect::new(0, 0, 10, 5), "card");
        registry.register(Rect::new(2, 3, 4, 1), "button");

        assert_eq!(registry.hit_test(3, 3).map(|hit| hit.action), Some("button"));
        assert_eq!(registry.hit_test(1, 1).map(|hit| hit.action), Some("card"));
        assert!(registry.hit_test(10, 0).is_none());
        assert_eq!(registry.rect_of(&"button"), Some(Rect::new(2, 3, 4, 1)));
    }

    #[test]
    fn empty_rects_are_skipped() {
        let mut registry = HitTestRegistry::new();
        registry.register(Rect::new(5, 5, 0, 3), ());
        assert!(registry.is_empty());
    }
}
