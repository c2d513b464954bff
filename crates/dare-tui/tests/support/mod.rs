// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Shared helpers for the dare-tui integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dare_config_types::UiConfig;
use dare_core::{FixedFilePicker, InMemoryProofUploader, MockDareService, RecordingNotifier};
use dare_tui::{CardCollaborators, DareCardsViewModel, MouseAction, Msg};
use ratatui::{backend::TestBackend, Terminal};

pub struct Harness {
    pub view_model: DareCardsViewModel,
    pub notifier: Arc<RecordingNotifier>,
    pub uploader: Arc<InMemoryProofUploader>,
}

pub fn harness_with(config: UiConfig, picker: FixedFilePicker) -> Harness {
    let notifier = Arc::new(RecordingNotifier::new());
    let uploader = Arc::new(InMemoryProofUploader::new());
    let collaborators = CardCollaborators {
        notifier: notifier.clone(),
        file_picker: Arc::new(picker),
        proof_uploader: uploader.clone(),
    };
    let view_model = DareCardsViewModel::new(&MockDareService::new(), &config, collaborators);
    Harness {
        view_model,
        notifier,
        uploader,
    }
}

pub fn harness() -> Harness {
    harness_with(UiConfig::default(), FixedFilePicker::cancelled())
}

impl Harness {
    pub fn press_card(&mut self, id: &str, column: u16) {
        self.view_model.update(Msg::PointerDown {
            target: Some(MouseAction::Card(id.to_string())),
            column,
            row: 0,
        });
    }

    pub fn drag_to(&mut self, column: u16) {
        self.view_model.update(Msg::PointerDrag { column, row: 0 });
    }

    pub fn release(&mut self) {
        self.view_model.update(Msg::PointerUp {
            target: None,
            column: 0,
            row: 0,
        });
    }

    /// Press at `from`, drag to `to`, release
    pub fn swipe(&mut self, id: &str, from: u16, to: u16) {
        self.press_card(id, from);
        self.drag_to(to);
        self.release();
    }

    /// Advance time in 16 ms frames
    pub fn run_for(&mut self, total: Duration) {
        let frame = Duration::from_millis(16);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            let step = frame.min(total - elapsed);
            self.view_model.update(Msg::Tick(step));
            elapsed += step;
        }
    }

    pub fn ids(&self) -> Vec<String> {
        self.view_model
            .cards()
            .iter()
            .map(|card| card.id().to_string())
            .collect()
    }
}

pub fn temp_proof(contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proof.png");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Screen contents, one string per row
pub fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn screen_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    buffer_lines(terminal).iter().any(|line| line.contains(needle))
}
