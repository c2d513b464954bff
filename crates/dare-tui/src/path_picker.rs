// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! File selection by typed path
//!
//! The terminal has no file dialog, so [`TerminalPathPicker`] pauses the
//! input reader through an [`InputGate`], drops back to line mode and reads
//! a path from stdin. An empty line cancels.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use dare_core::FilePicker;
use tracing::{debug, warn};

use crate::terminal;

/// How long the input reader waits between polls; it checks the pause flag
/// at least this often.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Shared between the input reader thread, the event loop and the picker
#[derive(Debug, Clone, Default)]
pub struct InputGate {
    paused: Arc<AtomicBool>,
    screen_lost: Arc<AtomicBool>,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The reader thread must not touch the terminal while this is set.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    /// Resume input; the screen contents were lost and need a full repaint.
    pub fn resume(&self) {
        self.screen_lost.store(true, Ordering::SeqCst);
        self.paused.store(false, Ordering::SeqCst);
    }

    pub fn take_screen_lost(&self) -> bool {
        self.screen_lost.swap(false, Ordering::SeqCst)
    }
}

pub struct TerminalPathPicker {
    gate: InputGate,
}

impl TerminalPathPicker {
    pub fn new(gate: InputGate) -> Self {
        Self { gate }
    }

    fn prompt(title: &str) -> io::Result<Option<PathBuf>> {
        let mut stdout = io::stdout();
        write!(stdout, "\n{title}: enter a file path (empty to cancel): ")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(parse_path(&line))
    }
}

/// Trimmed, unquoted path; `None` for blank input
pub fn parse_path(line: &str) -> Option<PathBuf> {
    let trimmed = line.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);
    (!unquoted.is_empty()).then(|| PathBuf::from(unquoted))
}

impl FilePicker for TerminalPathPicker {
    fn pick_file(&self, title: &str) -> Option<PathBuf> {
        self.gate.pause();
        thread::sleep(INPUT_POLL_INTERVAL * 2);
        let suspended = terminal::suspend_terminal();

        let picked = match Self::prompt(title) {
            Ok(path) => path,
            Err(err) => {
                warn!(error = %err, "reading proof path failed");
                None
            }
        };

        if let Err(err) = suspended.resume() {
            warn!(error = %err, "terminal could not be restored");
        }
        self.gate.resume();
        debug!(path = ?picked, "path picker finished");
        picked
    }
}
