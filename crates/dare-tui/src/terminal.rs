// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Terminal Management - setup, cleanup and temporary suspension
//!
//! Every mode we switch on is recorded in a static flag so that cleanup
//! (normal exit, Ctrl-C or panic) restores exactly what was changed, and so
//! that the terminal can be handed back to a line-mode prompt and taken
//! over again.

use std::{
    io, panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use anyhow::Context;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

static CLEANUP_DONE: AtomicBool = AtomicBool::new(false);

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static ALTERNATE_SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);
static KB_FLAGS_PUSHED: AtomicBool = AtomicBool::new(false);
static MOUSE_CAPTURE_ENABLED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone)]
pub struct TerminalConfig {
    pub raw_mode: bool,
    pub alternate_screen: bool,
    /// Report key release events so only presses are acted on
    pub keyboard_enhancement: bool,
    /// Press, drag, release and motion reporting
    pub mouse_capture: bool,
    pub install_signal_handlers: bool,
    /// Cleared by the Ctrl-C handler
    pub running_flag: Option<Arc<AtomicBool>>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            raw_mode: true,
            alternate_screen: true,
            keyboard_enhancement: true,
            mouse_capture: true,
            install_signal_handlers: true,
            running_flag: None,
        }
    }
}

impl TerminalConfig {
    pub fn with_running_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.running_flag = Some(flag);
        self
    }
}

/// Modes that were active when the terminal was suspended
#[derive(Debug, Clone, Copy, Default)]
struct ActiveModes {
    raw_mode: bool,
    alternate_screen: bool,
    keyboard_enhancement: bool,
    mouse_capture: bool,
}

fn enable(modes: ActiveModes) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    if modes.raw_mode {
        crossterm::terminal::enable_raw_mode().context("enable raw mode")?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
    }
    if modes.alternate_screen {
        stdout.execute(EnterAlternateScreen)?;
        ALTERNATE_SCREEN_ACTIVE.store(true, Ordering::SeqCst);
    }
    if modes.keyboard_enhancement {
        // Not every terminal supports the kitty protocol; carry on without it
        let pushed = stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ));
        KB_FLAGS_PUSHED.store(pushed.is_ok(), Ordering::SeqCst);
    }
    if modes.mouse_capture {
        stdout.execute(EnableMouseCapture)?;
        MOUSE_CAPTURE_ENABLED.store(true, Ordering::SeqCst);
    }
    Ok(())
}

/// Undo every recorded mode, in reverse order of setup.
fn disable() -> ActiveModes {
    let mut stdout = io::stdout();
    let mut modes = ActiveModes::default();

    if KB_FLAGS_PUSHED.swap(false, Ordering::SeqCst) {
        let _ = stdout.execute(PopKeyboardEnhancementFlags);
        modes.keyboard_enhancement = true;
    }
    if MOUSE_CAPTURE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = stdout.execute(DisableMouseCapture);
        modes.mouse_capture = true;
    }
    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = crossterm::terminal::disable_raw_mode();
        modes.raw_mode = true;
    }
    if ALTERNATE_SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = stdout.execute(LeaveAlternateScreen);
        modes.alternate_screen = true;
    }
    modes
}

pub fn setup_terminal(config: TerminalConfig) -> anyhow::Result<()> {
    CLEANUP_DONE.store(false, Ordering::SeqCst);
    enable(ActiveModes {
        raw_mode: config.raw_mode,
        alternate_screen: config.alternate_screen,
        keyboard_enhancement: config.keyboard_enhancement,
        mouse_capture: config.mouse_capture,
    })?;

    if config.install_signal_handlers {
        let running = config.running_flag.clone();
        ctrlc::set_handler(move || {
            cleanup_terminal();
            if let Some(running) = &running {
                running.store(false, Ordering::SeqCst);
            }
        })
        .context("install Ctrl-C handler")?;

        let default_panic = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            cleanup_terminal();
            default_panic(panic_info);
        }));
    }

    Ok(())
}

/// Restore the terminal; only the first call has an effect.
pub fn cleanup_terminal() {
    if CLEANUP_DONE.swap(true, Ordering::SeqCst) {
        return;
    }
    disable();
}

/// Terminal handed back to line mode until [`SuspendedTerminal::resume`]
#[derive(Debug)]
#[must_use = "the terminal stays in line mode until resumed"]
pub struct SuspendedTerminal {
    modes: ActiveModes,
}

pub fn suspend_terminal() -> SuspendedTerminal {
    SuspendedTerminal { modes: disable() }
}

impl SuspendedTerminal {
    pub fn resume(self) -> anyhow::Result<()> {
        enable(self.modes)
    }
}
