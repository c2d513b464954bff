// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Cards Loop - event loop and screen dispatch
//!
//! [`CardsApp`] holds the active screen, the notification modal and the
//! hit-test zones of the last frame. It is driven with raw crossterm events
//! and tick durations and renders into any ratatui backend, so tests run it
//! headless against a `TestBackend`.
//!
//! [`run_cards`] wires it to the real terminal: a reader thread forwards
//! crossterm events into a channel, a coalescing tick channel drives the
//! animations, and all state is mutated on the loop thread.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use crossbeam_channel as chan;
use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use dare_config_types::{Screen, UiConfig};
use dare_core::{DareSource, Notification, QueueNotifier};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::{debug, info, trace};

use crate::path_picker::{InputGate, INPUT_POLL_INTERVAL};
use crate::terminal::{self, TerminalConfig};
use crate::theme::Theme;
use crate::view::{self, modal, HitTestRegistry};
use crate::view_model::{
    AchievementsViewModel, CardCollaborators, DareCardsViewModel, MouseAction, Msg,
};

/// Everything the loop needs, assembled by the binary
pub struct CardsDependencies {
    pub source: Arc<dyn DareSource>,
    pub collaborators: CardCollaborators,
    /// Must be the same queue the collaborators' notifier writes to
    pub notifications: QueueNotifier,
    pub config: UiConfig,
    pub theme: Theme,
    pub input_gate: InputGate,
}

pub enum ActiveScreen {
    Cards(DareCardsViewModel),
    Achievements(AchievementsViewModel),
}

impl ActiveScreen {
    fn update(&mut self, msg: Msg) {
        match self {
            ActiveScreen::Cards(vm) => vm.update(msg),
            ActiveScreen::Achievements(vm) => vm.update(msg),
        }
    }

    fn take_needs_redraw(&mut self) -> bool {
        let flag = match self {
            ActiveScreen::Cards(vm) => &mut vm.needs_redraw,
            ActiveScreen::Achievements(vm) => &mut vm.needs_redraw,
        };
        std::mem::take(flag)
    }

    fn take_exit_request(&mut self) -> bool {
        match self {
            ActiveScreen::Cards(vm) => vm.take_exit_request(),
            ActiveScreen::Achievements(vm) => vm.take_exit_request(),
        }
    }
}

pub struct CardsApp {
    screen: ActiveScreen,
    notifications: QueueNotifier,
    modal: Option<Notification>,
    theme: Theme,
    hits: HitTestRegistry<MouseAction>,
    needs_redraw: bool,
    exit: bool,
}

impl CardsApp {
    pub fn new(deps: &CardsDependencies) -> Self {
        let screen = match deps.config.screen {
            Screen::Cards => ActiveScreen::Cards(DareCardsViewModel::new(
                deps.source.as_ref(),
                &deps.config,
                deps.collaborators.clone(),
            )),
            Screen::Achievements => ActiveScreen::Achievements(AchievementsViewModel::new(
                deps.source.as_ref(),
                deps.collaborators.notifier.clone(),
            )),
        };
        Self {
            screen,
            notifications: deps.notifications.clone(),
            modal: None,
            theme: deps.theme,
            hits: HitTestRegistry::new(),
            needs_redraw: true,
            exit: false,
        }
    }

    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    pub fn modal(&self) -> Option<&Notification> {
        self.modal.as_ref()
    }

    pub fn hits(&self) -> &HitTestRegistry<MouseAction> {
        &self.hits
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn handle_event(&mut self, event: Event) {
        if self.modal.is_some() {
            self.handle_modal_event(&event);
        } else {
            match event {
                Event::Key(key) => self.screen.update(Msg::Key(key)),
                Event::Mouse(mouse) => {
                    if let Some(msg) = self.mouse_msg(mouse) {
                        self.screen.update(msg);
                    }
                }
                Event::Resize(..) => self.needs_redraw = true,
                _ => {}
            }
        }
        self.after_update();
    }

    pub fn tick(&mut self, dt: Duration) {
        self.screen.update(Msg::Tick(dt));
        self.after_update();
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            ActiveScreen::Cards(vm) => view::render_cards(frame, vm, &self.theme, &mut self.hits),
            ActiveScreen::Achievements(vm) => {
                view::render_achievements(frame, vm, &self.theme, &mut self.hits)
            }
        }
        if let Some(notification) = &self.modal {
            modal::render_message_modal(frame, area, notification, &self.theme, &mut self.hits);
        }
        self.needs_redraw = false;
    }

    fn mouse_msg(&self, mouse: MouseEvent) -> Option<Msg> {
        let target = || self.hits.hit_test(mouse.column, mouse.row).map(|hit| hit.action);
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Msg::PointerDown {
                target: target(),
                column,
                row,
            }),
            MouseEventKind::Drag(MouseButton::Left) => Some(Msg::PointerDrag { column, row }),
            MouseEventKind::Up(MouseButton::Left) => Some(Msg::PointerUp {
                target: target(),
                column,
                row,
            }),
            MouseEventKind::Moved => Some(Msg::PointerMove { target: target() }),
            MouseEventKind::ScrollUp => Some(Msg::ScrollUp),
            MouseEventKind::ScrollDown => Some(Msg::ScrollDown),
            _ => None,
        }
    }

    fn handle_modal_event(&mut self, event: &Event) {
        let dismiss = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.exit = true;
                    false
                }
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => true,
                _ => false,
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Up(MouseButton::Left) => {
                self.hits.hit_test(mouse.column, mouse.row).map(|hit| hit.action)
                    == Some(MouseAction::DismissModal)
            }
            Event::Resize(..) => {
                self.needs_redraw = true;
                false
            }
            _ => false,
        };
        if dismiss {
            debug!("notification dismissed");
            self.modal = None;
            self.needs_redraw = true;
        }
    }

    fn after_update(&mut self) {
        if self.modal.is_none() {
            self.modal = self.notifications.pop();
            if self.modal.is_some() {
                self.needs_redraw = true;
            }
        }
        if self.screen.take_needs_redraw() {
            self.needs_redraw = true;
        }
        if self.screen.take_exit_request() {
            self.exit = true;
        }
    }
}

/// Run the selected screen on the real terminal until the user quits.
pub fn run_cards(deps: CardsDependencies) -> anyhow::Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    terminal::setup_terminal(TerminalConfig::default().with_running_flag(running.clone()))?;
    let result = event_loop(&deps, running);
    terminal::cleanup_terminal();
    result
}

fn spawn_input_reader(tx: chan::Sender<Event>, gate: InputGate, running: Arc<AtomicBool>) {
    thread::spawn(move || {
        while running.load(Ordering::SeqCst) {
            if gate.is_paused() {
                thread::sleep(INPUT_POLL_INTERVAL);
                continue;
            }
            match crossterm::event::poll(INPUT_POLL_INTERVAL) {
                Ok(true) => match crossterm::event::read() {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

fn event_loop(deps: &CardsDependencies, running: Arc<AtomicBool>) -> anyhow::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let mut app = CardsApp::new(deps);

    let (tx_ev, rx_ev) = chan::unbounded::<Event>();
    let rx_tick = chan::tick(Duration::from_millis(deps.config.animation.tick_ms.max(1)));
    spawn_input_reader(tx_ev, deps.input_gate.clone(), running.clone());

    let mut last_tick = Instant::now();
    info!(screen = ?deps.config.screen, "dare cards started");

    while running.load(Ordering::SeqCst) && !app.should_exit() {
        chan::select_biased! {
            recv(rx_ev) -> msg => {
                let Ok(event) = msg else { break };
                trace!(?event, "terminal event");
                app.handle_event(event);
            }
            recv(rx_tick) -> msg => {
                let now = msg.unwrap_or_else(|_| Instant::now());
                app.tick(now.saturating_duration_since(last_tick));
                last_tick = now;
            }
        }

        if deps.input_gate.take_screen_lost() {
            terminal.clear()?;
            app.needs_redraw = true;
        }
        if app.needs_redraw() {
            terminal.draw(|frame| app.render(frame))?;
        }
    }

    running.store(false, Ordering::SeqCst);
    info!("dare cards exiting");
    Ok(())
}
