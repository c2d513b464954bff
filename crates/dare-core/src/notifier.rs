// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Notifier - "show a message" host capability
//!
//! Swipe commits and the Post action confirm themselves through a
//! notifier. The terminal front end uses [`QueueNotifier`] and shows each
//! queued message as a modal; tests use [`RecordingNotifier`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

/// One message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn show_message(&self, title: &str, body: &str);
}

/// Keeps every message in call order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Notification> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Notifier for RecordingNotifier {
    fn show_message(&self, title: &str, body: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notification::new(title, body));
    }
}

/// FIFO shared between the view models (producers) and the event loop,
/// which pops one message at a time into a modal.
#[derive(Debug, Clone, Default)]
pub struct QueueNotifier {
    queue: Arc<Mutex<VecDeque<Notification>>>,
}

impl QueueNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&self) -> Option<Notification> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl Notifier for QueueNotifier {
    fn show_message(&self, title: &str, body: &str) {
        info!(title, body, "queueing notification");
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Notification::new(title, body));
    }
}

/// Writes messages to the log only
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_message(&self, title: &str, body: &str) {
        info!(title, body, "notification");
    }
}
