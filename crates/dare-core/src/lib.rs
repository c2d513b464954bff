// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Collaborators consumed by the dare cards UI.
//!
//! The view models never talk to a backend, a dialog toolkit or the file
//! system directly. They hold `Arc<dyn ...>` handles to the traits defined
//! here, which keeps them fully testable headless:
//!
//! - [`DareSource`]: the completed dares and achievements to show
//! - [`Notifier`]: blocking "show message" confirmations
//! - [`FilePicker`]: "pick a local file" for the Add Proof action
//! - [`ProofUploader`]: receives the picked proof file

pub mod dare_source;
pub mod mock_service;
pub mod notifier;
pub mod proof;

pub use dare_source::DareSource;
pub use mock_service::MockDareService;
pub use notifier::{LogNotifier, Notification, Notifier, QueueNotifier, RecordingNotifier};
pub use proof::{
    FilePicker, FixedFilePicker, InMemoryProofUploader, ProofError, ProofReceipt, ProofUploader,
};
