// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Proof submission for dares without a recorded winner
//!
//! "Add Proof" asks a [`FilePicker`] for a local file and hands the result
//! to a [`ProofUploader`]. A cancelled picker is not an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

pub trait FilePicker: Send + Sync {
    /// Ask the user for a file; `None` means the prompt was cancelled.
    fn pick_file(&self, title: &str) -> Option<PathBuf>;
}

/// Always answers with the same path (or always cancels)
#[derive(Debug, Clone, Default)]
pub struct FixedFilePicker {
    path: Option<PathBuf>,
}

impl FixedFilePicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self { path: None }
    }
}

impl FilePicker for FixedFilePicker {
    fn pick_file(&self, title: &str) -> Option<PathBuf> {
        debug!(title, path = ?self.path, "fixed file picker");
        self.path.clone()
    }
}

#[derive(Debug, Error)]
pub enum ProofError {
    #[error("proof file {path} could not be read: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("proof path {0} is not a regular file")]
    NotAFile(PathBuf),
    #[error("proof for dare {0} was already submitted")]
    AlreadySubmitted(String),
}

/// Acknowledgement of an accepted proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofReceipt {
    pub dare_id: String,
    pub file_name: String,
    pub size_bytes: u64,
    pub received_at: DateTime<Utc>,
}

pub trait ProofUploader: Send + Sync {
    fn upload(&self, dare_id: &str, path: &Path) -> Result<ProofReceipt, ProofError>;
}

/// Checks the file and keeps receipts in memory, one per dare
#[derive(Debug, Default)]
pub struct InMemoryProofUploader {
    receipts: Mutex<HashMap<String, ProofReceipt>>,
}

impl InMemoryProofUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receipt_for(&self, dare_id: &str) -> Option<ProofReceipt> {
        self.receipts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(dare_id)
            .cloned()
    }
}

impl ProofUploader for InMemoryProofUploader {
    fn upload(&self, dare_id: &str, path: &Path) -> Result<ProofReceipt, ProofError> {
        let metadata = std::fs::metadata(path).map_err(|source| ProofError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ProofError::NotAFile(path.to_path_buf()));
        }

        let mut receipts = self.receipts.lock().unwrap_or_else(PoisonError::into_inner);
        if receipts.contains_key(dare_id) {
            return Err(ProofError::AlreadySubmitted(dare_id.to_string()));
        }

        let receipt = ProofReceipt {
            dare_id: dare_id.to_string(),
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size_bytes: metadata.len(),
            received_at: Utc::now(),
        };
        info!(dare_id, file = %receipt.file_name, size = receipt.size_bytes, "proof accepted");
        receipts.insert(dare_id.to_string(), receipt.clone());
        Ok(receipt)
    }
}
