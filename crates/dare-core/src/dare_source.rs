// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Data Source - Abstract record provider
//!
//! The `DareSource` trait stands in for a future data-fetching backend. The
//! screens call it once when they are built; the returned sequences are
//! finite, already resolved, and owned by the caller.

use dare_domain_types::{Achievement, Dare};

pub trait DareSource: Send + Sync {
    /// Dares whose status is `completed`, in display order
    fn list_completed_dares(&self) -> Vec<Dare>;

    /// Reward records for the results screen
    fn list_achievements(&self) -> Vec<Achievement>;

    /// Human-readable description of this source
    fn description(&self) -> &str;
}
