// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use thiserror::Error;

/// Pointer events that do not fit the card's current gesture state.
///
/// These are never fatal: the card view models log them and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GestureStateError {
    #[error("release received without a preceding press")]
    ReleaseWithoutPress,
    #[error("drag received without a preceding press")]
    DragWithoutPress,
    #[error("card already committed to leave the list")]
    CardCommitted,
}
