//! Snapshot persistence gateway.
//!
//! # Responsibility
//! - Define the load/save contract for the complete tracker snapshot.
//! - Keep document format details behind the gateway boundary.
//!
//! # Invariants
//! - `save` always writes the complete snapshot, never a partial diff.
//! - `load` surfaces corrupt documents as errors instead of masking
//!   them.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::snapshot::Snapshot;

pub mod json_store;

pub use json_store::JsonSnapshotStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Gateway error for snapshot persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying filesystem failure.
    Io(std::io::Error),
    /// The persisted document does not parse as a snapshot.
    InvalidDocument(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot i/o failure: {err}"),
            Self::InvalidDocument(err) => write!(f, "invalid snapshot document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidDocument(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidDocument(value)
    }
}

/// Gateway contract for persisting the full tracker snapshot.
pub trait SnapshotStore {
    /// Loads the persisted snapshot, or `None` when no document exists
    /// yet.
    fn load(&self) -> StoreResult<Option<Snapshot>>;

    /// Replaces the persisted document with `snapshot` in full.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()>;
}
