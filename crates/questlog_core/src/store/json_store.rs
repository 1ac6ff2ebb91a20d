//! JSON-file snapshot store.
//!
//! # Responsibility
//! - Persist the tracker snapshot as one JSON document on disk.
//!
//! # Invariants
//! - A missing document loads as `None`; the caller decides the default.
//! - Serialization is deterministic, so saving an unchanged snapshot
//!   rewrites identical bytes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, error};

use super::{SnapshotStore, StoreResult};
use crate::model::snapshot::Snapshot;

/// Snapshot store backed by a single JSON file.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a store reading and writing `path`.
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path this store operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=snapshot_load module=store status=empty path={}",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=snapshot_load module=store status=error error_code=read_failed error={err}"
                );
                return Err(err.into());
            }
        };

        let snapshot = serde_json::from_slice(&bytes).map_err(|err| {
            error!(
                "event=snapshot_load module=store status=error error_code=invalid_document error={err}"
            );
            err
        })?;

        debug!(
            "event=snapshot_load module=store status=ok path={}",
            self.path.display()
        );
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let document = serde_json::to_vec(snapshot)?;
        fs::write(&self.path, document).map_err(|err| {
            error!(
                "event=snapshot_save module=store status=error error_code=write_failed error={err}"
            );
            err
        })?;

        debug!(
            "event=snapshot_save module=store status=ok path={}",
            self.path.display()
        );
        Ok(())
    }
}
