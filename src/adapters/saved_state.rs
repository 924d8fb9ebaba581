//! Saved-state container that survives a process restart.
//!
//! The handle behaves like a [`Bundle`](super::bundle::Bundle) in memory and
//! can be persisted to a JSON snapshot through the `FileSystem` port:
//!
//! ```text
//! { "saved_at": "2025-03-15T14:30:00Z", "values": { "camera_id": "0" } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::Value;
use crate::context::ServiceContext;
use crate::ports::container::Container;

/// Restart-survivable key-value state for one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedStateHandle {
    values: BTreeMap<String, Value>,
}

/// On-disk form of a saved-state handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
    /// Stored values.
    pub values: BTreeMap<String, Value>,
}

impl SavedStateHandle {
    /// Creates an empty handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the handle to `path` as a JSON snapshot stamped by `ctx.clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn persist(&self, ctx: &ServiceContext, path: &Path) -> Result<(), String> {
        let snapshot = Snapshot { saved_at: ctx.clock.now(), values: self.values.clone() };
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| format!("Failed to serialize saved state: {e}"))?;
        ctx.fs
            .write(path, &json)
            .map_err(|e| format!("Failed to write saved state {}: {e}", path.display()))?;
        debug!(path = %path.display(), keys = self.values.len(), "persisted saved state");
        Ok(())
    }

    /// Reads a handle back from a snapshot written by [`persist`](Self::persist).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn restore(ctx: &ServiceContext, path: &Path) -> Result<(Self, DateTime<Utc>), String> {
        let contents = ctx
            .fs
            .read_to_string(path)
            .map_err(|e| format!("Failed to read saved state {}: {e}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse saved state {}: {e}", path.display()))?;
        debug!(path = %path.display(), keys = snapshot.values.len(), "restored saved state");
        Ok((Self { values: snapshot.values }, snapshot.saved_at))
    }
}

impl Container for SavedStateHandle {
    fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn put(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
