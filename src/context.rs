//! Service context bundling the port trait objects.

use crate::adapters::live::{LiveFileSystem, SystemClock};
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the external boundaries used by saved-state persistence.
///
/// Containers themselves are plain values; only snapshot I/O and
/// timestamps go through the context.
pub struct ServiceContext {
    /// Filesystem for snapshot I/O.
    pub fs: Box<dyn FileSystem>,
    /// Clock for stamping snapshots.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk and system clock.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), clock: Box::new(SystemClock) }
    }

    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn with_ports(fs: Box<dyn FileSystem>, clock: Box<dyn Clock>) -> Self {
        Self { fs, clock }
    }
}
