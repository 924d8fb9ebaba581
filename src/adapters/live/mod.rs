//! Live adapters backed by the real system.

pub mod clock;
pub mod filesystem;

pub use clock::SystemClock;
pub use filesystem::LiveFileSystem;
