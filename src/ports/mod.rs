//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the codec and an external
//! system (argument containers, time, filesystem). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod container;
pub mod filesystem;

pub use clock::Clock;
pub use container::Container;
pub use filesystem::FileSystem;
