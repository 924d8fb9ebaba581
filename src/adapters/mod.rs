//! Adapter implementations of the port traits.
//!
//! - `bundle` / `saved_state`: the two `Container` implementations.
//! - `live`: real filesystem and system clock.

pub mod bundle;
pub mod live;
pub mod saved_state;

pub use bundle::Bundle;
pub use saved_state::SavedStateHandle;
