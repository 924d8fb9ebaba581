//! Statically typed argument records built on the codec.

use super::codec::{decode, ArgumentSet};
use super::error::ArgsError;
use super::schema::Schema;
use crate::adapters::bundle::Bundle;
use crate::adapters::saved_state::SavedStateHandle;
use crate::ports::container::Container;

/// A typed record for one screen's arguments.
///
/// Implementors supply the schema and the conversion from a decoded
/// [`ArgumentSet`]; container I/O always goes through the codec.
pub trait NavArgs: Sized {
    /// The schema this record is decoded against.
    fn schema() -> &'static Schema;

    /// Converts a decoded argument set into the typed record.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is absent or has the wrong type.
    fn from_argument_set(args: &ArgumentSet<'_>) -> Result<Self, ArgsError>;

    /// Converts the typed record into an argument set.
    fn to_argument_set(&self) -> ArgumentSet<'static>;

    /// Decodes the record from any container.
    ///
    /// # Errors
    ///
    /// Propagates the codec's decode errors.
    fn from_container(container: &dyn Container) -> Result<Self, ArgsError> {
        let args = decode(container, Self::schema())?;
        Self::from_argument_set(&args)
    }

    /// Encodes the record into `container`.
    fn to_container(&self, container: &mut dyn Container) {
        self.to_argument_set().encode(container);
    }

    /// Decodes the record from a transition payload.
    ///
    /// # Errors
    ///
    /// Propagates the codec's decode errors.
    fn from_bundle(bundle: &Bundle) -> Result<Self, ArgsError> {
        Self::from_container(bundle)
    }

    /// Decodes the record from saved state.
    ///
    /// # Errors
    ///
    /// Propagates the codec's decode errors.
    fn from_saved_state(handle: &SavedStateHandle) -> Result<Self, ArgsError> {
        Self::from_container(handle)
    }

    /// Encodes the record into a fresh transition payload.
    fn to_bundle(&self) -> Bundle {
        self.to_argument_set().to_bundle()
    }

    /// Encodes the record into a fresh saved-state handle.
    fn to_saved_state(&self) -> SavedStateHandle {
        self.to_argument_set().to_saved_state()
    }
}
