//! Typed argument codec.
//!
//! Validates a schema of named, typed fields against an untyped container,
//! produces an immutable [`ArgumentSet`], and writes it back.

mod builder;
mod codec;
mod error;
mod nav_args;
mod schema;
mod value;

pub use builder::ArgumentSetBuilder;
pub use codec::{decode, ArgumentSet};
pub use error::ArgsError;
pub use nav_args::NavArgs;
pub use schema::{FieldSpec, Schema};
pub use value::{FieldType, Value};
