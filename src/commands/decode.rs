//! `navargs decode` command.

use std::path::Path;

use crate::adapters::Bundle;
use crate::args::{decode, ArgumentSet};
use crate::context::ServiceContext;
use crate::screens::Screen;

/// Execute the `decode` command.
///
/// Reads a JSON container from `input`, decodes it against the screen's
/// schema, and prints the resulting arguments and their hash.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or parsed, or if the
/// container violates the schema.
pub fn run(ctx: &ServiceContext, screen: Screen, input: &Path) -> Result<(), String> {
    let text = ctx
        .fs
        .read_to_string(input)
        .map_err(|e| format!("Failed to read container {}: {e}", input.display()))?;
    let bundle = Bundle::from_json(&text)?;
    let args = decode(&bundle, screen.schema()).map_err(|e| e.to_string())?;
    print_args(&args);
    Ok(())
}

/// Prints decoded arguments in `Display` form followed by their hash.
pub(crate) fn print_args(args: &ArgumentSet<'_>) {
    println!("{args}");
    println!("hash: {}", args.hash_code());
}
