//! Typed navigation arguments: a schema-driven codec between strongly typed
//! argument records and untyped key-value containers.

pub mod adapters;
pub mod args;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod directions;
pub mod ports;
pub mod screens;

#[cfg(test)]
mod test_support;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_schema() {
        let result = run(["navargs", "schema", "camera"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["navargs", "unknown"]);
        assert!(result.is_err());
    }
}
