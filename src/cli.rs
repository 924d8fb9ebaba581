//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::directions::Flavor;
use crate::screens::Screen;

/// Top-level CLI parser for `navargs`.
#[derive(Debug, Parser)]
#[command(name = "navargs", version, about = "Inspect and exercise navigation argument schemas")]
pub struct Cli {
    /// Built-in resource flavor; overrides `NAVARGS_RESOURCES`.
    #[arg(long, global = true, value_enum)]
    pub flavor: Option<Flavor>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a screen's argument schema.
    Schema {
        /// Screen whose schema to print.
        #[arg(value_enum)]
        screen: Screen,
    },
    /// Decode a JSON container against a screen's schema.
    Decode {
        /// Screen whose schema to decode against.
        #[arg(value_enum)]
        screen: Screen,
        /// Path to a JSON object holding the container entries.
        #[arg(long)]
        input: PathBuf,
    },
    /// Build arguments from `KEY=VALUE` pairs and print the encoded container.
    Encode {
        /// Screen whose schema to build.
        #[arg(value_enum)]
        screen: Screen,
        /// Field assignments; required fields must be given. `null` stores a
        /// null; write `\null` for the literal string.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },
    /// Build arguments and persist them as a saved-state snapshot.
    Save {
        /// Screen whose schema to build.
        #[arg(value_enum)]
        screen: Screen,
        /// Field assignments; required fields must be given. `null` stores a
        /// null; write `\null` for the literal string.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        assignments: Vec<String>,
        /// Snapshot path; defaults to `<state dir>/<screen>.json`.
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Restore a saved-state snapshot and decode it.
    Restore {
        /// Screen whose schema to decode against.
        #[arg(value_enum)]
        screen: Screen,
        /// Snapshot path; defaults to `<state dir>/<screen>.json`.
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Resolve a direction to its action id and payload.
    Navigate {
        /// Transition to resolve.
        #[arg(value_enum)]
        action: ActionName,
        /// Camera to open (selector-to-camera only).
        #[arg(long, required_if_eq("action", "selector-to-camera"))]
        camera_id: Option<String>,
        /// Pixel format to capture in (selector-to-camera only).
        #[arg(long, required_if_eq("action", "selector-to-camera"))]
        pixel_format: Option<i32>,
    },
}

/// Transition names accepted by `navigate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionName {
    /// Camera to permissions prompt.
    CameraToPermissions,
    /// Permissions prompt to camera selector.
    PermissionsToSelector,
    /// Camera selector to camera.
    SelectorToCamera,
}
