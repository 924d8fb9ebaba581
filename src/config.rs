//! Runtime configuration from the environment.
//!
//! Variables (a `.env` file in the working directory is loaded first):
//!
//! - `NAVARGS_RESOURCES`: path to a YAML resource namespace. Takes
//!   precedence over the flavor.
//! - `NAVARGS_FLAVOR`: built-in flavor (`pani` or `basic`), default `pani`.
//! - `NAVARGS_STATE_DIR`: directory for saved-state snapshots, default
//!   `.navargs/state`.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::context::ServiceContext;
use crate::directions::{Flavor, ResourceNamespace};

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Source of action identifiers.
    pub namespace: ResourceNamespace,
    /// Directory holding saved-state snapshots.
    pub state_dir: PathBuf,
}

impl NavConfig {
    /// Loads configuration from the process environment.
    ///
    /// `flavor_override` (from the command line) wins over `NAVARGS_FLAVOR`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the flavor is unknown or the namespace file
    /// cannot be read or parsed.
    pub fn from_env(ctx: &ServiceContext, flavor_override: Option<Flavor>) -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_vars(ctx, flavor_override, |key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_vars<F>(
        ctx: &ServiceContext,
        flavor_override: Option<Flavor>,
        var: F,
    ) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = match var("NAVARGS_RESOURCES") {
            Some(path) if flavor_override.is_none() => {
                let path = PathBuf::from(path);
                let text = ctx
                    .fs
                    .read_to_string(&path)
                    .map_err(|e| format!("Failed to read resources {}: {e}", path.display()))?;
                ResourceNamespace::from_yaml(&text)?
            }
            _ => {
                let flavor = match (flavor_override, var("NAVARGS_FLAVOR")) {
                    (Some(flavor), _) => flavor,
                    (None, Some(name)) => Flavor::from_str(&name, true)
                        .map_err(|_| format!("Unknown flavor in NAVARGS_FLAVOR: {name}"))?,
                    (None, None) => Flavor::Pani,
                };
                ResourceNamespace::builtin(flavor)
            }
        };
        let state_dir = var("NAVARGS_STATE_DIR")
            .map_or_else(|| PathBuf::from(".navargs").join("state"), PathBuf::from);
        Ok(Self { namespace, state_dir })
    }
}
