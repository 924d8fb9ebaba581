//! Command dispatch and handlers.

pub mod decode;
pub mod encode;
pub mod navigate;
pub mod schema;
pub mod state;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::args::{ArgsError, ArgumentSet, ArgumentSetBuilder, Schema, Value};
use crate::cli::{Cli, Command};
use crate::config::NavConfig;
use crate::context::ServiceContext;
use crate::screens::Screen;

/// Dispatch a parsed command line to its handler.
///
/// # Errors
///
/// Returns an error string if configuration loading or the selected command
/// handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let config = NavConfig::from_env(&ctx, cli.flavor)?;
    dispatch_with_context(&cli.command, &ctx, &config)
}

/// Dispatch a command with the given service context and configuration.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &NavConfig,
) -> Result<(), String> {
    match command {
        Command::Schema { screen } => schema::run(*screen),
        Command::Decode { screen, input } => decode::run(ctx, *screen, input),
        Command::Encode { screen, assignments } => encode::run(*screen, assignments),
        Command::Save { screen, assignments, state } => {
            let path = state_path(config, *screen, state.as_deref());
            state::save(ctx, *screen, assignments, &path)
        }
        Command::Restore { screen, state } => {
            let path = state_path(config, *screen, state.as_deref());
            state::restore(ctx, *screen, &path)
        }
        Command::Navigate { action, camera_id, pixel_format } => {
            navigate::run(config, *action, camera_id.as_deref(), *pixel_format)
        }
    }
}

fn state_path(config: &NavConfig, screen: Screen, explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(
        || {
            let name = match screen {
                Screen::Camera => "camera.json",
                Screen::ImageViewer => "image_viewer.json",
            };
            config.state_dir.join(name)
        },
        Path::to_path_buf,
    )
}

/// Builds an argument set from `KEY=VALUE` assignments.
///
/// Required fields seed the builder in schema order; the remaining
/// assignments are applied with `set`.
///
/// # Errors
///
/// Returns an error string for malformed assignments, unknown keys, values
/// that do not parse as the field's type, or codec violations.
pub fn build_from_assignments<'s>(
    schema: &'s Schema,
    assignments: &[String],
) -> Result<ArgumentSet<'s>, String> {
    let mut staged: HashMap<&str, Value> = HashMap::new();
    for assignment in assignments {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| format!("Expected KEY=VALUE, got {assignment:?}"))?;
        let field = schema
            .field(key)
            .ok_or_else(|| ArgsError::UnknownField(key.to_string()).to_string())?;
        staged.insert(field.name, Value::parse_as(field.field_type, raw)?);
    }

    let mut required = Vec::new();
    for field in schema.required_fields() {
        let value = staged
            .remove(field.name)
            .ok_or_else(|| ArgsError::MissingRequiredField(field.name.to_string()).to_string())?;
        required.push(value);
    }

    let mut builder = ArgumentSetBuilder::new(schema, required).map_err(|e| e.to_string())?;
    for field in &schema.fields {
        if let Some(value) = staged.remove(field.name) {
            builder.set(field.name, value).map_err(|e| e.to_string())?;
        }
    }
    Ok(builder.build())
}
