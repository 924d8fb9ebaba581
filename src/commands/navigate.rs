//! `navargs navigate` command.

use serde_json::json;

use crate::cli::ActionName;
use crate::config::NavConfig;
use crate::directions::Action;
use crate::screens::CameraArgs;

/// Execute the `navigate` command.
///
/// Resolves the action against the configured resource namespace and prints
/// the action id and payload as JSON.
///
/// # Errors
///
/// Returns an error string if camera arguments are missing for
/// `selector-to-camera` or the namespace does not define the action.
pub fn run(
    config: &NavConfig,
    action: ActionName,
    camera_id: Option<&str>,
    pixel_format: Option<i32>,
) -> Result<(), String> {
    let action = to_action(action, camera_id, pixel_format)?;
    let directions = action.resolve(&config.namespace).map_err(|e| e.to_string())?;
    let output = json!({
        "action": action.name(),
        "action_id": directions.action_id,
        "arguments": directions.arguments,
    });
    let text = serde_json::to_string_pretty(&output)
        .map_err(|e| format!("Failed to serialize directions: {e}"))?;
    println!("{text}");
    Ok(())
}

fn to_action(
    action: ActionName,
    camera_id: Option<&str>,
    pixel_format: Option<i32>,
) -> Result<Action, String> {
    match action {
        ActionName::CameraToPermissions => Ok(Action::CameraToPermissions),
        ActionName::PermissionsToSelector => Ok(Action::PermissionsToSelector),
        ActionName::SelectorToCamera => match (camera_id, pixel_format) {
            (Some(camera_id), Some(pixel_format)) => Ok(Action::SelectorToCamera {
                args: CameraArgs::builder(camera_id, pixel_format).build(),
            }),
            _ => Err("selector-to-camera needs --camera-id and --pixel-format".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::directions::{Flavor, ResourceNamespace};

    fn config(namespace: ResourceNamespace) -> NavConfig {
        NavConfig { namespace, state_dir: PathBuf::from("/state") }
    }

    #[test]
    fn navigate_resolves_builtin_action() {
        let config = config(ResourceNamespace::builtin(Flavor::Pani));
        assert!(run(&config, ActionName::CameraToPermissions, None, None).is_ok());
    }

    #[test]
    fn navigate_requires_camera_args() {
        let config = config(ResourceNamespace::builtin(Flavor::Pani));
        let err = run(&config, ActionName::SelectorToCamera, Some("0"), None).unwrap_err();
        assert!(err.contains("--pixel-format"));
    }

    #[test]
    fn navigate_reports_unknown_action() {
        let config = config(ResourceNamespace::from_yaml("actions: {}\n").unwrap());
        let err = run(&config, ActionName::PermissionsToSelector, None, None).unwrap_err();
        assert!(err.contains("action_permissions_to_selector"));
    }

    #[test]
    fn to_action_builds_camera_args() {
        let action = to_action(ActionName::SelectorToCamera, Some("1"), Some(35)).unwrap();
        assert_eq!(
            action,
            Action::SelectorToCamera { args: CameraArgs::builder("1", 35).build() }
        );
    }
}
