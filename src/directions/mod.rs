//! Named screen transitions.
//!
//! A direction pairs an action identifier, looked up in an injected
//! [`ResourceNamespace`], with the argument payload for the destination.

mod namespace;

pub use namespace::{ActionId, Flavor, ResourceNamespace};

use serde::Serialize;
use tracing::debug;

use crate::adapters::Bundle;
use crate::args::{ArgsError, NavArgs};
use crate::screens::CameraArgs;

/// A transition between two screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Camera screen to the permissions prompt.
    CameraToPermissions,
    /// Permissions prompt to the camera selector.
    PermissionsToSelector,
    /// Camera selector to the camera screen, opening the chosen camera.
    SelectorToCamera {
        /// Arguments for the camera screen.
        args: CameraArgs,
    },
}

impl Action {
    /// Resource name of the action.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CameraToPermissions => "action_camera_to_permissions",
            Self::PermissionsToSelector => "action_permissions_to_selector",
            Self::SelectorToCamera { .. } => "action_selector_to_camera",
        }
    }

    /// Resolves the action against `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::UnknownAction`] if the namespace lacks the action.
    pub fn resolve(&self, namespace: &ResourceNamespace) -> Result<NavDirections, ArgsError> {
        let action_id = namespace.resolve(self.name())?;
        let arguments = match self {
            Self::CameraToPermissions | Self::PermissionsToSelector => Bundle::new(),
            Self::SelectorToCamera { args } => args.to_bundle(),
        };
        debug!(action = self.name(), %action_id, "resolved direction");
        Ok(NavDirections { action_id, arguments })
    }
}

/// A resolved transition ready to hand to the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavDirections {
    /// Identifier of the action in the active namespace.
    pub action_id: ActionId,
    /// Payload for the destination; empty for action-only directions.
    pub arguments: Bundle,
}
