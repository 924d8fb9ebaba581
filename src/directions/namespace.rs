//! Resource namespaces mapping action names to numeric identifiers.
//!
//! Each build flavor ships its own identifiers for the same actions. The
//! namespace is supplied at run time, either from a YAML file:
//!
//! ```yaml
//! flavor: pani
//! actions:
//!   action_camera_to_permissions: 2131230776
//!   action_permissions_to_selector: 2131230778
//! ```
//!
//! or from one of the built-in flavors.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::args::ArgsError;

/// Numeric identifier of a navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub i32);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Built-in build flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    /// The capture app.
    Pani,
    /// The basic camera sample.
    Basic,
}

/// Action-name to identifier table for one flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNamespace {
    /// Flavor label, informational only.
    #[serde(default)]
    pub flavor: Option<String>,
    /// Action identifiers keyed by action name.
    pub actions: BTreeMap<String, ActionId>,
}

impl ResourceNamespace {
    /// The identifier table compiled for a built-in flavor.
    #[must_use]
    pub fn builtin(flavor: Flavor) -> Self {
        let base = match flavor {
            Flavor::Pani => 0x7f08_0038,
            Flavor::Basic => 0x7f09_0010,
        };
        let actions = [
            "action_camera_to_permissions",
            "action_permissions_to_selector",
            "action_selector_to_camera",
        ]
        .into_iter()
        .zip(base..)
        .map(|(name, id)| (name.to_string(), ActionId(id)))
        .collect();
        let label = match flavor {
            Flavor::Pani => "pani",
            Flavor::Basic => "basic",
        };
        Self { flavor: Some(label.to_string()), actions }
    }

    /// Parses a namespace from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error string if the YAML is malformed.
    pub fn from_yaml(text: &str) -> Result<Self, String> {
        serde_yaml::from_str(text).map_err(|e| format!("Failed to parse resource namespace: {e}"))
    }

    /// Looks up the identifier for `action`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::UnknownAction`] if the namespace lacks the name.
    pub fn resolve(&self, action: &str) -> Result<ActionId, ArgsError> {
        self.actions
            .get(action)
            .copied()
            .ok_or_else(|| ArgsError::UnknownAction(action.to_string()))
    }
}
