//! Arguments for the camera screen.

use std::fmt;
use std::sync::OnceLock;

use crate::args::{ArgsError, ArgumentSet, FieldSpec, FieldType, NavArgs, Schema, Value};

/// Container key for the camera identifier.
pub const CAMERA_ID: &str = "camera_id";
/// Container key for the output pixel format.
pub const PIXEL_FORMAT: &str = "pixel_format";

/// Arguments the camera screen is opened with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraArgs {
    /// Identifier of the camera device to open.
    pub camera_id: String,
    /// Platform pixel-format constant for captured images.
    pub pixel_format: i32,
}

impl CameraArgs {
    /// Starts a builder seeded with both required fields.
    #[must_use]
    pub fn builder(camera_id: impl Into<String>, pixel_format: i32) -> CameraArgsBuilder {
        CameraArgsBuilder { camera_id: camera_id.into(), pixel_format }
    }
}

impl NavArgs for CameraArgs {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new(
                "CameraFragmentArgs",
                vec![
                    FieldSpec::required(CAMERA_ID, FieldType::String),
                    FieldSpec::required(PIXEL_FORMAT, FieldType::Int),
                ],
            )
        })
    }

    fn from_argument_set(args: &ArgumentSet<'_>) -> Result<Self, ArgsError> {
        Ok(Self {
            camera_id: args.string(CAMERA_ID)?.to_string(),
            pixel_format: args.int(PIXEL_FORMAT)?,
        })
    }

    fn to_argument_set(&self) -> ArgumentSet<'static> {
        ArgumentSet::from_parts(
            Self::schema(),
            vec![Some(Value::from(self.camera_id.as_str())), Some(Value::Int(self.pixel_format))],
        )
    }
}

impl fmt::Display for CameraArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_argument_set(), f)
    }
}

/// Builder for [`CameraArgs`].
#[derive(Debug, Clone)]
pub struct CameraArgsBuilder {
    camera_id: String,
    pixel_format: i32,
}

impl CameraArgsBuilder {
    /// Replaces the camera identifier.
    #[must_use]
    pub fn camera_id(mut self, camera_id: impl Into<String>) -> Self {
        self.camera_id = camera_id.into();
        self
    }

    /// Replaces the pixel format.
    #[must_use]
    pub fn pixel_format(mut self, pixel_format: i32) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    /// Produces the immutable arguments.
    #[must_use]
    pub fn build(self) -> CameraArgs {
        CameraArgs { camera_id: self.camera_id, pixel_format: self.pixel_format }
    }
}

impl From<&CameraArgs> for CameraArgsBuilder {
    fn from(original: &CameraArgs) -> Self {
        Self { camera_id: original.camera_id.clone(), pixel_format: original.pixel_format }
    }
}
