//! Arguments for the image viewer screen.

use std::fmt;
use std::sync::OnceLock;

use crate::args::{ArgsError, ArgumentSet, FieldSpec, FieldType, NavArgs, Schema, Value};

/// Container key for the image file path.
pub const FILE_PATH: &str = "file_path";
/// Container key for the display rotation in degrees.
pub const ORIENTATION: &str = "orientation";
/// Container key for the depth-image flag.
pub const DEPTH: &str = "depth";

const DEFAULT_ORIENTATION: i32 = 0;
const DEFAULT_DEPTH: bool = false;

/// Arguments the image viewer is opened with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageViewerArgs {
    /// Absolute path of the captured image.
    pub file_path: String,
    /// Rotation to apply when displaying, in degrees.
    pub orientation: i32,
    /// Whether the image is a depth map.
    pub depth: bool,
}

impl ImageViewerArgs {
    /// Starts a builder; optional fields take their defaults unless set.
    #[must_use]
    pub fn builder(file_path: impl Into<String>) -> ImageViewerArgsBuilder {
        ImageViewerArgsBuilder { file_path: file_path.into(), orientation: None, depth: None }
    }
}

impl NavArgs for ImageViewerArgs {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new(
                "ImageViewerFragmentArgs",
                vec![
                    FieldSpec::required(FILE_PATH, FieldType::String),
                    FieldSpec::optional(
                        ORIENTATION,
                        FieldType::Int,
                        Value::Int(DEFAULT_ORIENTATION),
                    ),
                    FieldSpec::optional(DEPTH, FieldType::Bool, Value::Bool(DEFAULT_DEPTH)),
                ],
            )
        })
    }

    fn from_argument_set(args: &ArgumentSet<'_>) -> Result<Self, ArgsError> {
        Ok(Self {
            file_path: args.string(FILE_PATH)?.to_string(),
            orientation: args.int(ORIENTATION)?,
            depth: args.bool(DEPTH)?,
        })
    }

    fn to_argument_set(&self) -> ArgumentSet<'static> {
        ArgumentSet::from_parts(
            Self::schema(),
            vec![
                Some(Value::from(self.file_path.as_str())),
                Some(Value::Int(self.orientation)),
                Some(Value::Bool(self.depth)),
            ],
        )
    }
}

impl fmt::Display for ImageViewerArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_argument_set(), f)
    }
}

/// Builder for [`ImageViewerArgs`].
#[derive(Debug, Clone)]
pub struct ImageViewerArgsBuilder {
    file_path: String,
    orientation: Option<i32>,
    depth: Option<bool>,
}

impl ImageViewerArgsBuilder {
    /// Replaces the file path.
    #[must_use]
    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = file_path.into();
        self
    }

    /// Sets the display rotation.
    #[must_use]
    pub fn orientation(mut self, orientation: i32) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Sets the depth flag.
    #[must_use]
    pub fn depth(mut self, depth: bool) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Produces the immutable arguments, filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> ImageViewerArgs {
        ImageViewerArgs {
            file_path: self.file_path,
            orientation: self.orientation.unwrap_or(DEFAULT_ORIENTATION),
            depth: self.depth.unwrap_or(DEFAULT_DEPTH),
        }
    }
}

impl From<&ImageViewerArgs> for ImageViewerArgsBuilder {
    fn from(original: &ImageViewerArgs) -> Self {
        Self {
            file_path: original.file_path.clone(),
            orientation: Some(original.orientation),
            depth: Some(original.depth),
        }
    }
}
