//! Per-screen argument records and the screen registry.

mod camera;
mod image_viewer;

pub use camera::{CameraArgs, CameraArgsBuilder, CAMERA_ID, PIXEL_FORMAT};
pub use image_viewer::{ImageViewerArgs, ImageViewerArgsBuilder, DEPTH, FILE_PATH, ORIENTATION};

use clap::ValueEnum;

use crate::args::{NavArgs, Schema};

/// Screens that accept navigation arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// Live camera preview and capture.
    Camera,
    /// Viewer for a captured image.
    ImageViewer,
}

impl Screen {
    /// The argument schema for this screen.
    #[must_use]
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Camera => CameraArgs::schema(),
            Self::ImageViewer => ImageViewerArgs::schema(),
        }
    }
}
