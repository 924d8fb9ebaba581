//! `navargs save` and `navargs restore` commands.

use std::path::Path;

use crate::adapters::SavedStateHandle;
use crate::args::decode;
use crate::context::ServiceContext;
use crate::screens::Screen;

use super::build_from_assignments;
use super::decode::print_args;

/// Execute the `save` command.
///
/// Builds the screen's arguments and persists them as a saved-state
/// snapshot at `path`.
///
/// # Errors
///
/// Returns an error string if the arguments are invalid or the snapshot
/// cannot be written.
pub fn save(
    ctx: &ServiceContext,
    screen: Screen,
    assignments: &[String],
    path: &Path,
) -> Result<(), String> {
    let args = build_from_assignments(screen.schema(), assignments)?;
    args.to_saved_state().persist(ctx, path)?;
    println!("Saved {args} to {}", path.display());
    Ok(())
}

/// Execute the `restore` command.
///
/// Reads the snapshot at `path` and decodes it against the screen's schema.
///
/// # Errors
///
/// Returns an error string if the snapshot cannot be read or violates the
/// schema.
pub fn restore(ctx: &ServiceContext, screen: Screen, path: &Path) -> Result<(), String> {
    let (handle, saved_at) = SavedStateHandle::restore(ctx, path)?;
    let args = decode(&handle, screen.schema()).map_err(|e| e.to_string())?;
    println!("saved at: {}", saved_at.to_rfc3339());
    print_args(&args);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedClock, MemFs};

    fn ctx() -> ServiceContext {
        ServiceContext::with_ports(
            Box::new(MemFs::new()),
            Box::new(FixedClock::at("2025-03-15T14:30:00Z")),
        )
    }

    #[test]
    fn save_then_restore_succeeds() {
        let ctx = ctx();
        let path = Path::new("/state/camera.json");
        let assignments = vec!["camera_id=0".to_string(), "pixel_format=35".to_string()];

        save(&ctx, Screen::Camera, &assignments, path).unwrap();
        assert!(ctx.fs.exists(path));
        assert!(restore(&ctx, Screen::Camera, path).is_ok());
    }

    #[test]
    fn restore_against_other_schema_fails() {
        let ctx = ctx();
        let path = Path::new("/state/camera.json");
        let assignments = vec!["camera_id=0".to_string(), "pixel_format=35".to_string()];
        save(&ctx, Screen::Camera, &assignments, path).unwrap();

        let err = restore(&ctx, Screen::ImageViewer, path).unwrap_err();
        assert!(err.contains("file_path"));
    }

    #[test]
    fn save_rejects_invalid_assignments() {
        let ctx = ctx();
        let path = Path::new("/state/camera.json");
        assert!(save(&ctx, Screen::Camera, &[], path).is_err());
        assert!(!ctx.fs.exists(path));
    }
}
