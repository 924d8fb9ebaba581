//! `navargs encode` command.

use crate::screens::Screen;

use super::build_from_assignments;

/// Execute the `encode` command.
///
/// Builds the screen's arguments from `KEY=VALUE` assignments and prints the
/// encoded container as JSON. Optional fields that were not assigned appear
/// with their defaults.
///
/// # Errors
///
/// Returns an error string if the assignments do not form a valid argument
/// set or serialization fails.
pub fn run(screen: Screen, assignments: &[String]) -> Result<(), String> {
    let args = build_from_assignments(screen.schema(), assignments)?;
    println!("{}", args.to_bundle().to_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_command_runs_with_required_fields() {
        let assignments = vec!["file_path=/a.jpg".to_string()];
        assert!(run(Screen::ImageViewer, &assignments).is_ok());
    }

    #[test]
    fn encode_command_fails_without_required_fields() {
        assert!(run(Screen::Camera, &[]).is_err());
    }
}
