//! `navargs schema` command.

use crate::args::FieldSpec;
use crate::screens::Screen;

/// Execute the `schema` command.
///
/// Prints a table of the screen's fields in declaration order.
///
/// # Errors
///
/// Returns an error string if the schema fails its own invariants.
pub fn run(screen: Screen) -> Result<(), String> {
    let schema = screen.schema();
    schema.validate().map_err(|e| e.to_string())?;

    let rows: Vec<(String, String, String, String)> =
        schema.fields.iter().map(row).collect();

    // Calculate column widths.
    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(5).max(5);
    let type_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(4).max(4);
    let req_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(8).max(8);

    println!("{}", schema.name);
    println!(
        "{:<name_width$}  {:<type_width$}  {:<req_width$}  DEFAULT",
        "FIELD", "TYPE", "REQUIRED",
    );
    println!("{:-<name_width$}  {:-<type_width$}  {:-<req_width$}  -------", "", "", "");
    for (name, field_type, required, default) in &rows {
        println!("{name:<name_width$}  {field_type:<type_width$}  {required:<req_width$}  {default}");
    }
    Ok(())
}

fn row(field: &FieldSpec) -> (String, String, String, String) {
    let field_type = if field.nullable {
        format!("{}?", field.field_type)
    } else {
        field.field_type.to_string()
    };
    let required = if field.required { "yes" } else { "no" };
    let default = field.default.as_ref().map_or_else(|| "-".to_string(), ToString::to_string);
    (field.name.to_string(), field_type, required.to_string(), default)
}
