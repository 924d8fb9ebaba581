//! Schema types: the ordered field contract of one screen.

use super::error::ArgsError;
use super::value::{FieldType, Value};

/// Specification of one named, typed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Container key (e.g. `camera_id`).
    pub name: &'static str,
    /// Declared type.
    pub field_type: FieldType,
    /// Whether decoding fails when the key is absent.
    pub required: bool,
    /// Value assigned when an optional key is absent.
    pub default: Option<Value>,
    /// Whether a null value is accepted.
    pub nullable: bool,
}

impl FieldSpec {
    /// A required, non-nullable field.
    #[must_use]
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type, required: true, default: None, nullable: false }
    }

    /// An optional, non-nullable field with a default.
    #[must_use]
    pub fn optional(name: &'static str, field_type: FieldType, default: Value) -> Self {
        Self { name, field_type, required: false, default: Some(default), nullable: false }
    }

    /// Marks the field as accepting null.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Checks that `value` is acceptable for this field.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::NullForNonNullable`] for a null on a non-nullable
    /// field, or [`ArgsError::TypeMismatch`] when the value has another type.
    pub fn check(&self, value: &Value) -> Result<(), ArgsError> {
        match value.field_type() {
            None if self.nullable => Ok(()),
            None => Err(ArgsError::NullForNonNullable(self.name.to_string())),
            Some(t) if t == self.field_type => Ok(()),
            Some(_) => Err(ArgsError::TypeMismatch {
                field: self.name.to_string(),
                expected: self.field_type,
                found: value.type_name(),
            }),
        }
    }

    /// The field name in camelCase, as used by `Display` output.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut upper = false;
        for c in self.name.chars() {
            if c == '_' {
                upper = true;
            } else if upper {
                out.extend(c.to_uppercase());
                upper = false;
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Ordered collection of field specs for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Name used in `Display` output (e.g. `CameraFragmentArgs`).
    pub name: &'static str,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Creates a schema from fields in declaration order.
    #[must_use]
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, fields }
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterates over the required fields in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Checks the schema invariants.
    ///
    /// Field names must be unique; every optional field must carry a default
    /// of its declared type.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::InvalidSchema`] describing the first violation.
    pub fn validate(&self) -> Result<(), ArgsError> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ArgsError::InvalidSchema(format!(
                    "{}: field \"{}\" is declared twice",
                    self.name, field.name
                )));
            }
            if field.required {
                continue;
            }
            match &field.default {
                None => {
                    return Err(ArgsError::InvalidSchema(format!(
                        "{}: optional field \"{}\" has no default",
                        self.name, field.name
                    )));
                }
                Some(default) => field.check(default).map_err(|e| {
                    ArgsError::InvalidSchema(format!(
                        "{}: default for \"{}\" is invalid ({e})",
                        self.name, field.name
                    ))
                })?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_camel_case() {
        let spec = FieldSpec::required("pixel_format", FieldType::Int);
        assert_eq!(spec.display_name(), "pixelFormat");
        let spec = FieldSpec::required("depth", FieldType::Bool);
        assert_eq!(spec.display_name(), "depth");
    }

    #[test]
    fn validate_accepts_well_formed_schema() {
        let schema = Schema::new(
            "Sample",
            vec![
                FieldSpec::required("id", FieldType::String),
                FieldSpec::optional("count", FieldType::Int, Value::Int(0)),
            ],
        );
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn validate_rejects_optional_without_default() {
        let mut field = FieldSpec::optional("count", FieldType::Int, Value::Int(0));
        field.default = None;
        let schema = Schema::new("Sample", vec![field]);
        assert!(matches!(schema.validate(), Err(ArgsError::InvalidSchema(_))));
    }

    #[test]
    fn validate_rejects_mistyped_default() {
        let schema = Schema::new(
            "Sample",
            vec![FieldSpec::optional("count", FieldType::Int, Value::Bool(false))],
        );
        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let schema = Schema::new(
            "Sample",
            vec![
                FieldSpec::required("id", FieldType::String),
                FieldSpec::required("id", FieldType::Int),
            ],
        );
        assert!(matches!(schema.validate(), Err(ArgsError::InvalidSchema(_))));
    }

    #[test]
    fn check_allows_null_only_when_nullable() {
        let strict = FieldSpec::required("path", FieldType::String);
        assert_eq!(
            strict.check(&Value::Null),
            Err(ArgsError::NullForNonNullable("path".into()))
        );
        assert!(strict.clone().nullable().check(&Value::Null).is_ok());
    }
}
