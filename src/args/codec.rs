//! Schema-driven decoding and encoding of argument sets.
//!
//! An [`ArgumentSet`] is the validated in-memory form of one screen's
//! arguments. It is produced by [`decode`] or by
//! [`ArgumentSetBuilder`](super::builder::ArgumentSetBuilder) and written
//! back to a container by [`ArgumentSet::encode`].

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, warn};

use super::error::ArgsError;
use super::schema::Schema;
use super::value::{FieldType, Value};
use crate::adapters::bundle::Bundle;
use crate::adapters::saved_state::SavedStateHandle;
use crate::ports::container::Container;

/// Polynomial multiplier used by [`ArgumentSet::hash_code`].
const HASH_MULTIPLIER: i32 = 31;

/// Validated, immutable navigation arguments for one schema.
///
/// Values are held in schema declaration order; `None` marks a field that
/// is absent from the instance mapping.
#[derive(Debug, Clone)]
pub struct ArgumentSet<'s> {
    schema: &'s Schema,
    values: Vec<Option<Value>>,
}

/// Decodes `container` against `schema`.
///
/// Fields are visited in declaration order. Present keys are type-checked,
/// absent optional keys take their default, and the first violation stops
/// decoding.
///
/// # Errors
///
/// - [`ArgsError::MissingRequiredField`] when a required key is absent.
/// - [`ArgsError::NullForNonNullable`] when a non-nullable key holds null.
/// - [`ArgsError::TypeMismatch`] when a key holds a value of another type.
pub fn decode<'s>(
    container: &dyn Container,
    schema: &'s Schema,
) -> Result<ArgumentSet<'s>, ArgsError> {
    let mut values = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        let value = if container.contains_key(field.name) {
            let value = container.get(field.name).cloned().unwrap_or(Value::Null);
            if let Err(err) = field.check(&value) {
                warn!(schema = schema.name, field = field.name, %err, "rejecting container");
                return Err(err);
            }
            value
        } else if field.required {
            let err = ArgsError::MissingRequiredField(field.name.to_string());
            warn!(schema = schema.name, field = field.name, %err, "rejecting container");
            return Err(err);
        } else {
            // Schema::validate guarantees optional fields carry a default.
            field.default.clone().unwrap_or(Value::Null)
        };
        values.push(Some(value));
    }
    debug!(schema = schema.name, fields = values.len(), "decoded arguments");
    Ok(ArgumentSet { schema, values })
}

impl<'s> ArgumentSet<'s> {
    pub(crate) fn from_parts(schema: &'s Schema, values: Vec<Option<Value>>) -> Self {
        Self { schema, values }
    }

    pub(super) fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    /// The schema this set was validated against.
    #[must_use]
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Returns `true` if `name` is present in the instance mapping.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the value of `name`, or `None` if absent or undeclared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.schema.fields.iter().position(|f| f.name == name)?;
        self.values[index].as_ref()
    }

    /// Reads a string field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent, null, or not a string.
    pub fn string(&self, name: &str) -> Result<&str, ArgsError> {
        match self.require(name)? {
            Value::String(s) => Ok(s),
            other => Err(mismatch(name, FieldType::String, other)),
        }
    }

    /// Reads an int field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent, null, or not an int.
    pub fn int(&self, name: &str) -> Result<i32, ArgsError> {
        match self.require(name)? {
            Value::Int(i) => Ok(*i),
            other => Err(mismatch(name, FieldType::Int, other)),
        }
    }

    /// Reads a bool field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent, null, or not a bool.
    pub fn bool(&self, name: &str) -> Result<bool, ArgsError> {
        match self.require(name)? {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch(name, FieldType::Bool, other)),
        }
    }

    fn require(&self, name: &str) -> Result<&Value, ArgsError> {
        match self.get(name) {
            None => Err(ArgsError::MissingRequiredField(name.to_string())),
            Some(Value::Null) => Err(ArgsError::NullForNonNullable(name.to_string())),
            Some(value) => Ok(value),
        }
    }

    /// Writes every present field into `container`.
    ///
    /// Absent fields that declare a default are written with the default,
    /// so `decode(encode(x)) == x` for any valid `x`.
    pub fn encode(&self, container: &mut dyn Container) {
        for (field, value) in self.schema.fields.iter().zip(&self.values) {
            match (value, &field.default) {
                (Some(value), _) | (None, Some(value)) => container.put(field.name, value.clone()),
                (None, None) => {}
            }
        }
        debug!(schema = self.schema.name, "encoded arguments");
    }

    /// Encodes into a fresh transition payload.
    #[must_use]
    pub fn to_bundle(&self) -> Bundle {
        let mut bundle = Bundle::new();
        self.encode(&mut bundle);
        bundle
    }

    /// Encodes into a fresh saved-state handle.
    #[must_use]
    pub fn to_saved_state(&self) -> SavedStateHandle {
        let mut handle = SavedStateHandle::new();
        self.encode(&mut handle);
        handle
    }

    /// Deterministic hash over all fields in declaration order.
    ///
    /// Starts at 1 and folds `31 * acc + h(field)` with wrapping arithmetic.
    /// Absent and null values contribute 0, booleans 1 or 0, ints their
    /// value, and strings the polynomial hash of their UTF-16 units.
    #[must_use]
    pub fn hash_code(&self) -> i32 {
        self.values.iter().fold(1_i32, |acc, value| {
            let h = match value {
                None | Some(Value::Null) => 0,
                Some(Value::String(s)) => string_hash(s),
                Some(Value::Int(i)) => *i,
                Some(Value::Bool(b)) => i32::from(*b),
            };
            acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(h)
        })
    }
}

fn mismatch(name: &str, expected: FieldType, found: &Value) -> ArgsError {
    ArgsError::TypeMismatch { field: name.to_string(), expected, found: found.type_name() }
}

fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0_i32, |acc, unit| acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i32::from(unit)))
}

impl PartialEq for ArgumentSet<'_> {
    fn eq(&self, other: &Self) -> bool {
        (std::ptr::eq(self.schema, other.schema) || self.schema == other.schema)
            && self.values == other.values
    }
}

impl Eq for ArgumentSet<'_> {}

impl Hash for ArgumentSet<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.schema.name.hash(state);
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for ArgumentSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.schema.name)?;
        for (i, (field, value)) in self.schema.fields.iter().zip(&self.values).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Some(value) => write!(f, "{}={value}", field.display_name())?,
                None => write!(f, "{}=null", field.display_name())?,
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::schema::FieldSpec;

    fn viewer_schema() -> Schema {
        Schema::new(
            "ImageViewerFragmentArgs",
            vec![
                FieldSpec::required("file_path", FieldType::String),
                FieldSpec::optional("orientation", FieldType::Int, Value::Int(0)),
                FieldSpec::optional("depth", FieldType::Bool, Value::Bool(false)),
            ],
        )
    }

    #[test]
    fn decode_fills_defaults_for_absent_optionals() {
        let schema = viewer_schema();
        let mut bundle = Bundle::new();
        bundle.put_string("file_path", Some("/tmp/a.jpg"));

        let args = decode(&bundle, &schema).unwrap();
        assert_eq!(args.string("file_path").unwrap(), "/tmp/a.jpg");
        assert_eq!(args.int("orientation").unwrap(), 0);
        assert!(!args.bool("depth").unwrap());
    }

    #[test]
    fn decode_reports_missing_required() {
        let schema = viewer_schema();
        let err = decode(&Bundle::new(), &schema).unwrap_err();
        assert_eq!(err, ArgsError::MissingRequiredField("file_path".into()));
    }

    #[test]
    fn decode_reports_null_for_present_key() {
        let schema = viewer_schema();
        let mut bundle = Bundle::new();
        bundle.put_string("file_path", None);
        let err = decode(&bundle, &schema).unwrap_err();
        assert_eq!(err, ArgsError::NullForNonNullable("file_path".into()));
    }

    #[test]
    fn decode_reports_type_mismatch() {
        let schema = viewer_schema();
        let mut bundle = Bundle::new();
        bundle.put_string("file_path", Some("/tmp/a.jpg"));
        bundle.put("orientation", Value::from("sideways"));
        let err = decode(&bundle, &schema).unwrap_err();
        assert!(matches!(err, ArgsError::TypeMismatch { ref field, .. } if field == "orientation"));
    }

    #[test]
    fn decode_stops_at_first_violation_in_schema_order() {
        let schema = viewer_schema();
        let mut bundle = Bundle::new();
        bundle.put("orientation", Value::Null);
        let err = decode(&bundle, &schema).unwrap_err();
        assert_eq!(err, ArgsError::MissingRequiredField("file_path".into()));
    }

    #[test]
    fn decode_rejects_null_int_and_bool() {
        let schema = viewer_schema();
        let mut bundle = Bundle::new();
        bundle.put_string("file_path", Some("/tmp/a.jpg"));
        bundle.put("orientation", Value::Null);
        bundle.put("depth", Value::Null);
        assert_eq!(
            decode(&bundle, &schema).unwrap_err(),
            ArgsError::NullForNonNullable("orientation".into())
        );

        bundle.put_int("orientation", 90);
        assert_eq!(
            decode(&bundle, &schema).unwrap_err(),
            ArgsError::NullForNonNullable("depth".into())
        );
    }

    #[test]
    fn encode_writes_every_field() {
        let schema = viewer_schema();
        let mut bundle = Bundle::new();
        bundle.put_string("file_path", Some("/tmp/a.jpg"));
        bundle.put_int("orientation", 90);
        let encoded = decode(&bundle, &schema).unwrap().to_bundle();

        assert_eq!(encoded.get_string("file_path").as_deref(), Some("/tmp/a.jpg"));
        assert_eq!(encoded.get_int("orientation"), 90);
        assert!(encoded.contains_key("depth"));
        assert!(!encoded.get_bool("depth"));
    }

    #[test]
    fn encode_writes_defaults_for_absent_fields() {
        let schema = viewer_schema();
        let args = ArgumentSet::from_parts(&schema, vec![Some(Value::from("/a")), None, None]);
        let bundle = args.to_bundle();
        assert_eq!(bundle.get("orientation"), Some(&Value::Int(0)));
        assert_eq!(bundle.get("depth"), Some(&Value::Bool(false)));
    }

    #[test]
    fn equality_tracks_presence() {
        let schema = viewer_schema();
        let explicit = ArgumentSet::from_parts(
            &schema,
            vec![Some(Value::from("/a")), Some(Value::Int(0)), Some(Value::Bool(false))],
        );
        let implicit = ArgumentSet::from_parts(&schema, vec![Some(Value::from("/a")), None, None]);
        assert_ne!(explicit, implicit);
        // Both still hash alike because absent values contribute 0/false.
        assert_eq!(explicit.hash_code(), implicit.hash_code());
    }

    #[test]
    fn hash_code_matches_polynomial_fold() {
        let schema = viewer_schema();
        let args = ArgumentSet::from_parts(
            &schema,
            vec![Some(Value::from("ab")), Some(Value::Int(90)), Some(Value::Bool(true))],
        );
        // "ab" hashes to 97 * 31 + 98 = 3105.
        let expected = ((31 + 3105) * 31 + 90) * 31 + 1;
        assert_eq!(args.hash_code(), expected);
    }

    #[test]
    fn display_lists_fields_in_order() {
        let schema = viewer_schema();
        let args = ArgumentSet::from_parts(
            &schema,
            vec![Some(Value::from("/a.jpg")), Some(Value::Int(90)), None],
        );
        assert_eq!(
            args.to_string(),
            "ImageViewerFragmentArgs{filePath=/a.jpg, orientation=90, depth=null}"
        );
    }
}
