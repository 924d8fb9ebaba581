//! Incremental construction of argument sets.

use super::codec::ArgumentSet;
use super::error::ArgsError;
use super::schema::Schema;
use super::value::Value;

/// Mutable staging copy of an argument set.
///
/// Every mutation is validated against the schema. `build` copies the staged
/// values without re-checking: each entry point stages every field and there
/// is no way to remove one.
#[derive(Debug, Clone)]
pub struct ArgumentSetBuilder<'s> {
    schema: &'s Schema,
    values: Vec<Option<Value>>,
}

impl<'s> ArgumentSetBuilder<'s> {
    /// Seeds the builder with the schema's required fields, positionally.
    /// Optional fields start at their defaults.
    ///
    /// # Errors
    ///
    /// - [`ArgsError::NullForNonNullable`] if a non-nullable value is null.
    /// - [`ArgsError::TypeMismatch`] if a value has the wrong type.
    /// - [`ArgsError::MissingRequiredField`] if fewer values than required
    ///   fields are given.
    /// - [`ArgsError::UnknownField`] if more values are given.
    pub fn new<I>(schema: &'s Schema, required_values: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut builder = Self { schema, values: vec![None; schema.fields.len()] };
        let mut supplied = required_values.into_iter();
        for (index, field) in schema.fields.iter().enumerate() {
            if !field.required {
                builder.values[index].clone_from(&field.default);
                continue;
            }
            let value = supplied
                .next()
                .ok_or_else(|| ArgsError::MissingRequiredField(field.name.to_string()))?;
            field.check(&value)?;
            builder.values[index] = Some(value);
        }
        if supplied.next().is_some() {
            return Err(ArgsError::UnknownField(format!(
                "{}: more values than required fields",
                schema.name
            )));
        }
        Ok(builder)
    }

    /// Starts from a copy of an existing argument set.
    #[must_use]
    pub fn from_args(original: &ArgumentSet<'s>) -> Self {
        Self { schema: original.schema(), values: original.values().to_vec() }
    }

    /// Stages `value` for the field `name`.
    ///
    /// # Errors
    ///
    /// - [`ArgsError::UnknownField`] if the schema does not declare `name`.
    /// - [`ArgsError::NullForNonNullable`] for null on a non-nullable field.
    /// - [`ArgsError::TypeMismatch`] if the value has the wrong type.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self, ArgsError> {
        let index = self
            .schema
            .fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| ArgsError::UnknownField(name.to_string()))?;
        let value = value.into();
        self.schema.fields[index].check(&value)?;
        self.values[index] = Some(value);
        Ok(self)
    }

    /// Returns the staged value of `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.schema.fields.iter().position(|f| f.name == name)?;
        self.values[index].as_ref()
    }

    /// Copies the staged values into an immutable argument set.
    #[must_use]
    pub fn build(&self) -> ArgumentSet<'s> {
        ArgumentSet::from_parts(self.schema, self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::codec::decode;
    use crate::args::schema::FieldSpec;
    use crate::args::value::FieldType;
    use crate::ports::container::Container;

    fn camera_schema() -> Schema {
        Schema::new(
            "CameraFragmentArgs",
            vec![
                FieldSpec::required("camera_id", FieldType::String),
                FieldSpec::required("pixel_format", FieldType::Int),
            ],
        )
    }

    #[test]
    fn new_seeds_required_fields() {
        let schema = camera_schema();
        let builder =
            ArgumentSetBuilder::new(&schema, [Value::from("0"), Value::Int(35)]).unwrap();
        assert_eq!(builder.get("camera_id"), Some(&Value::from("0")));
        assert_eq!(builder.get("pixel_format"), Some(&Value::Int(35)));
    }

    #[test]
    fn new_rejects_null_required_value() {
        let schema = camera_schema();
        let err = ArgumentSetBuilder::new(&schema, [Value::Null, Value::Int(35)]).unwrap_err();
        assert_eq!(err, ArgsError::NullForNonNullable("camera_id".into()));
    }

    #[test]
    fn new_rejects_short_and_long_value_lists() {
        let schema = camera_schema();
        let err = ArgumentSetBuilder::new(&schema, [Value::from("0")]).unwrap_err();
        assert_eq!(err, ArgsError::MissingRequiredField("pixel_format".into()));

        let err = ArgumentSetBuilder::new(
            &schema,
            [Value::from("0"), Value::Int(1), Value::Bool(true)],
        )
        .unwrap_err();
        assert!(matches!(err, ArgsError::UnknownField(_)));
    }

    #[test]
    fn set_chains_and_encodes() {
        let schema = camera_schema();
        let mut builder =
            ArgumentSetBuilder::new(&schema, [Value::from("0"), Value::Int(0)]).unwrap();
        builder.set("camera_id", "abc").unwrap().set("pixel_format", 5).unwrap();

        let bundle = builder.build().to_bundle();
        assert_eq!(bundle.get_string("camera_id").as_deref(), Some("abc"));
        assert_eq!(bundle.get_int("pixel_format"), 5);
    }

    #[test]
    fn set_rejects_null_unknown_and_mistyped() {
        let schema = camera_schema();
        let mut builder =
            ArgumentSetBuilder::new(&schema, [Value::from("0"), Value::Int(0)]).unwrap();
        assert_eq!(
            builder.set("camera_id", Value::Null).unwrap_err(),
            ArgsError::NullForNonNullable("camera_id".into())
        );
        assert_eq!(
            builder.set("zoom", 2).unwrap_err(),
            ArgsError::UnknownField("zoom".into())
        );
        assert!(matches!(
            builder.set("pixel_format", "35").unwrap_err(),
            ArgsError::TypeMismatch { .. }
        ));
        // Failed sets leave the staged values untouched.
        assert_eq!(builder.get("camera_id"), Some(&Value::from("0")));
    }

    #[test]
    fn new_stages_defaults_for_optionals() {
        let schema = Schema::new(
            "ImageViewerFragmentArgs",
            vec![
                FieldSpec::required("file_path", FieldType::String),
                FieldSpec::optional("orientation", FieldType::Int, Value::Int(0)),
                FieldSpec::optional("depth", FieldType::Bool, Value::Bool(false)),
            ],
        );
        let args = ArgumentSetBuilder::new(&schema, [Value::from("/a.jpg")]).unwrap().build();
        assert!(args.contains("orientation"));
        assert!(args.contains("depth"));
        assert_eq!(decode(&args.to_bundle(), &schema).unwrap(), args);
    }

    #[test]
    fn from_args_round_trips_to_equal_set() {
        let schema = camera_schema();
        let mut bundle = crate::adapters::bundle::Bundle::new();
        bundle.put_string("camera_id", Some("1"));
        bundle.put_int("pixel_format", 256);
        let original = decode(&bundle, &schema).unwrap();

        let rebuilt = ArgumentSetBuilder::from_args(&original).build();
        assert_eq!(rebuilt, original);
        assert_eq!(rebuilt.hash_code(), original.hash_code());
    }
}
