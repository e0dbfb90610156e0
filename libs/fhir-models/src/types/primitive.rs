//! FHIR primitive types
//!
//! Primitives are leaf nodes: an optional value plus the `id` and `extension`
//! every element carries. A primitive with neither a value nor an extension
//! fails `ele-1` at build time.

use super::Extension;
use crate::builder::{finish, impl_builder};
use crate::config::{self, ModelConfig};
use crate::error::Result;
use crate::node::{FieldDescriptor, FieldValue, Node, NodeKind, PrimitiveValue, TypeDescriptor};
use crate::validation;
use chrono::{FixedOffset, NaiveDate};
use std::any::Any;

macro_rules! primitive_type {
    (
        $(#[$meta:meta])*
        $name:ident, $builder:ident, $type_name:literal, $value_ty:ty,
        check = $check:path,
        value = $to_value:path $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            id: Option<String>,
            extension: Vec<Extension>,
            value: Option<$value_ty>,
        }

        impl $name {
            pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
                name: $type_name,
                kind: NodeKind::Primitive,
                fields: &[FieldDescriptor::EXTENSION],
            };

            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Build a primitive holding just `value`
            pub fn of(value: impl Into<$value_ty>) -> Result<Self> {
                Self::builder().value(value).build()
            }

            pub fn value(&self) -> Option<&$value_ty> {
                self.value.as_ref()
            }

            pub fn to_builder(&self) -> $builder {
                $builder {
                    id: self.id.clone(),
                    extension: self.extension.clone(),
                    value: self.value.clone(),
                }
            }
        }

        impl Node for $name {
            fn descriptor(&self) -> &'static TypeDescriptor {
                Self::DESCRIPTOR
            }

            fn field(&self, index: usize) -> FieldValue<'_> {
                match index {
                    0 => FieldValue::list(&self.extension),
                    _ => FieldValue::Absent,
                }
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn extension(&self) -> &[Extension] {
                &self.extension
            }

            fn primitive_value(&self) -> Option<PrimitiveValue<'_>> {
                self.value.as_ref().map($to_value)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            id: Option<String>,
            extension: Vec<Extension>,
            value: Option<$value_ty>,
        }

        impl $builder {
            pub fn id(mut self, id: impl Into<String>) -> Self {
                self.id = Some(id.into());
                self
            }

            pub fn extension(mut self, extension: Extension) -> Self {
                self.extension.push(extension);
                self
            }

            pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
                self.extension.extend(extensions);
                self
            }

            pub fn value(mut self, value: impl Into<$value_ty>) -> Self {
                self.value = Some(value.into());
                self
            }

            pub fn build(&self) -> Result<$name> {
                finish($type_name, self.validate())
            }

            fn validate(&self) -> Result<$name> {
                let config = config::current();
                if let Some(value) = &self.value {
                    $check(&config, value)?;
                }
                let node = $name {
                    id: self.id.clone(),
                    extension: self.extension.clone(),
                    value: self.value.clone(),
                };
                validation::require_value_or_children(&config, &node)?;
                Ok(node)
            }
        }

        impl_builder!($name, $builder);
    };
}

fn unchecked<T>(_config: &ModelConfig, _value: &T) -> Result<()> {
    Ok(())
}

fn checked_string(config: &ModelConfig, value: &String) -> Result<()> {
    validation::check_string(config, value)
}

fn checked_uri(config: &ModelConfig, value: &String) -> Result<()> {
    validation::check_uri(config, value)
}

fn checked_code(config: &ModelConfig, value: &String) -> Result<()> {
    validation::check_code(config, value)
}

fn checked_id(_config: &ModelConfig, value: &String) -> Result<()> {
    validation::check_id(value)
}

fn boolean_value(value: &bool) -> PrimitiveValue<'_> {
    PrimitiveValue::Boolean(*value)
}

fn integer_value(value: &i32) -> PrimitiveValue<'_> {
    PrimitiveValue::Integer(*value)
}

fn decimal_value(value: &rust_decimal::Decimal) -> PrimitiveValue<'_> {
    PrimitiveValue::Decimal(*value)
}

fn string_value(value: &String) -> PrimitiveValue<'_> {
    PrimitiveValue::String(value)
}

fn date_value(value: &NaiveDate) -> PrimitiveValue<'_> {
    PrimitiveValue::Date(*value)
}

fn date_time_value(value: &chrono::DateTime<FixedOffset>) -> PrimitiveValue<'_> {
    PrimitiveValue::DateTime(*value)
}

primitive_type! {
    /// `true` | `false`
    Boolean, BooleanBuilder, "boolean", bool,
    check = unchecked,
    value = boolean_value,
}

primitive_type! {
    /// A signed 32-bit integer
    Integer, IntegerBuilder, "integer", i32,
    check = unchecked,
    value = integer_value,
}

primitive_type! {
    /// A rational number with implicit precision
    Decimal, DecimalBuilder, "decimal", rust_decimal::Decimal,
    check = unchecked,
    value = decimal_value,
}

primitive_type! {
    /// A sequence of Unicode characters
    FhirString, FhirStringBuilder, "string", String,
    check = checked_string,
    value = string_value,
}

primitive_type! {
    /// String of characters used to identify a name or a resource
    Uri, UriBuilder, "uri", String,
    check = checked_uri,
    value = string_value,
}

primitive_type! {
    /// A string from a controlled set of codes
    Code, CodeBuilder, "code", String,
    check = checked_code,
    value = string_value,
}

primitive_type! {
    /// Letters, numerals, `-` and `.`, at most 64 characters
    Id, IdBuilder, "id", String,
    check = checked_id,
    value = string_value,
}

primitive_type! {
    /// A calendar date
    Date, DateBuilder, "date", NaiveDate,
    check = unchecked,
    value = date_value,
}

primitive_type! {
    /// A date and time with a timezone offset
    DateTime, DateTimeBuilder, "dateTime", chrono::DateTime<FixedOffset>,
    check = unchecked,
    value = date_time_value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::DataType;

    #[test]
    fn test_of_builds_value() {
        let s = FhirString::of("hello").unwrap();
        assert_eq!(s.value().map(String::as_str), Some("hello"));
        assert_eq!(s.primitive_value(), Some(PrimitiveValue::String("hello")));
        assert_eq!(s.type_name(), "string");
    }

    #[test]
    fn test_empty_primitive_fails_ele_1() {
        let err = FhirString::builder().id("x").build().unwrap_err();
        assert_eq!(err, Error::ValueOrChildrenRequired("string"));
    }

    #[test]
    fn test_extension_only_primitive_is_valid() {
        let ext = crate::types::Extension::builder("http://example.org/absent")
            .value(Code::of("unknown").unwrap())
            .build()
            .unwrap();
        let b = Boolean::builder().extension(ext).build().unwrap();
        assert!(b.value().is_none());
        assert_eq!(b.extension().len(), 1);
    }

    #[test]
    fn test_value_checks_per_type() {
        assert!(matches!(
            Code::of(" padded").unwrap_err(),
            Error::InvalidValue { type_name: "code", .. }
        ));
        assert!(Id::of("no spaces allowed").is_err());
        assert!(Uri::of("has space").is_err());
        assert!(FhirString::of("  ").is_err());
        assert!(Integer::of(-5).is_ok());
    }

    #[test]
    fn test_no_break_space_is_accepted_in_text() {
        let amount = FhirString::of("10\u{00A0}000 EUR").unwrap();
        assert_eq!(amount.value().unwrap(), "10\u{00A0}000 EUR");
        assert!(Code::of("a\u{00A0}b").is_ok());
        assert!(matches!(
            FhirString::of("unit\u{001C}separator").unwrap_err(),
            Error::InvalidValue { type_name: "string", .. }
        ));
    }

    #[test]
    fn test_last_write_wins() {
        let s = FhirString::builder().value("first").value("second").build().unwrap();
        assert_eq!(s.value().unwrap(), "second");
    }

    #[test]
    fn test_to_builder_round_trip() {
        let date = Date::builder()
            .id("d1")
            .value(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .build()
            .unwrap();
        assert_eq!(date.to_builder().build().unwrap(), date);
    }

    #[test]
    fn test_primitive_values() {
        let d = Decimal::of(rust_decimal::Decimal::new(125, 2)).unwrap();
        assert_eq!(
            d.primitive_value(),
            Some(PrimitiveValue::Decimal(rust_decimal::Decimal::new(125, 2)))
        );
        let when = chrono::DateTime::parse_from_rfc3339("2024-01-01T10:00:00+01:00").unwrap();
        let dt = DateTime::of(when).unwrap();
        assert_eq!(dt.primitive_value(), Some(PrimitiveValue::DateTime(when)));
        assert_eq!(DataType::from(dt).type_name(), "dateTime");
    }
}
