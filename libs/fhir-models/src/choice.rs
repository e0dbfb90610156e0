//! Choice elements (`value[x]` style fields)
//!
//! A choice field is one enum slot over the alternatives its schema declares.
//! Builders stage choice values as the open [`DataType`] union; `build()`
//! narrows the staged value into the field's enum or rejects it.

use crate::node::Node;
use crate::types::DataType;
use std::fmt::Debug;

/// A closed set of alternative types for one choice field
pub trait Choice: Sized + Clone + PartialEq + Debug {
    /// Type names of the declared alternatives, in schema order
    const ALLOWED: &'static [&'static str];

    /// Narrow a staged value; hands it back unchanged if its type is not allowed
    fn from_data(value: DataType) -> Result<Self, DataType>;

    /// Widen back into the open union, used by `to_builder()`
    fn into_data(self) -> DataType;

    fn as_node(&self) -> &dyn Node;

    fn type_name(&self) -> &'static str {
        self.as_node().type_name()
    }
}

/// Declare a choice enum. Each variant must be named after the matching
/// [`DataType`] variant.
macro_rules! choice_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $($variant($ty)),+
        }

        impl $crate::choice::Choice for $name {
            const ALLOWED: &'static [&'static str] = &[$(<$ty>::DESCRIPTOR.name),+];

            fn from_data(
                value: $crate::types::DataType,
            ) -> ::std::result::Result<Self, $crate::types::DataType> {
                match value {
                    $($crate::types::DataType::$variant(v) => Ok($name::$variant(v)),)+
                    #[allow(unreachable_patterns)]
                    other => Err(other),
                }
            }

            fn into_data(self) -> $crate::types::DataType {
                match self {
                    $($name::$variant(v) => $crate::types::DataType::$variant(v)),+
                }
            }

            fn as_node(&self) -> &dyn $crate::node::Node {
                match self {
                    $($name::$variant(v) => v as &dyn $crate::node::Node),+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::$variant(value)
                }
            }
        )+
    };
}

pub(crate) use choice_type;

impl Choice for DataType {
    const ALLOWED: &'static [&'static str] = DataType::ALL;

    fn from_data(value: DataType) -> Result<Self, DataType> {
        Ok(value)
    }

    fn into_data(self) -> DataType {
        self
    }

    fn as_node(&self) -> &dyn Node {
        DataType::as_node(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CodeableConcept, FhirString, Quantity, Reference};

    choice_type! {
        enum Sample {
            String(FhirString),
            Reference(Reference),
        }
    }

    #[test]
    fn test_allowed_uses_schema_type_names() {
        assert_eq!(Sample::ALLOWED, &["string", "Reference"]);
    }

    #[test]
    fn test_from_data_accepts_declared_alternative() {
        let value = DataType::from(FhirString::of("hello").unwrap());
        let sample = Sample::from_data(value).unwrap();
        assert_eq!(sample.type_name(), "string");
    }

    #[test]
    fn test_from_data_returns_rejected_value() {
        let quantity = Quantity::builder().unit(FhirString::of("mg").unwrap()).build().unwrap();
        let rejected = Sample::from_data(DataType::from(quantity.clone())).unwrap_err();
        assert_eq!(rejected, DataType::Quantity(quantity));
    }

    #[test]
    fn test_into_data_round_trip() {
        let concept = CodeableConcept::builder()
            .text(FhirString::of("text").unwrap())
            .build()
            .unwrap();
        let data = DataType::from(concept.clone());
        assert_eq!(DataType::from_data(data.clone()).unwrap().into_data(), data);
        assert_eq!(data.type_name(), "CodeableConcept");
    }
}
