//! Data types: primitives and reusable complex elements
//!
//! [`DataType`] is the open union of every data type that may appear in a
//! choice slot. Builders stage choice values as a `DataType`; each choice field
//! narrows it to the alternatives its schema declares.

mod attachment;
mod coding;
mod extension;
mod meta;
mod period;
mod primitive;
mod quantity;
mod reference;
mod signature;

pub use attachment::{Attachment, AttachmentBuilder};
pub use coding::{CodeableConcept, CodeableConceptBuilder, Coding, CodingBuilder};
pub use extension::{Extension, ExtensionBuilder};
pub use meta::{Meta, MetaBuilder};
pub use period::{Period, PeriodBuilder};
pub use primitive::{
    Boolean, BooleanBuilder, Code, CodeBuilder, Date, DateBuilder, DateTime, DateTimeBuilder,
    Decimal, DecimalBuilder, FhirString, FhirStringBuilder, Id, IdBuilder, Integer, IntegerBuilder,
    Uri, UriBuilder,
};
pub use quantity::{Money, MoneyBuilder, Quantity, QuantityBuilder};
pub use reference::{Identifier, IdentifierBuilder, Reference, ReferenceBuilder};
pub use signature::{Signature, SignatureBuilder};

use crate::node::{Node, TypeDescriptor};

macro_rules! data_types {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Any value that may occupy a choice slot
        #[derive(Debug, Clone, PartialEq)]
        pub enum DataType {
            $($variant($ty)),+
        }

        impl DataType {
            /// Every data type name, primitives first
            pub const ALL: &'static [&'static str] = &[$(<$ty>::DESCRIPTOR.name),+];

            pub fn as_node(&self) -> &dyn Node {
                match self {
                    $(DataType::$variant(v) => v as &dyn Node),+
                }
            }

            pub fn descriptor(&self) -> &'static TypeDescriptor {
                self.as_node().descriptor()
            }

            pub fn type_name(&self) -> &'static str {
                self.descriptor().name
            }
        }

        $(
            impl From<$ty> for DataType {
                fn from(value: $ty) -> Self {
                    DataType::$variant(value)
                }
            }
        )+

        /// Descriptor of a data type by name
        pub fn data_type_descriptor(name: &str) -> Option<&'static TypeDescriptor> {
            [$(<$ty>::DESCRIPTOR),+]
                .into_iter()
                .find(|descriptor| descriptor.name == name)
        }
    };
}

data_types! {
    Boolean(Boolean),
    Integer(Integer),
    Decimal(Decimal),
    String(FhirString),
    Uri(Uri),
    Code(Code),
    Id(Id),
    Date(Date),
    DateTime(DateTime),
    Attachment(Attachment),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    Identifier(Identifier),
    Money(Money),
    Period(Period),
    Quantity(Quantity),
    Reference(Reference),
    Signature(Signature),
}

/// Like [`data_type_descriptor`], also covering `Extension` and `Meta`
pub fn element_descriptor(name: &str) -> Option<&'static TypeDescriptor> {
    data_type_descriptor(name).or_else(|| {
        [Extension::DESCRIPTOR, Meta::DESCRIPTOR]
            .into_iter()
            .find(|descriptor| descriptor.name == name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_schema_names() {
        assert!(DataType::ALL.contains(&"dateTime"));
        assert!(DataType::ALL.contains(&"CodeableConcept"));
        assert!(!DataType::ALL.contains(&"Meta"));
        assert_eq!(DataType::ALL.len(), 18);
    }

    #[test]
    fn test_descriptor_lookup() {
        assert_eq!(data_type_descriptor("string").unwrap().name, "string");
        assert!(data_type_descriptor("Extension").is_none());
        assert_eq!(element_descriptor("Extension").unwrap().name, "Extension");
        assert!(element_descriptor("Contract").is_none());
    }
}
