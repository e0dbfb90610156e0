//! The node model shared by every schema type
//!
//! A schema type is described by a static [`TypeDescriptor`]: its name, its
//! [`NodeKind`] and an ordered table of [`FieldDescriptor`]s. Built nodes hand
//! out their children through [`Node::field`], indexed by that table, which is
//! all the generic traversal in [`crate::visitor`] needs to walk any tree.

use crate::resource::AnyResource;
use crate::types::{Extension, Meta};
use crate::visitor::{self, Visitor};
use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// Structural role of a schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Top-level record with independent identity
    Resource,
    /// Nested composite declared inline by a resource or another backbone
    BackboneElement,
    /// Reusable complex data type
    Element,
    /// Leaf value type
    Primitive,
}

/// Declared occurrence of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    RequiredOne,
    OptionalOne,
    RequiredMany,
    OptionalMany,
}

impl Cardinality {
    pub const fn is_required(self) -> bool {
        matches!(self, Cardinality::RequiredOne | Cardinality::RequiredMany)
    }

    pub const fn is_repeating(self) -> bool {
        matches!(self, Cardinality::RequiredMany | Cardinality::OptionalMany)
    }

    /// FHIR `min..max` notation
    pub const fn as_str(self) -> &'static str {
        match self {
            Cardinality::RequiredOne => "1..1",
            Cardinality::OptionalOne => "0..1",
            Cardinality::RequiredMany => "1..*",
            Cardinality::OptionalMany => "0..*",
        }
    }
}

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeConstraint {
    Fixed(&'static str),
    Choice(&'static [&'static str]),
}

impl TypeConstraint {
    /// Type names a value of this field may have
    pub fn type_names(&self) -> &[&'static str] {
        match self {
            TypeConstraint::Fixed(name) => std::slice::from_ref(name),
            TypeConstraint::Choice(names) => names,
        }
    }

    pub fn permits(&self, type_name: &str) -> bool {
        self.type_names().contains(&type_name)
    }
}

/// One row of a type's field table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub cardinality: Cardinality,
    pub types: TypeConstraint,
    pub summary: bool,
    pub modifier: bool,
}

impl FieldDescriptor {
    pub const EXTENSION: FieldDescriptor =
        FieldDescriptor::new("extension", Cardinality::OptionalMany, "Extension");

    pub const MODIFIER_EXTENSION: FieldDescriptor =
        FieldDescriptor::new("modifierExtension", Cardinality::OptionalMany, "Extension")
            .modifier();

    pub const META: FieldDescriptor =
        FieldDescriptor::new("meta", Cardinality::OptionalOne, "Meta").summary();

    pub const IMPLICIT_RULES: FieldDescriptor =
        FieldDescriptor::new("implicitRules", Cardinality::OptionalOne, "uri")
            .summary()
            .modifier();

    pub const LANGUAGE: FieldDescriptor =
        FieldDescriptor::new("language", Cardinality::OptionalOne, "code");

    pub const CONTAINED: FieldDescriptor =
        FieldDescriptor::new("contained", Cardinality::OptionalMany, "Resource");

    pub const fn new(name: &'static str, cardinality: Cardinality, type_name: &'static str) -> Self {
        Self {
            name,
            cardinality,
            types: TypeConstraint::Fixed(type_name),
            summary: false,
            modifier: false,
        }
    }

    pub const fn choice(
        name: &'static str,
        cardinality: Cardinality,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            cardinality,
            types: TypeConstraint::Choice(allowed),
            summary: false,
            modifier: false,
        }
    }

    pub const fn summary(self) -> Self {
        Self {
            summary: true,
            ..self
        }
    }

    pub const fn modifier(self) -> Self {
        Self {
            modifier: true,
            ..self
        }
    }

    pub const fn is_choice(&self) -> bool {
        matches!(self.types, TypeConstraint::Choice(_))
    }
}

/// Static schema information for one type
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Type name, e.g. `Contract`, `Contract.Term` or `dateTime`
    pub name: &'static str,
    pub kind: NodeKind,
    /// Fields in declared order
    pub fields: &'static [FieldDescriptor],
}

impl TypeDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// Runtime value of one declared field
#[derive(Clone)]
pub enum FieldValue<'a> {
    Absent,
    Single(&'a dyn Node),
    List(Vec<&'a dyn Node>),
}

impl<'a> FieldValue<'a> {
    pub fn one<T: Node>(value: &'a T) -> Self {
        FieldValue::Single(value)
    }

    pub fn optional<T: Node>(value: Option<&'a T>) -> Self {
        match value {
            Some(v) => FieldValue::Single(v),
            None => FieldValue::Absent,
        }
    }

    pub fn list<T: Node>(values: &'a [T]) -> Self {
        if values.is_empty() {
            FieldValue::Absent
        } else {
            FieldValue::List(values.iter().map(|v| v as &dyn Node).collect())
        }
    }

    pub fn choice<C: crate::choice::Choice>(value: Option<&'a C>) -> Self {
        match value {
            Some(c) => FieldValue::Single(c.as_node()),
            None => FieldValue::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Single(_) => false,
            FieldValue::List(values) => values.is_empty(),
        }
    }

    /// Child nodes in order, regardless of cardinality
    pub fn nodes(&self) -> Vec<&'a dyn Node> {
        match self {
            FieldValue::Absent => Vec::new(),
            FieldValue::Single(node) => vec![*node],
            FieldValue::List(values) => values.clone(),
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => f.write_str("Absent"),
            FieldValue::Single(node) => f.debug_tuple("Single").field(&node.type_name()).finish(),
            FieldValue::List(values) => f
                .debug_tuple("List")
                .field(&values.iter().map(|n| n.type_name()).collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// Scalar carried by a primitive node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveValue<'a> {
    Boolean(bool),
    Integer(i32),
    Decimal(Decimal),
    String(&'a str),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

/// A built, immutable node of a record tree
pub trait Node: fmt::Debug + Send + Sync + 'static {
    fn descriptor(&self) -> &'static TypeDescriptor;

    /// Value of the field at `index` in `descriptor().fields`
    fn field(&self, index: usize) -> FieldValue<'_>;

    /// Internal correlation identifier
    fn id(&self) -> Option<&str>;

    fn extension(&self) -> &[Extension];

    fn modifier_extension(&self) -> &[Extension] {
        &[]
    }

    fn primitive_value(&self) -> Option<PrimitiveValue<'_>> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str {
        self.descriptor().name
    }

    fn kind(&self) -> NodeKind {
        self.descriptor().kind
    }

    /// Value of a field looked up by its declared name
    fn field_by_name(&self, name: &str) -> FieldValue<'_> {
        match self.descriptor().field_index(name) {
            Some(index) => self.field(index),
            None => FieldValue::Absent,
        }
    }

    fn has_children(&self) -> bool {
        (0..self.descriptor().fields.len()).any(|i| !self.field(i).is_absent())
    }

    fn has_value(&self) -> bool {
        self.primitive_value().is_some()
    }
}

/// Traversal entrypoint on concrete node types. `dyn Node` has the same
/// method inherently.
pub trait NodeExt {
    /// Walk this node and its subtree with `visitor`
    fn accept<V: Visitor + ?Sized>(&self, element_name: &str, visitor: &mut V);
}

impl<T: Node> NodeExt for T {
    fn accept<V: Visitor + ?Sized>(&self, element_name: &str, visitor: &mut V) {
        visitor::accept(element_name, self, visitor);
    }
}

impl dyn Node {
    /// Walk this node and its subtree with `visitor`
    pub fn accept<V: Visitor + ?Sized>(&self, element_name: &str, visitor: &mut V) {
        visitor::accept(element_name, self, visitor);
    }

    pub fn downcast_ref<T: Node>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Node>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// A top-level record node
pub trait Resource: Node {
    /// Resource-kind discriminator
    fn resource_type(&self) -> &'static str {
        self.type_name()
    }

    fn meta(&self) -> Option<&Meta>;

    /// Records embedded in this one; they share its lifecycle
    fn contained(&self) -> &[AnyResource];

    /// Version stamp carried in `meta.versionId`
    fn version_id(&self) -> Option<&str> {
        self.meta()
            .and_then(|meta| meta.version_id())
            .and_then(|id| id.value())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::EXTENSION,
        FieldDescriptor::new("code", Cardinality::RequiredOne, "CodeableConcept").summary(),
        FieldDescriptor::choice("value", Cardinality::OptionalOne, &["string", "Quantity"]),
    ];

    const DESCRIPTOR: TypeDescriptor = TypeDescriptor {
        name: "Sample",
        kind: NodeKind::Element,
        fields: FIELDS,
    };

    #[test]
    fn test_cardinality_flags() {
        assert!(Cardinality::RequiredOne.is_required());
        assert!(!Cardinality::RequiredOne.is_repeating());
        assert!(Cardinality::RequiredMany.is_required());
        assert!(Cardinality::RequiredMany.is_repeating());
        assert!(!Cardinality::OptionalMany.is_required());
        assert_eq!(Cardinality::OptionalMany.as_str(), "0..*");
    }

    #[test]
    fn test_descriptor_field_lookup() {
        assert_eq!(DESCRIPTOR.field_index("code"), Some(1));
        assert!(DESCRIPTOR.field("code").unwrap().summary);
        assert!(DESCRIPTOR.field("value").unwrap().is_choice());
        assert!(DESCRIPTOR.field("missing").is_none());
    }

    #[test]
    fn test_type_constraint_permits() {
        let value = DESCRIPTOR.field("value").unwrap();
        assert!(value.types.permits("Quantity"));
        assert!(!value.types.permits("Coding"));
        assert_eq!(
            DESCRIPTOR.field("code").unwrap().types.type_names(),
            &["CodeableConcept"]
        );
    }

    #[test]
    fn test_base_descriptors() {
        assert!(FieldDescriptor::MODIFIER_EXTENSION.modifier);
        assert!(!FieldDescriptor::EXTENSION.modifier);
        assert!(FieldDescriptor::IMPLICIT_RULES.summary);
        assert!(FieldDescriptor::IMPLICIT_RULES.modifier);
    }

    #[test]
    fn test_descriptor_serializes() {
        let json = serde_json::to_value(&DESCRIPTOR).unwrap();
        assert_eq!(json["name"], "Sample");
        assert_eq!(json["kind"], "element");
        assert_eq!(json["fields"][1]["cardinality"], "required-one");
        assert_eq!(json["fields"][2]["types"]["choice"][1], "Quantity");
    }
}
