//! `Identifier` and `Reference`

use super::{Code, Extension, FhirString, Period, Uri};
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::Result;
use crate::node::{Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, TypeDescriptor};
use crate::validation;
use std::any::Any;

/// A business identifier with the namespace that makes it unique
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    id: Option<String>,
    extension: Vec<Extension>,
    r#use: Option<Code>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
}

impl Identifier {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Identifier",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("use", Cardinality::OptionalOne, "code")
                .summary()
                .modifier(),
            FieldDescriptor::new("system", Cardinality::OptionalOne, "uri").summary(),
            FieldDescriptor::new("value", Cardinality::OptionalOne, "string").summary(),
            FieldDescriptor::new("period", Cardinality::OptionalOne, "Period").summary(),
        ],
    };

    pub fn builder() -> IdentifierBuilder {
        IdentifierBuilder::default()
    }

    /// `usual | official | temp | secondary | old`
    pub fn r#use(&self) -> Option<&Code> {
        self.r#use.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&FhirString> {
        self.value.as_ref()
    }

    /// Time period when the identifier is or was valid
    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn to_builder(&self) -> IdentifierBuilder {
        IdentifierBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            r#use: self.r#use.clone(),
            system: self.system.clone(),
            value: self.value.clone(),
            period: self.period.clone(),
        }
    }
}

impl Node for Identifier {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::optional(self.r#use.as_ref()),
            2 => FieldValue::optional(self.system.as_ref()),
            3 => FieldValue::optional(self.value.as_ref()),
            4 => FieldValue::optional(self.period.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    r#use: Option<Code>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
}

impl IdentifierBuilder {
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

    pub fn r#use(mut self, r#use: Code) -> Self {
        self.r#use = Some(r#use);
        self
    }

    pub fn system(mut self, system: Uri) -> Self {
        self.system = Some(system);
        self
    }

    pub fn value(mut self, value: FhirString) -> Self {
        self.value = Some(value);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn build(&self) -> Result<Identifier> {
        finish("Identifier", self.validate())
    }

    fn validate(&self) -> Result<Identifier> {
        let node = Identifier {
            id: self.id.clone(),
            extension: self.extension.clone(),
            r#use: self.r#use.clone(),
            system: self.system.clone(),
            value: self.value.clone(),
            period: self.period.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Identifier, IdentifierBuilder);

/// A reference from one resource to another
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    id: Option<String>,
    extension: Vec<Extension>,
    reference: Option<FhirString>,
    r#type: Option<Uri>,
    identifier: Option<Identifier>,
    display: Option<FhirString>,
}

impl Reference {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Reference",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("reference", Cardinality::OptionalOne, "string").summary(),
            FieldDescriptor::new("type", Cardinality::OptionalOne, "uri").summary(),
            FieldDescriptor::new("identifier", Cardinality::OptionalOne, "Identifier").summary(),
            FieldDescriptor::new("display", Cardinality::OptionalOne, "string").summary(),
        ],
    };

    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    /// Literal reference: relative, internal (`#id`) or absolute URL
    pub fn reference(&self) -> Option<&FhirString> {
        self.reference.as_ref()
    }

    /// Type the reference refers to, e.g. `Patient`
    pub fn r#type(&self) -> Option<&Uri> {
        self.r#type.as_ref()
    }

    /// Logical reference, when the literal reference is not known
    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub fn display(&self) -> Option<&FhirString> {
        self.display.as_ref()
    }

    pub fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            reference: self.reference.clone(),
            r#type: self.r#type.clone(),
            identifier: self.identifier.clone(),
            display: self.display.clone(),
        }
    }
}

impl Node for Reference {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::optional(self.reference.as_ref()),
            2 => FieldValue::optional(self.r#type.as_ref()),
            3 => FieldValue::optional(self.identifier.as_ref()),
            4 => FieldValue::optional(self.display.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    reference: Option<FhirString>,
    r#type: Option<Uri>,
    identifier: Option<Identifier>,
    display: Option<FhirString>,
}

impl ReferenceBuilder {
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

    pub fn reference(mut self, reference: FhirString) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn r#type(mut self, r#type: Uri) -> Self {
        self.r#type = Some(r#type);
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    pub fn display(mut self, display: FhirString) -> Self {
        self.display = Some(display);
        self
    }

    pub fn build(&self) -> Result<Reference> {
        finish("Reference", self.validate())
    }

    fn validate(&self) -> Result<Reference> {
        let node = Reference {
            id: self.id.clone(),
            extension: self.extension.clone(),
            reference: self.reference.clone(),
            r#type: self.r#type.clone(),
            identifier: self.identifier.clone(),
            display: self.display.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Reference, ReferenceBuilder);
