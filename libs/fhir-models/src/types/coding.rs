//! Coded values: `Coding` and `CodeableConcept`

use super::{Code, Extension, FhirString, Uri};
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::Result;
use crate::node::{Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, TypeDescriptor};
use crate::validation;
use std::any::Any;

/// A reference to a code defined by a terminology system
#[derive(Debug, Clone, PartialEq)]
pub struct Coding {
    id: Option<String>,
    extension: Vec<Extension>,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
}

impl Coding {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Coding",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("system", Cardinality::OptionalOne, "uri").summary(),
            FieldDescriptor::new("version", Cardinality::OptionalOne, "string").summary(),
            FieldDescriptor::new("code", Cardinality::OptionalOne, "code").summary(),
            FieldDescriptor::new("display", Cardinality::OptionalOne, "string").summary(),
        ],
    };

    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    /// Identity of the terminology system
    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn version(&self) -> Option<&FhirString> {
        self.version.as_ref()
    }

    /// Symbol in syntax defined by the system
    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn display(&self) -> Option<&FhirString> {
        self.display.as_ref()
    }

    pub fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
        }
    }
}

impl Node for Coding {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::optional(self.system.as_ref()),
            2 => FieldValue::optional(self.version.as_ref()),
            3 => FieldValue::optional(self.code.as_ref()),
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
pub struct CodingBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
}

impl CodingBuilder {
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

    pub fn system(mut self, system: Uri) -> Self {
        self.system = Some(system);
        self
    }

    pub fn version(mut self, version: FhirString) -> Self {
        self.version = Some(version);
        self
    }

    pub fn code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    pub fn display(mut self, display: FhirString) -> Self {
        self.display = Some(display);
        self
    }

    pub fn build(&self) -> Result<Coding> {
        finish("Coding", self.validate())
    }

    fn validate(&self) -> Result<Coding> {
        let node = Coding {
            id: self.id.clone(),
            extension: self.extension.clone(),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Coding, CodingBuilder);

/// A concept that may be defined by one or more codings and/or plain text
#[derive(Debug, Clone, PartialEq)]
pub struct CodeableConcept {
    id: Option<String>,
    extension: Vec<Extension>,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConcept {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "CodeableConcept",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("coding", Cardinality::OptionalMany, "Coding").summary(),
            FieldDescriptor::new("text", Cardinality::OptionalOne, "string").summary(),
        ],
    };

    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn coding(&self) -> &[Coding] {
        &self.coding
    }

    pub fn text(&self) -> Option<&FhirString> {
        self.text.as_ref()
    }

    pub fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            coding: self.coding.clone(),
            text: self.text.clone(),
        }
    }
}

impl Node for CodeableConcept {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::list(&self.coding),
            2 => FieldValue::optional(self.text.as_ref()),
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
pub struct CodeableConceptBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConceptBuilder {
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

    pub fn coding(mut self, coding: Coding) -> Self {
        self.coding.push(coding);
        self
    }

    pub fn codings(mut self, codings: impl IntoIterator<Item = Coding>) -> Self {
        self.coding.extend(codings);
        self
    }

    pub fn text(mut self, text: FhirString) -> Self {
        self.text = Some(text);
        self
    }

    pub fn build(&self) -> Result<CodeableConcept> {
        finish("CodeableConcept", self.validate())
    }

    fn validate(&self) -> Result<CodeableConcept> {
        let node = CodeableConcept {
            id: self.id.clone(),
            extension: self.extension.clone(),
            coding: self.coding.clone(),
            text: self.text.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(CodeableConcept, CodeableConceptBuilder);
