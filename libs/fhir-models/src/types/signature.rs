use super::{Coding, DateTime, Extension, Reference};
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::Result;
use crate::node::{Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, TypeDescriptor};
use crate::validation;
use std::any::Any;

/// A signature along with supporting context
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    id: Option<String>,
    extension: Vec<Extension>,
    r#type: Vec<Coding>,
    when: DateTime,
    who: Reference,
}

impl Signature {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Signature",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("type", Cardinality::RequiredMany, "Coding").summary(),
            FieldDescriptor::new("when", Cardinality::RequiredOne, "dateTime").summary(),
            FieldDescriptor::new("who", Cardinality::RequiredOne, "Reference").summary(),
        ],
    };

    const WHO_TARGETS: &'static [&'static str] = &[
        "Practitioner",
        "PractitionerRole",
        "RelatedPerson",
        "Patient",
        "Device",
        "Organization",
    ];

    pub fn builder(
        r#type: impl IntoIterator<Item = Coding>,
        when: DateTime,
        who: Reference,
    ) -> SignatureBuilder {
        SignatureBuilder {
            r#type: Some(r#type.into_iter().collect()),
            when: Some(when),
            who: Some(who),
            ..SignatureBuilder::default()
        }
    }

    /// Indication of the reason the entity signed the object(s)
    pub fn r#type(&self) -> &[Coding] {
        &self.r#type
    }

    pub fn when(&self) -> &DateTime {
        &self.when
    }

    pub fn who(&self) -> &Reference {
        &self.who
    }

    pub fn to_builder(&self) -> SignatureBuilder {
        SignatureBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            r#type: Some(self.r#type.clone()),
            when: Some(self.when.clone()),
            who: Some(self.who.clone()),
        }
    }
}

impl Node for Signature {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::list(&self.r#type),
            2 => FieldValue::one(&self.when),
            3 => FieldValue::one(&self.who),
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
pub struct SignatureBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    r#type: Option<Vec<Coding>>,
    when: Option<DateTime>,
    who: Option<Reference>,
}

impl SignatureBuilder {
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

    pub fn r#type(mut self, r#type: Coding) -> Self {
        self.r#type.get_or_insert_with(Vec::new).push(r#type);
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = Coding>) -> Self {
        self.r#type.get_or_insert_with(Vec::new).extend(types);
        self
    }

    pub fn when(mut self, when: DateTime) -> Self {
        self.when = Some(when);
        self
    }

    pub fn who(mut self, who: Reference) -> Self {
        self.who = Some(who);
        self
    }

    pub fn build(&self) -> Result<Signature> {
        finish("Signature", self.validate())
    }

    fn validate(&self) -> Result<Signature> {
        let config = config::current();
        let node = Signature {
            id: self.id.clone(),
            extension: self.extension.clone(),
            r#type: validation::require_non_empty(self.r#type.clone(), "type")?,
            when: validation::require_present(self.when.clone(), "when")?,
            who: validation::require_present(self.who.clone(), "who")?,
        };
        validation::check_reference_type(&config, &node.who, "who", Signature::WHO_TARGETS)?;
        Ok(node)
    }
}

impl_builder!(Signature, SignatureBuilder);
