use super::{check_resource_base, AnyResource};
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::Result;
use crate::node::{
    Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, Resource, TypeDescriptor,
};
use crate::types::{Code, CodeableConcept, Date, Extension, Identifier, Meta, Reference, Uri};
use crate::validation;
use std::any::Any;

/// Resource for non-supported content
///
/// Used for concepts that have no dedicated resource type, identified by
/// `code`.
#[derive(Debug, Clone, PartialEq)]
pub struct Basic {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    contained: Vec<AnyResource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    code: CodeableConcept,
    subject: Option<Reference>,
    created: Option<Date>,
    author: Option<Reference>,
}

impl Basic {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Basic",
        kind: NodeKind::Resource,
        fields: &[
            FieldDescriptor::META,
            FieldDescriptor::IMPLICIT_RULES,
            FieldDescriptor::LANGUAGE,
            FieldDescriptor::CONTAINED,
            FieldDescriptor::EXTENSION,
            FieldDescriptor::MODIFIER_EXTENSION,
            FieldDescriptor::new("identifier", Cardinality::OptionalMany, "Identifier").summary(),
            FieldDescriptor::new("code", Cardinality::RequiredOne, "CodeableConcept").summary(),
            FieldDescriptor::new("subject", Cardinality::OptionalOne, "Reference").summary(),
            FieldDescriptor::new("created", Cardinality::OptionalOne, "date"),
            FieldDescriptor::new("author", Cardinality::OptionalOne, "Reference").summary(),
        ],
    };

    const AUTHOR_TARGETS: &'static [&'static str] = &[
        "Practitioner",
        "PractitionerRole",
        "Patient",
        "RelatedPerson",
        "Organization",
    ];

    pub fn builder(code: CodeableConcept) -> BasicBuilder {
        BasicBuilder {
            code: Some(code),
            ..BasicBuilder::default()
        }
    }

    pub fn implicit_rules(&self) -> Option<&Uri> {
        self.implicit_rules.as_ref()
    }

    pub fn language(&self) -> Option<&Code> {
        self.language.as_ref()
    }

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    /// Kind of resource
    pub fn code(&self) -> &CodeableConcept {
        &self.code
    }

    /// Identifies the focus of this resource
    pub fn subject(&self) -> Option<&Reference> {
        self.subject.as_ref()
    }

    pub fn created(&self) -> Option<&Date> {
        self.created.as_ref()
    }

    /// Who created
    pub fn author(&self) -> Option<&Reference> {
        self.author.as_ref()
    }

    pub fn to_builder(&self) -> BasicBuilder {
        BasicBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            contained: self.contained.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            code: Some(self.code.clone()),
            subject: self.subject.clone(),
            created: self.created.clone(),
            author: self.author.clone(),
        }
    }
}

impl Node for Basic {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::optional(self.meta.as_ref()),
            1 => FieldValue::optional(self.implicit_rules.as_ref()),
            2 => FieldValue::optional(self.language.as_ref()),
            3 => FieldValue::list(&self.contained),
            4 => FieldValue::list(&self.extension),
            5 => FieldValue::list(&self.modifier_extension),
            6 => FieldValue::list(&self.identifier),
            7 => FieldValue::one(&self.code),
            8 => FieldValue::optional(self.subject.as_ref()),
            9 => FieldValue::optional(self.created.as_ref()),
            10 => FieldValue::optional(self.author.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Resource for Basic {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn contained(&self) -> &[AnyResource] {
        &self.contained
    }
}

#[derive(Debug, Clone, Default)]
pub struct BasicBuilder {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    contained: Vec<AnyResource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    code: Option<CodeableConcept>,
    subject: Option<Reference>,
    created: Option<Date>,
    author: Option<Reference>,
}

impl BasicBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn implicit_rules(mut self, implicit_rules: Uri) -> Self {
        self.implicit_rules = Some(implicit_rules);
        self
    }

    pub fn language(mut self, language: Code) -> Self {
        self.language = Some(language);
        self
    }

    pub fn contained(mut self, resource: impl Into<AnyResource>) -> Self {
        self.contained.push(resource.into());
        self
    }

    pub fn contained_all(mut self, resources: impl IntoIterator<Item = AnyResource>) -> Self {
        self.contained.extend(resources);
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

    pub fn modifier_extension(mut self, extension: Extension) -> Self {
        self.modifier_extension.push(extension);
        self
    }

    pub fn modifier_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.modifier_extension.extend(extensions);
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier.push(identifier);
        self
    }

    pub fn identifiers(mut self, identifiers: impl IntoIterator<Item = Identifier>) -> Self {
        self.identifier.extend(identifiers);
        self
    }

    pub fn code(mut self, code: CodeableConcept) -> Self {
        self.code = Some(code);
        self
    }

    pub fn subject(mut self, subject: Reference) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn created(mut self, created: Date) -> Self {
        self.created = Some(created);
        self
    }

    pub fn author(mut self, author: Reference) -> Self {
        self.author = Some(author);
        self
    }

    pub fn build(&self) -> Result<Basic> {
        finish("Basic", self.validate())
    }

    fn validate(&self) -> Result<Basic> {
        let config = config::current();
        check_resource_base(self.id.as_deref(), &self.contained)?;
        Ok(Basic {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            contained: self.contained.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            code: validation::require_present(self.code.clone(), "code")?,
            subject: self.subject.clone(),
            created: self.created.clone(),
            author: match &self.author {
                Some(author) => {
                    validation::check_reference_type(&config, author, "author", Basic::AUTHOR_TARGETS)?;
                    Some(author.clone())
                }
                None => None,
            },
        })
    }
}

impl_builder!(Basic, BasicBuilder);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::FhirString;

    fn concept(text: &str) -> CodeableConcept {
        CodeableConcept::builder()
            .text(FhirString::of(text).unwrap())
            .build()
            .unwrap()
    }

    fn reference(value: &str) -> Reference {
        Reference::builder()
            .reference(FhirString::of(value).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_builder_misses_code() {
        let err = BasicBuilder::default().build().unwrap_err();
        assert_eq!(err, Error::MissingRequiredField("code"));
    }

    #[test]
    fn test_required_field_setter_last_write_wins() {
        let basic = Basic::builder(concept("first")).code(concept("second")).build().unwrap();
        assert_eq!(basic.code(), &concept("second"));
    }

    #[test]
    fn test_author_reference_type() {
        let ok = Basic::builder(concept("x"))
            .author(reference("Practitioner/7"))
            .build();
        assert!(ok.is_ok());
        let err = Basic::builder(concept("x"))
            .author(reference("Device/7"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReferenceType { field: "author", .. }));
    }

    #[test]
    fn test_resource_base_fields_come_first() {
        let names: Vec<_> = Basic::DESCRIPTOR.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            &names[..6],
            &["meta", "implicitRules", "language", "contained", "extension", "modifierExtension"]
        );
        assert_eq!(Basic::DESCRIPTOR.kind, NodeKind::Resource);
    }
}
