use super::{Code, DateTime, Extension, FhirString, Uri};
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::Result;
use crate::node::{Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, TypeDescriptor};
use crate::validation;
use std::any::Any;

/// Content in a format defined elsewhere, referenced by URL
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    id: Option<String>,
    extension: Vec<Extension>,
    content_type: Option<Code>,
    url: Option<Uri>,
    title: Option<FhirString>,
    creation: Option<DateTime>,
}

impl Attachment {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Attachment",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("contentType", Cardinality::OptionalOne, "code").summary(),
            FieldDescriptor::new("url", Cardinality::OptionalOne, "uri").summary(),
            FieldDescriptor::new("title", Cardinality::OptionalOne, "string").summary(),
            FieldDescriptor::new("creation", Cardinality::OptionalOne, "dateTime").summary(),
        ],
    };

    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    /// Mime type of the content
    pub fn content_type(&self) -> Option<&Code> {
        self.content_type.as_ref()
    }

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    pub fn title(&self) -> Option<&FhirString> {
        self.title.as_ref()
    }

    pub fn creation(&self) -> Option<&DateTime> {
        self.creation.as_ref()
    }

    pub fn to_builder(&self) -> AttachmentBuilder {
        AttachmentBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            content_type: self.content_type.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
            creation: self.creation.clone(),
        }
    }
}

impl Node for Attachment {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::optional(self.content_type.as_ref()),
            2 => FieldValue::optional(self.url.as_ref()),
            3 => FieldValue::optional(self.title.as_ref()),
            4 => FieldValue::optional(self.creation.as_ref()),
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
pub struct AttachmentBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    content_type: Option<Code>,
    url: Option<Uri>,
    title: Option<FhirString>,
    creation: Option<DateTime>,
}

impl AttachmentBuilder {
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

    pub fn content_type(mut self, content_type: Code) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn url(mut self, url: Uri) -> Self {
        self.url = Some(url);
        self
    }

    pub fn title(mut self, title: FhirString) -> Self {
        self.title = Some(title);
        self
    }

    pub fn creation(mut self, creation: DateTime) -> Self {
        self.creation = Some(creation);
        self
    }

    pub fn build(&self) -> Result<Attachment> {
        finish("Attachment", self.validate())
    }

    fn validate(&self) -> Result<Attachment> {
        let node = Attachment {
            id: self.id.clone(),
            extension: self.extension.clone(),
            content_type: self.content_type.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
            creation: self.creation.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Attachment, AttachmentBuilder);
