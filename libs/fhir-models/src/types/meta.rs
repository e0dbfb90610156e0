use super::{Coding, DateTime, Extension, Id, Uri};
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::Result;
use crate::node::{Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, TypeDescriptor};
use crate::validation;
use std::any::Any;

/// Metadata about a resource, maintained by the infrastructure
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    id: Option<String>,
    extension: Vec<Extension>,
    version_id: Option<Id>,
    last_updated: Option<DateTime>,
    profile: Vec<Uri>,
    tag: Vec<Coding>,
}

impl Meta {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Meta",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("versionId", Cardinality::OptionalOne, "id").summary(),
            FieldDescriptor::new("lastUpdated", Cardinality::OptionalOne, "dateTime").summary(),
            FieldDescriptor::new("profile", Cardinality::OptionalMany, "uri").summary(),
            FieldDescriptor::new("tag", Cardinality::OptionalMany, "Coding").summary(),
        ],
    };

    pub fn builder() -> MetaBuilder {
        MetaBuilder::default()
    }

    /// Version-specific identifier
    pub fn version_id(&self) -> Option<&Id> {
        self.version_id.as_ref()
    }

    pub fn last_updated(&self) -> Option<&DateTime> {
        self.last_updated.as_ref()
    }

    /// Profiles this resource claims to conform to
    pub fn profile(&self) -> &[Uri] {
        &self.profile
    }

    pub fn tag(&self) -> &[Coding] {
        &self.tag
    }

    pub fn to_builder(&self) -> MetaBuilder {
        MetaBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            profile: self.profile.clone(),
            tag: self.tag.clone(),
        }
    }
}

impl Node for Meta {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::optional(self.version_id.as_ref()),
            2 => FieldValue::optional(self.last_updated.as_ref()),
            3 => FieldValue::list(&self.profile),
            4 => FieldValue::list(&self.tag),
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
pub struct MetaBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    version_id: Option<Id>,
    last_updated: Option<DateTime>,
    profile: Vec<Uri>,
    tag: Vec<Coding>,
}

impl MetaBuilder {
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

    pub fn version_id(mut self, version_id: Id) -> Self {
        self.version_id = Some(version_id);
        self
    }

    pub fn last_updated(mut self, last_updated: DateTime) -> Self {
        self.last_updated = Some(last_updated);
        self
    }

    pub fn profile(mut self, profile: Uri) -> Self {
        self.profile.push(profile);
        self
    }

    pub fn profiles(mut self, profiles: impl IntoIterator<Item = Uri>) -> Self {
        self.profile.extend(profiles);
        self
    }

    pub fn tag(mut self, tag: Coding) -> Self {
        self.tag.push(tag);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = Coding>) -> Self {
        self.tag.extend(tags);
        self
    }

    pub fn build(&self) -> Result<Meta> {
        finish("Meta", self.validate())
    }

    fn validate(&self) -> Result<Meta> {
        let node = Meta {
            id: self.id.clone(),
            extension: self.extension.clone(),
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            profile: self.profile.clone(),
            tag: self.tag.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Meta, MetaBuilder);
