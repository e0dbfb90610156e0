//! Extension: an open key/value augmentation of any element

use super::DataType;
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::Result;
use crate::node::{Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, TypeDescriptor};
use crate::validation;
use std::any::Any;

/// Optional extension element. The meaning of the value is defined by `url`.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    id: Option<String>,
    extension: Vec<Extension>,
    url: String,
    value: Option<DataType>,
}

impl Extension {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Extension",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::choice("value", Cardinality::OptionalOne, DataType::ALL),
        ],
    };

    pub fn builder(url: impl Into<String>) -> ExtensionBuilder {
        ExtensionBuilder {
            url: Some(url.into()),
            ..ExtensionBuilder::default()
        }
    }

    /// Identifies the meaning of the extension
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn value(&self) -> Option<&DataType> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            url: Some(self.url.clone()),
            value: self.value.clone(),
        }
    }
}

impl Node for Extension {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::choice(self.value.as_ref()),
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
pub struct ExtensionBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    url: Option<String>,
    value: Option<DataType>,
}

impl ExtensionBuilder {
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

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn value(mut self, value: impl Into<DataType>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(&self) -> Result<Extension> {
        finish("Extension", self.validate())
    }

    fn validate(&self) -> Result<Extension> {
        let config = config::current();
        let url = validation::require_present(self.url.clone(), "url")?;
        validation::check_uri(&config, &url)?;
        let node = Extension {
            id: self.id.clone(),
            extension: self.extension.clone(),
            url,
            value: validation::require_choice_of(self.value.clone(), "value")?,
        };
        validation::require_value_or_children(&config, &node)?;
        Ok(node)
    }
}

impl_builder!(Extension, ExtensionBuilder);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{Boolean, FhirString};

    #[test]
    fn test_extension_with_value() {
        let ext = Extension::builder("http://example.org/flag")
            .value(Boolean::of(true).unwrap())
            .build()
            .unwrap();
        assert_eq!(ext.url(), "http://example.org/flag");
        assert_eq!(ext.value().unwrap().type_name(), "boolean");
        assert_eq!(ext.field(1).nodes()[0].type_name(), "boolean");
    }

    #[test]
    fn test_default_builder_requires_url() {
        let err = ExtensionBuilder::default()
            .value(FhirString::of("x").unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err, Error::MissingRequiredField("url"));
    }

    #[test]
    fn test_empty_extension_fails_ele_1() {
        let err = Extension::builder("http://example.org/empty").build().unwrap_err();
        assert_eq!(err, Error::ValueOrChildrenRequired("Extension"));
    }

    #[test]
    fn test_nested_extensions() {
        let inner = Extension::builder("part")
            .value(FhirString::of("a").unwrap())
            .build()
            .unwrap();
        let outer = Extension::builder("http://example.org/complex")
            .extension(inner.clone())
            .extensions([inner])
            .build()
            .unwrap();
        assert_eq!(outer.extension().len(), 2);
        assert!(outer.value().is_none());
        assert_eq!(outer.to_builder().build().unwrap(), outer);
    }
}
