use super::{DateTime, Extension};
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::{Error, Result};
use crate::node::{Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, TypeDescriptor};
use crate::validation;
use std::any::Any;

/// A time range defined by start and end date/time
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    id: Option<String>,
    extension: Vec<Extension>,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl Period {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Period",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("start", Cardinality::OptionalOne, "dateTime").summary(),
            FieldDescriptor::new("end", Cardinality::OptionalOne, "dateTime").summary(),
        ],
    };

    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn start(&self) -> Option<&DateTime> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&DateTime> {
        self.end.as_ref()
    }

    pub fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl Node for Period {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::optional(self.start.as_ref()),
            2 => FieldValue::optional(self.end.as_ref()),
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
pub struct PeriodBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl PeriodBuilder {
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

    pub fn start(mut self, start: DateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn build(&self) -> Result<Period> {
        finish("Period", self.validate())
    }

    fn validate(&self) -> Result<Period> {
        // per-1: if present, start shall have a lower value than end
        if let (Some(start), Some(end)) = (
            self.start.as_ref().and_then(|s| s.value()),
            self.end.as_ref().and_then(|e| e.value()),
        ) {
            if start > end {
                return Err(Error::InvalidValue {
                    type_name: "Period",
                    reason: format!("per-1: start {start} is after end {end}"),
                });
            }
        }
        let node = Period {
            id: self.id.clone(),
            extension: self.extension.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Period, PeriodBuilder);
