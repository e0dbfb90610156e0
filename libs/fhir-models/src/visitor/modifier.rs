//! Modifier extension check
//!
//! A modifier extension changes how its owning node must be interpreted. A
//! consumer that does not understand one must treat the node as not safely
//! processable. [`ModifierExtensionCheck`] walks a tree and reports every
//! modifier extension whose URL is outside the consumer's understood set.

use super::{PathTracker, Visitor};
use crate::node::{FieldDescriptor, Node};
use std::collections::HashSet;

/// An unrecognized modifier extension and where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModifier {
    /// Path of the node carrying the extension
    pub path: String,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct ModifierExtensionCheck {
    understood: HashSet<String>,
    tracker: PathTracker,
    unknown: Vec<UnknownModifier>,
}

impl ModifierExtensionCheck {
    pub fn new<I, S>(understood: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            understood: understood.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn unknown(&self) -> &[UnknownModifier] {
        &self.unknown
    }

    /// `true` when every modifier extension seen so far is understood
    pub fn is_safe(&self) -> bool {
        self.unknown.is_empty()
    }
}

impl Visitor for ModifierExtensionCheck {
    fn pre_visit(&mut self, _node: &dyn Node) -> bool {
        self.tracker.enter();
        true
    }

    fn visit_start(&mut self, element_name: &str, _node: &dyn Node) {
        self.tracker.start(element_name);
    }

    fn visit(&mut self, _element_name: &str, node: &dyn Node) -> bool {
        let path = self.tracker.path().unwrap_or_default();
        for extension in node.modifier_extension() {
            if !self.understood.contains(extension.url()) {
                tracing::debug!(path, url = extension.url(), "unknown modifier extension");
                self.unknown.push(UnknownModifier {
                    path: path.to_string(),
                    url: extension.url().to_string(),
                });
            }
        }
        true
    }

    fn visit_end(&mut self, _element_name: &str, _node: &dyn Node) {
        self.tracker.end();
    }

    fn visit_list_start(&mut self, _element_name: &str, _len: usize, _field: &'static FieldDescriptor) {
        self.tracker.list_start();
    }

    fn visit_list_end(&mut self, _element_name: &str, _len: usize, _field: &'static FieldDescriptor) {
        self.tracker.list_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeExt;
    use crate::resource::{Contract, Offer, Term};
    use crate::types::{Boolean, Extension, FhirString};

    fn modifier(url: &str) -> Extension {
        Extension::builder(url)
            .value(Boolean::of(true).unwrap())
            .build()
            .unwrap()
    }

    fn contract() -> Contract {
        let offer = Offer::builder().text(FhirString::of("x").unwrap()).build().unwrap();
        let term = Term::builder(offer)
            .modifier_extension(modifier("http://example.org/void-clause"))
            .build()
            .unwrap();
        Contract::builder()
            .modifier_extension(modifier("http://example.org/known"))
            .term(term)
            .build()
            .unwrap()
    }

    #[test]
    fn test_reports_unknown_with_path() {
        let mut check = ModifierExtensionCheck::new(["http://example.org/known"]);
        contract().accept("Contract", &mut check);
        assert!(!check.is_safe());
        assert_eq!(
            check.unknown(),
            &[UnknownModifier {
                path: "Contract.term[0]".to_string(),
                url: "http://example.org/void-clause".to_string(),
            }]
        );
    }

    #[test]
    fn test_all_understood() {
        let mut check = ModifierExtensionCheck::new([
            "http://example.org/known",
            "http://example.org/void-clause",
        ]);
        contract().accept("Contract", &mut check);
        assert!(check.is_safe());
    }
}
