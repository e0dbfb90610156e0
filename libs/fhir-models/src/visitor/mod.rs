//! Visitor protocol
//!
//! One generic traversal, [`accept`], walks any node tree using the node's
//! field-descriptor table. For a node reached through field `n`:
//!
//! 1. `pre_visit(node)`; `false` skips the node and its subtree entirely
//! 2. `visit_start(n, node)`
//! 3. `visit(n, node)`; `false` skips the children but still closes the node
//! 4. children, in declared field order
//! 5. `visit_end(n, node)`
//! 6. `post_visit(node)`
//!
//! Elements of a list field are visited in list order and all receive the
//! field's name. Non-empty lists are bracketed by `visit_list_start` /
//! `visit_list_end`. A choice field is visited once under its declared name
//! with the concrete alternative node.

mod collecting;
mod default;
mod modifier;
mod path;

pub use collecting::CollectingVisitor;
pub use default::DefaultVisitor;
pub use modifier::{ModifierExtensionCheck, UnknownModifier};
pub use path::{PathAwareVisitor, PathTracker};

use crate::node::{FieldDescriptor, FieldValue, Node};

/// Callbacks driven by [`accept`]. Every method has a default, so an empty
/// impl degenerates to an unconditional full traversal.
#[allow(unused_variables)]
pub trait Visitor {
    fn pre_visit(&mut self, node: &dyn Node) -> bool {
        true
    }

    fn visit_start(&mut self, element_name: &str, node: &dyn Node) {}

    fn visit(&mut self, element_name: &str, node: &dyn Node) -> bool {
        true
    }

    fn visit_end(&mut self, element_name: &str, node: &dyn Node) {}

    fn post_visit(&mut self, node: &dyn Node) {}

    fn visit_list_start(&mut self, element_name: &str, len: usize, field: &'static FieldDescriptor) {}

    fn visit_list_end(&mut self, element_name: &str, len: usize, field: &'static FieldDescriptor) {}
}

/// Walk `node`, reached through field `element_name`, with `visitor`
pub fn accept<V: Visitor + ?Sized>(element_name: &str, node: &dyn Node, visitor: &mut V) {
    if !visitor.pre_visit(node) {
        return;
    }
    visitor.visit_start(element_name, node);
    if visitor.visit(element_name, node) {
        let descriptor = node.descriptor();
        for (index, field) in descriptor.fields.iter().enumerate() {
            match node.field(index) {
                FieldValue::Absent => {}
                FieldValue::Single(child) => accept(field.name, child, visitor),
                FieldValue::List(children) if children.is_empty() => {}
                FieldValue::List(children) => {
                    visitor.visit_list_start(field.name, children.len(), field);
                    for child in &children {
                        accept(field.name, *child, visitor);
                    }
                    visitor.visit_list_end(field.name, children.len(), field);
                }
            }
        }
    } else {
        tracing::trace!(element_name, type_name = node.type_name(), "children pruned by visitor");
    }
    visitor.visit_end(element_name, node);
    visitor.post_visit(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeExt;
    use crate::resource::{Contract, Offer, Term};
    use crate::types::{Code, CodeableConcept, FhirString, Reference};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        prune: Option<&'static str>,
        skip: Option<&'static str>,
    }

    impl Visitor for Recorder {
        fn pre_visit(&mut self, node: &dyn Node) -> bool {
            Some(node.type_name()) != self.skip
        }

        fn visit_start(&mut self, element_name: &str, node: &dyn Node) {
            self.events.push(format!("start {element_name}:{}", node.type_name()));
        }

        fn visit(&mut self, element_name: &str, _node: &dyn Node) -> bool {
            Some(element_name) != self.prune
        }

        fn visit_end(&mut self, element_name: &str, _node: &dyn Node) {
            self.events.push(format!("end {element_name}"));
        }

        fn visit_list_start(&mut self, element_name: &str, len: usize, _field: &'static FieldDescriptor) {
            self.events.push(format!("list {element_name}[{len}]"));
        }
    }

    fn term(text: &str) -> Term {
        let offer = Offer::builder().text(FhirString::of(text).unwrap()).build().unwrap();
        Term::builder(offer).build().unwrap()
    }

    fn contract() -> Contract {
        Contract::builder()
            .status(Code::of("executed").unwrap())
            .term(term("a"))
            .term(term("b"))
            .build()
            .unwrap()
    }

    fn count_nodes(node: &dyn Node) -> usize {
        1 + (0..node.descriptor().fields.len())
            .flat_map(|i| node.field(i).nodes())
            .map(count_nodes)
            .sum::<usize>()
    }

    #[test]
    fn test_traversal_order() {
        let mut recorder = Recorder::default();
        contract().accept("Contract", &mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "start Contract:Contract",
                "start status:code",
                "end status",
                "list term[2]",
                "start term:Contract.Term",
                "start offer:Contract.Term.Offer",
                "start text:string",
                "end text",
                "end offer",
                "end term",
                "start term:Contract.Term",
                "start offer:Contract.Term.Offer",
                "start text:string",
                "end text",
                "end offer",
                "end term",
                "end Contract",
            ]
        );
    }

    #[test]
    fn test_every_node_visited_once() {
        let contract = contract();
        let mut recorder = Recorder::default();
        contract.accept("Contract", &mut recorder);
        let starts = recorder.events.iter().filter(|e| e.starts_with("start ")).count();
        let ends = recorder.events.iter().filter(|e| e.starts_with("end ")).count();
        assert_eq!(count_nodes(&contract), 8);
        assert_eq!(starts, 8);
        assert_eq!(ends, 8);
    }

    #[test]
    fn test_visit_false_prunes_children_but_closes_node() {
        let mut recorder = Recorder {
            prune: Some("offer"),
            ..Recorder::default()
        };
        contract().accept("Contract", &mut recorder);
        assert!(!recorder.events.iter().any(|e| e.starts_with("start text")));
        assert_eq!(recorder.events.iter().filter(|e| *e == "end offer").count(), 2);
        assert_eq!(recorder.events.iter().filter(|e| *e == "end term").count(), 2);
    }

    #[test]
    fn test_pre_visit_false_skips_node_entirely() {
        let mut recorder = Recorder {
            skip: Some("Contract.Term.Offer"),
            ..Recorder::default()
        };
        contract().accept("Contract", &mut recorder);
        assert!(!recorder.events.iter().any(|e| e.contains("offer")));
        assert!(recorder.events.iter().any(|e| e == "end term"));
        assert_eq!(recorder.events.last().map(String::as_str), Some("end Contract"));
    }

    #[test]
    fn test_choice_visited_under_declared_name() {
        let reference = Reference::builder()
            .reference(FhirString::of("Basic/1").unwrap())
            .build()
            .unwrap();
        let contract = Contract::builder().topic(reference).build().unwrap();
        let mut recorder = Recorder::default();
        (&contract as &dyn Node).accept("Contract", &mut recorder);
        assert!(recorder.events.contains(&"start topic:Reference".to_string()));

        let concept = CodeableConcept::builder()
            .text(FhirString::of("lease").unwrap())
            .build()
            .unwrap();
        let contract = Contract::builder().topic(concept).build().unwrap();
        let mut recorder = Recorder::default();
        contract.accept("Contract", &mut recorder);
        assert!(recorder.events.contains(&"start topic:CodeableConcept".to_string()));
    }

    #[test]
    fn test_empty_impl_walks_everything() {
        struct Noop;
        impl Visitor for Noop {}
        contract().accept("Contract", &mut Noop);
    }
}
