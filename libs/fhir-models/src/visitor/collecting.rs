use super::Visitor;
use crate::node::Node;

/// Collects a copy of every node of type `T` in traversal order
#[derive(Debug)]
pub struct CollectingVisitor<T> {
    collected: Vec<T>,
}

impl<T: Node + Clone> CollectingVisitor<T> {
    pub fn new() -> Self {
        Self {
            collected: Vec::new(),
        }
    }

    pub fn result(&self) -> &[T] {
        &self.collected
    }

    pub fn into_result(self) -> Vec<T> {
        self.collected
    }
}

impl<T: Node + Clone> Default for CollectingVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Node + Clone> Visitor for CollectingVisitor<T> {
    fn visit(&mut self, _element_name: &str, node: &dyn Node) -> bool {
        if let Some(found) = node.downcast_ref::<T>() {
            self.collected.push(found.clone());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeExt;
    use crate::resource::{Contract, Offer, Term};
    use crate::types::{Coding, FhirString};

    fn term(text: &str, groups: Vec<Term>) -> Term {
        let offer = Offer::builder().text(FhirString::of(text).unwrap()).build().unwrap();
        Term::builder(offer).groups(groups).build().unwrap()
    }

    #[test]
    fn test_collects_nested_terms_in_order() {
        let contract = Contract::builder()
            .term(term("1", vec![term("1.1", vec![]), term("1.2", vec![])]))
            .term(term("2", vec![]))
            .build()
            .unwrap();
        let mut visitor = CollectingVisitor::<Term>::new();
        contract.accept("Contract", &mut visitor);
        let texts: Vec<_> = visitor
            .into_result()
            .iter()
            .map(|t| t.offer().text().unwrap().value().unwrap().clone())
            .collect();
        assert_eq!(texts, vec!["1", "1.1", "1.2", "2"]);
    }

    #[test]
    fn test_collects_nothing_when_absent() {
        let contract = Contract::builder().build().unwrap();
        let mut visitor = CollectingVisitor::<Coding>::default();
        contract.accept("Contract", &mut visitor);
        assert!(visitor.result().is_empty());
    }
}
