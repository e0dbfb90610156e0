use super::Visitor;
use crate::node::Node;

/// Visitor with no-op callbacks that either walks the whole tree or stops
/// below the node it is started on.
#[derive(Debug, Clone, Copy)]
pub struct DefaultVisitor {
    visit_children: bool,
}

impl DefaultVisitor {
    pub fn new(visit_children: bool) -> Self {
        Self { visit_children }
    }

    pub fn visit_children(&self) -> bool {
        self.visit_children
    }
}

impl Default for DefaultVisitor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Visitor for DefaultVisitor {
    fn visit(&mut self, _element_name: &str, _node: &dyn Node) -> bool {
        self.visit_children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_walks_children() {
        assert!(DefaultVisitor::default().visit_children());
        assert!(!DefaultVisitor::new(false).visit_children());
    }
}
