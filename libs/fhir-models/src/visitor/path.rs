//! Path tracking during traversal
//!
//! Paths use FHIRPath notation with explicit list indices, e.g.
//! `Contract.term[0].group[1].offer`. The root segment is the element name
//! passed to `accept`.

use super::Visitor;
use crate::node::{FieldDescriptor, Node};

#[derive(Debug)]
struct ListFrame {
    depth: usize,
    next: usize,
}

/// Maintains the path of the node currently being visited. Drive it from a
/// visitor's callbacks: [`PathTracker::enter`] from `pre_visit`,
/// [`PathTracker::start`] / [`PathTracker::end`] from `visit_start` /
/// `visit_end`, and the list hooks from the list callbacks.
#[derive(Debug, Default)]
pub struct PathTracker {
    stack: Vec<String>,
    lists: Vec<ListFrame>,
    pending_index: Option<usize>,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the innermost open node
    pub fn path(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Claim the next list index, if the node about to be visited is a list
    /// element. Must be called for every node, including ones that end up
    /// skipped, so later siblings keep their positions.
    pub fn enter(&mut self) {
        let depth = self.stack.len();
        self.pending_index = match self.lists.last_mut() {
            Some(frame) if frame.depth == depth => {
                let index = frame.next;
                frame.next += 1;
                Some(index)
            }
            _ => None,
        };
    }

    pub fn start(&mut self, element_name: &str) {
        let segment = match self.pending_index.take() {
            Some(index) => format!("{element_name}[{index}]"),
            None => element_name.to_string(),
        };
        let path = match self.stack.last() {
            Some(parent) => format!("{parent}.{segment}"),
            None => segment,
        };
        self.stack.push(path);
    }

    pub fn end(&mut self) {
        self.stack.pop();
    }

    pub fn list_start(&mut self) {
        self.lists.push(ListFrame {
            depth: self.stack.len(),
            next: 0,
        });
    }

    pub fn list_end(&mut self) {
        self.lists.pop();
    }
}

/// Hands every node, together with its path, to a callback. The callback's
/// return value has the meaning of [`Visitor::visit`].
pub struct PathAwareVisitor<F> {
    tracker: PathTracker,
    callback: F,
}

impl<F> PathAwareVisitor<F>
where
    F: FnMut(&str, &dyn Node) -> bool,
{
    pub fn new(callback: F) -> Self {
        Self {
            tracker: PathTracker::new(),
            callback,
        }
    }
}

impl<F> Visitor for PathAwareVisitor<F>
where
    F: FnMut(&str, &dyn Node) -> bool,
{
    fn pre_visit(&mut self, _node: &dyn Node) -> bool {
        self.tracker.enter();
        true
    }

    fn visit_start(&mut self, element_name: &str, _node: &dyn Node) {
        self.tracker.start(element_name);
    }

    fn visit(&mut self, _element_name: &str, node: &dyn Node) -> bool {
        let path = self.tracker.path().unwrap_or_default();
        (self.callback)(path, node)
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
