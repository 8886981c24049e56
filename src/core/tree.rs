// The node primitives the range logic is built on. Implementations are assumed
// correct; nothing here is re-validated.

use std::cmp::Ordering;

pub trait DomTree {
    type Node: Clone + PartialEq;

    fn is_element(&self, node: &Self::Node) -> bool;

    /// The child of `node` at `index`, if there is one.
    fn child_at(&self, node: &Self::Node, index: usize) -> Option<Self::Node>;

    /// Inclusive containment: a node contains itself.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Document order of `a` relative to `b`. `Less` means `a` comes first;
    /// `Equal` only for the same node.
    fn compare_order(&self, a: &Self::Node, b: &Self::Node) -> Ordering;
}

impl<T: DomTree> DomTree for &T {
    type Node = T::Node;

    fn is_element(&self, node: &Self::Node) -> bool {
        (**self).is_element(node)
    }

    fn child_at(&self, node: &Self::Node, index: usize) -> Option<Self::Node> {
        (**self).child_at(node, index)
    }

    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool {
        (**self).contains(ancestor, node)
    }

    fn compare_order(&self, a: &Self::Node, b: &Self::Node) -> Ordering {
        (**self).compare_order(a, b)
    }
}
