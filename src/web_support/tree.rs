use crate::core::DomTree;
use std::cmp::Ordering;
use web_sys::Node;

/// The live DOM as seen through `web_sys::Node`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebTree;

impl DomTree for WebTree {
    type Node = Node;

    fn is_element(&self, node: &Node) -> bool {
        node.node_type() == Node::ELEMENT_NODE
    }

    fn child_at(&self, node: &Node, index: usize) -> Option<Node> {
        node.child_nodes().item(u32::try_from(index).ok()?)
    }

    fn contains(&self, ancestor: &Node, node: &Node) -> bool {
        ancestor.contains(Some(node))
    }

    fn compare_order(&self, a: &Node, b: &Node) -> Ordering {
        if a.is_same_node(Some(b)) {
            return Ordering::Equal;
        }
        // Bits describe where `b` sits relative to `a`.
        let position = a.compare_document_position(b);
        if position & Node::DOCUMENT_POSITION_FOLLOWING != 0 {
            Ordering::Less
        } else if position & Node::DOCUMENT_POSITION_PRECEDING != 0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
