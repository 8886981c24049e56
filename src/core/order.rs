// Selection direction from boundary points alone.

use super::{DomTree, Position};

/// Whether `focus` comes before `anchor` in document order.
///
/// An offset into an element names the gap before the child at that index.
/// Non-zero element offsets are first moved onto that child so both sides
/// can be compared as nodes. When there is no such child the position is
/// the element's end, and a node inside that element necessarily precedes
/// it; those cases are settled by containment before the general order
/// comparison, which cannot place an end boundary relative to a descendant.
/// If containment doesn't apply, the original node and offset are compared.
pub fn is_reversed<T: DomTree>(
    tree: &T,
    anchor: &Position<T::Node>,
    focus: &Position<T::Node>,
) -> bool {
    if anchor.node == focus.node {
        return focus.offset < anchor.offset;
    }

    let (mut anchor_node, mut anchor_offset) = (anchor.node.clone(), anchor.offset);
    if tree.is_element(&anchor_node) && anchor_offset != 0 {
        match tree.child_at(&anchor_node, anchor_offset) {
            Some(child) => {
                anchor_node = child;
                anchor_offset = 0;
            }
            None if tree.contains(&anchor_node, &focus.node) => return true,
            None => {}
        }
    }

    let (mut focus_node, mut focus_offset) = (focus.node.clone(), focus.offset);
    if tree.is_element(&focus_node) && focus_offset != 0 {
        match tree.child_at(&focus_node, focus_offset) {
            Some(child) => {
                focus_node = child;
                focus_offset = 0;
            }
            None if tree.contains(&focus_node, &anchor_node) => return false,
            None => {}
        }
    }

    tree.compare_order(&anchor_node, &focus_node)
        .then(anchor_offset.cmp(&focus_offset))
        .is_gt()
}
