/// A boundary point in a document: a node and an offset into it.
///
/// For text nodes the offset counts characters. For elements it counts
/// children, so `(element, 2)` sits between the second and third child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position<N> {
    pub node: N,
    pub offset: usize,
}

impl<N> Position<N> {
    pub fn new(node: N, offset: usize) -> Self {
        Self { node, offset }
    }
}
