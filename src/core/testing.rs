// Fakes standing in for the DOM, native selections and the range builder.

use super::{
    DomTree, LegacySelection, ModernSelection, Position, RangeBuilder, SelectionHost,
    SelectionSource,
};
use anyhow::{Result, anyhow, bail};
use std::{cell::RefCell, cmp::Ordering, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

struct FakeNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: bool,
}

/// A small arena tree. Node 0 is a root element.
pub struct FakeTree {
    nodes: Vec<FakeNode>,
}

impl FakeTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FakeNode {
                parent: None,
                children: Vec::new(),
                element: true,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn add_element(&mut self, parent: NodeId) -> NodeId {
        self.push(parent, true)
    }

    pub fn add_text(&mut self, parent: NodeId) -> NodeId {
        self.push(parent, false)
    }

    fn push(&mut self, parent: NodeId, element: bool) -> NodeId {
        assert!(self.nodes[parent.0].element, "text nodes have no children");
        let id = NodeId(self.nodes.len());
        self.nodes.push(FakeNode {
            parent: Some(parent),
            children: Vec::new(),
            element,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn preorder_index(&self, target: NodeId) -> usize {
        let mut stack = vec![self.root()];
        let mut index = 0;
        while let Some(id) = stack.pop() {
            if id == target {
                return index;
            }
            index += 1;
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        panic!("node {target:?} is not in the tree")
    }
}

impl DomTree for FakeTree {
    type Node = NodeId;

    fn is_element(&self, node: &NodeId) -> bool {
        self.nodes[node.0].element
    }

    fn child_at(&self, node: &NodeId, index: usize) -> Option<NodeId> {
        self.nodes[node.0].children.get(index).copied()
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    fn compare_order(&self, a: &NodeId, b: &NodeId) -> Ordering {
        self.preorder_index(*a).cmp(&self.preorder_index(*b))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeRange {
    pub id: u32,
    pub control: bool,
}

impl FakeRange {
    pub fn text(id: u32) -> Self {
        Self { id, control: false }
    }

    pub fn control(id: u32) -> Self {
        Self { id, control: true }
    }
}

type CallLog = Rc<RefCell<Vec<&'static str>>>;

/// Legacy provider; `range: None` makes `create_range` fail.
#[derive(Clone, Default)]
pub struct FakeLegacy {
    range: Option<FakeRange>,
    fail_clear: bool,
    calls: CallLog,
}

impl FakeLegacy {
    pub fn with_range(range: FakeRange) -> Self {
        Self {
            range: Some(range),
            ..Self::default()
        }
    }

    pub fn denied() -> Self {
        Self::default()
    }

    pub fn failing_clear(mut self) -> Self {
        self.fail_clear = true;
        self
    }

    pub fn clear_calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl LegacySelection for FakeLegacy {
    type Range = FakeRange;

    fn create_range(&self) -> Result<FakeRange> {
        self.range.clone().ok_or_else(|| anyhow!("access denied"))
    }

    fn range_count(&self) -> usize {
        usize::from(self.range.is_some())
    }

    fn empty(&self) -> Result<()> {
        self.calls.borrow_mut().push("empty");
        if self.fail_clear {
            bail!("selection already empty");
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeModern {
    ranges: Vec<FakeRange>,
    anchor: Option<Position<NodeId>>,
    focus: Option<Position<NodeId>>,
    has_empty: bool,
    fail_range_at: bool,
    fail_clear: bool,
    calls: CallLog,
}

impl FakeModern {
    pub fn with_ranges(ranges: Vec<FakeRange>) -> Self {
        Self {
            ranges,
            ..Self::default()
        }
    }

    pub fn anchored(mut self, anchor: Position<NodeId>, focus: Position<NodeId>) -> Self {
        self.anchor = Some(anchor);
        self.focus = Some(focus);
        self
    }

    pub fn supporting_empty(mut self) -> Self {
        self.has_empty = true;
        self
    }

    pub fn failing_range_at(mut self) -> Self {
        self.fail_range_at = true;
        self
    }

    pub fn failing_clear(mut self) -> Self {
        self.fail_clear = true;
        self
    }

    pub fn clear_calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record_clear(&self, call: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_clear {
            bail!("selection is stale");
        }
        Ok(())
    }
}

impl ModernSelection for FakeModern {
    type Node = NodeId;
    type Range = FakeRange;

    fn range_count(&self) -> usize {
        self.ranges.len()
    }

    fn range_at(&self, index: usize) -> Result<FakeRange> {
        if self.fail_range_at {
            bail!("range {index} is gone");
        }
        self.ranges
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow!("no range at {index}"))
    }

    fn anchor(&self) -> Option<Position<NodeId>> {
        self.anchor.clone()
    }

    fn focus(&self) -> Option<Position<NodeId>> {
        self.focus.clone()
    }

    fn empty(&self) -> Option<Result<()>> {
        self.has_empty.then(|| self.record_clear("empty"))
    }

    fn remove_all_ranges(&self) -> Result<()> {
        self.record_clear("remove_all_ranges")
    }
}

pub type FakeSource = SelectionSource<FakeLegacy, FakeModern>;

/// Hands out a clone of its source; clones share the call log.
pub struct FakeHost(pub FakeSource);

impl SelectionHost for FakeHost {
    type Legacy = FakeLegacy;
    type Modern = FakeModern;

    fn selection(&self) -> FakeSource {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeText {
    Native {
        range: FakeRange,
        reversed: bool,
    },
    Contents {
        node: NodeId,
        reversed: bool,
    },
    Positions {
        anchor: Position<NodeId>,
        focus: Position<NodeId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeControl(pub FakeRange);

/// Records the range count of the selection it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeMulti {
    pub range_count: usize,
}

#[derive(Default)]
pub struct FakeBuilder {
    pub fail_native: bool,
}

impl RangeBuilder for FakeBuilder {
    type Node = NodeId;
    type NativeRange = FakeRange;
    type Text = FakeText;
    type Control = FakeControl;
    type Multi = FakeMulti;

    fn is_control_range(&self, range: &FakeRange) -> bool {
        range.control
    }

    fn text_from_native(&self, range: FakeRange, reversed: bool) -> Result<FakeText> {
        if self.fail_native {
            bail!("range {} detached", range.id);
        }
        Ok(FakeText::Native { range, reversed })
    }

    fn text_from_node_contents(&self, node: &NodeId, reversed: bool) -> FakeText {
        FakeText::Contents {
            node: *node,
            reversed,
        }
    }

    fn text_from_positions(&self, anchor: Position<NodeId>, focus: Position<NodeId>) -> FakeText {
        FakeText::Positions { anchor, focus }
    }

    fn control_from_native(&self, range: FakeRange) -> Result<FakeControl> {
        if self.fail_native {
            bail!("range {} detached", range.id);
        }
        Ok(FakeControl(range))
    }

    fn multi_from_selection<M>(&self, selection: &M) -> Result<FakeMulti>
    where
        M: ModernSelection<Node = NodeId, Range = FakeRange>,
    {
        Ok(FakeMulti {
            range_count: selection.range_count(),
        })
    }
}
