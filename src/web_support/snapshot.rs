// Point-in-time range wrappers for the browser. They copy boundary nodes and
// offsets out of native ranges instead of holding live `Range` objects, so
// later edits to the document don't move them.

use super::{WebTree, js_error};
use crate::core::{ModernSelection, Position, RangeBuilder, order};
use anyhow::{Result, anyhow};
use web_sys::{CharacterData, Element, Node, Range, wasm_bindgen::JsCast};

// Elements a browser selects as a whole rather than as text.
const EMBEDDED_TAGS: [&str; 4] = ["IMG", "OBJECT", "EMBED", "IFRAME"];

#[derive(Debug, Clone, PartialEq)]
pub struct TextSnapshot {
    anchor: Position<Node>,
    focus: Position<Node>,
    reversed: bool,
}

impl TextSnapshot {
    fn from_bounds(start: Position<Node>, end: Position<Node>, reversed: bool) -> Self {
        let (anchor, focus) = if reversed { (end, start) } else { (start, end) };
        Self {
            anchor,
            focus,
            reversed,
        }
    }

    pub fn anchor(&self) -> &Position<Node> {
        &self.anchor
    }

    pub fn focus(&self) -> &Position<Node> {
        &self.focus
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The boundary that comes first in the document.
    pub fn start(&self) -> &Position<Node> {
        if self.reversed { &self.focus } else { &self.anchor }
    }

    pub fn end(&self) -> &Position<Node> {
        if self.reversed { &self.anchor } else { &self.focus }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor.node.is_same_node(Some(&self.focus.node))
            && self.anchor.offset == self.focus.offset
    }
}

/// A whole embedded element selected as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSnapshot {
    element: Element,
}

impl ControlSnapshot {
    pub fn element(&self) -> &Element {
        &self.element
    }
}

/// Every range of a multi-range selection, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSnapshot {
    ranges: Vec<TextSnapshot>,
}

impl MultiSnapshot {
    pub fn ranges(&self) -> &[TextSnapshot] {
        &self.ranges
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotBuilder;

fn bounds(range: &Range) -> Result<(Position<Node>, Position<Node>)> {
    let start = Position::new(
        range.start_container().map_err(js_error)?,
        range.start_offset().map_err(js_error)? as usize,
    );
    let end = Position::new(
        range.end_container().map_err(js_error)?,
        range.end_offset().map_err(js_error)? as usize,
    );
    Ok((start, end))
}

// The element a range spans exactly, if it spans a single element child.
fn wrapped_element(range: &Range) -> Option<Element> {
    let (start, end) = bounds(range).ok()?;
    let spans_one = end.offset.checked_sub(start.offset) == Some(1);
    if !spans_one || !start.node.is_same_node(Some(&end.node)) {
        return None;
    }
    let child = start.node.child_nodes().item(u32::try_from(start.offset).ok()?)?;
    child.dyn_into::<Element>().ok()
}

// DOM length: characters for character data, children for everything else.
fn node_length(node: &Node) -> usize {
    match node.dyn_ref::<CharacterData>() {
        Some(data) => data.length() as usize,
        None => node.child_nodes().length() as usize,
    }
}

impl RangeBuilder for SnapshotBuilder {
    type Node = Node;
    type NativeRange = Range;
    type Text = TextSnapshot;
    type Control = ControlSnapshot;
    type Multi = MultiSnapshot;

    fn is_control_range(&self, range: &Range) -> bool {
        wrapped_element(range).is_some_and(|element| {
            let tag = element.tag_name();
            EMBEDDED_TAGS.iter().any(|embedded| embedded.eq_ignore_ascii_case(&tag))
        })
    }

    fn text_from_native(&self, range: Range, reversed: bool) -> Result<TextSnapshot> {
        let (start, end) = bounds(&range)?;
        Ok(TextSnapshot::from_bounds(start, end, reversed))
    }

    fn text_from_node_contents(&self, node: &Node, reversed: bool) -> TextSnapshot {
        let start = Position::new(node.clone(), 0);
        let end = Position::new(node.clone(), node_length(node));
        TextSnapshot::from_bounds(start, end, reversed)
    }

    fn text_from_positions(&self, anchor: Position<Node>, focus: Position<Node>) -> TextSnapshot {
        let reversed = order::is_reversed(&WebTree, &anchor, &focus);
        TextSnapshot {
            anchor,
            focus,
            reversed,
        }
    }

    fn control_from_native(&self, range: Range) -> Result<ControlSnapshot> {
        let element =
            wrapped_element(&range).ok_or_else(|| anyhow!("range does not span one element"))?;
        Ok(ControlSnapshot { element })
    }

    fn multi_from_selection<M>(&self, selection: &M) -> Result<MultiSnapshot>
    where
        M: ModernSelection<Node = Node, Range = Range>,
    {
        let ranges = (0..selection.range_count())
            .map(|index| {
                let range = selection.range_at(index)?;
                self.text_from_native(range, false)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiSnapshot { ranges })
    }
}
