// The range wrappers the factory hands out, and the builder seam that
// constructs them.

use super::{ModernSelection, Position};
use anyhow::Result;
use std::fmt;

/// Constructors for the three concrete range wrappers, plus the native
/// control-range test.
///
/// Constructors that read a native object may fail; the factory turns those
/// failures into "no selection". Constructors from known nodes cannot fail.
pub trait RangeBuilder {
    type Node: Clone + PartialEq;
    type NativeRange;
    type Text;
    type Control;
    type Multi;

    /// True iff the native range selects a whole element rather than text.
    fn is_control_range(&self, range: &Self::NativeRange) -> bool;

    fn text_from_native(&self, range: Self::NativeRange, reversed: bool) -> Result<Self::Text>;

    fn text_from_node_contents(&self, node: &Self::Node, reversed: bool) -> Self::Text;

    /// Any direction is derived by the builder itself.
    fn text_from_positions(
        &self,
        anchor: Position<Self::Node>,
        focus: Position<Self::Node>,
    ) -> Self::Text;

    fn control_from_native(&self, range: Self::NativeRange) -> Result<Self::Control>;

    fn multi_from_selection<M>(&self, selection: &M) -> Result<Self::Multi>
    where
        M: ModernSelection<Node = Self::Node, Range = Self::NativeRange>;
}

/// Which wrapper a single native range becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Text { reversed: bool },
    /// Direction is meaningless for a whole-element selection.
    Control,
}

/// A point-in-time snapshot of a selection. It does not follow later
/// document mutation.
pub enum RangeWrapper<B: RangeBuilder> {
    Text(B::Text),
    Control(B::Control),
    Multi(B::Multi),
}

impl<B: RangeBuilder> RangeWrapper<B> {
    pub fn as_text(&self) -> Option<&B::Text> {
        match self {
            RangeWrapper::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_control(&self) -> Option<&B::Control> {
        match self {
            RangeWrapper::Control(control) => Some(control),
            _ => None,
        }
    }

    pub fn as_multi(&self) -> Option<&B::Multi> {
        match self {
            RangeWrapper::Multi(multi) => Some(multi),
            _ => None,
        }
    }
}

impl<B> fmt::Debug for RangeWrapper<B>
where
    B: RangeBuilder,
    B::Text: fmt::Debug,
    B::Control: fmt::Debug,
    B::Multi: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeWrapper::Text(text) => f.debug_tuple("Text").field(text).finish(),
            RangeWrapper::Control(control) => f.debug_tuple("Control").field(control).finish(),
            RangeWrapper::Multi(multi) => f.debug_tuple("Multi").field(multi).finish(),
        }
    }
}
