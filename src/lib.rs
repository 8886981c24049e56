//! Browser-independent snapshots of a document's selection.
//!
//! [`RangeFactory`] turns a native selection into a [`RangeWrapper`]: a text
//! range with a known direction, a whole-element control range, or a
//! multi-range selection. The node primitives and native selection APIs come
//! in through [`DomTree`], [`SelectionHost`] and [`RangeBuilder`];
//! [`web_support`] implements them over `web_sys`.

mod core;
pub mod web_support;

pub use crate::core::{
    DomTree, LegacySelection, ModernSelection, Position, RangeBuilder, RangeFactory, RangeKind,
    RangeWrapper, SelectionHost, SelectionSource, clear_selection, has_selection, order,
};
