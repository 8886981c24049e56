// Platform-independent selection logic. Nothing in here touches the DOM
// directly; the node primitives and native selections come in through traits.

mod factory;
pub mod order;
mod position;
mod range;
mod source;
#[cfg(test)]
pub(crate) mod testing;
mod tree;

pub use factory::{RangeFactory, clear_selection, has_selection};
pub use position::Position;
pub use range::{RangeBuilder, RangeKind, RangeWrapper};
pub use source::{LegacySelection, ModernSelection, SelectionHost, SelectionSource};
pub use tree::DomTree;
