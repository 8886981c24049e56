// Building normalized range wrappers from whatever selection the host has.

use super::{
    DomTree, LegacySelection, ModernSelection, Position, RangeBuilder, RangeKind, RangeWrapper,
    SelectionHost, SelectionSource, order,
};

/// Decides which range wrapper a selection becomes and normalizes its
/// direction before handing construction to the builder.
///
/// Every operation is a synchronous snapshot; nothing here keeps state
/// between calls or raises on a host in a transient state.
pub struct RangeFactory<T, B> {
    tree: T,
    builder: B,
}

impl<T, B> RangeFactory<T, B>
where
    T: DomTree,
    B: RangeBuilder<Node = T::Node>,
{
    pub fn new(tree: T, builder: B) -> Self {
        Self { tree, builder }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// The host's current selection as a wrapper, if it has one.
    pub fn create_from_host<H>(&self, host: &H) -> Option<RangeWrapper<B>>
    where
        H: SelectionHost,
        H::Legacy: LegacySelection<Range = B::NativeRange>,
        H::Modern: ModernSelection<Node = T::Node, Range = B::NativeRange>,
    {
        self.create_from_selection_source(&host.selection())
    }

    pub fn create_from_selection_source<L, M>(
        &self,
        source: &SelectionSource<L, M>,
    ) -> Option<RangeWrapper<B>>
    where
        L: LegacySelection<Range = B::NativeRange>,
        M: ModernSelection<Node = T::Node, Range = B::NativeRange>,
    {
        match source {
            SelectionSource::None => None,
            SelectionSource::Legacy(legacy) => match legacy.create_range() {
                // Legacy ranges carry no direction.
                Ok(range) => self.create_from_native_range(range, false),
                Err(err) => {
                    log::debug!("legacy selection refused to create a range: {err:#}");
                    None
                }
            },
            SelectionSource::Modern(modern) => match modern.range_count() {
                0 => None,
                1 => self.create_from_single_range(modern),
                count => match self.builder.multi_from_selection(modern) {
                    Ok(multi) => Some(RangeWrapper::Multi(multi)),
                    Err(err) => {
                        log::debug!("failed to wrap selection of {count} ranges: {err:#}");
                        None
                    }
                },
            },
        }
    }

    fn create_from_single_range<M>(&self, modern: &M) -> Option<RangeWrapper<B>>
    where
        M: ModernSelection<Node = T::Node, Range = B::NativeRange>,
    {
        let range = match modern.range_at(0) {
            Ok(range) => range,
            Err(err) => {
                log::debug!("failed to read selection range: {err:#}");
                return None;
            }
        };
        let reversed = match (modern.anchor(), modern.focus()) {
            (Some(anchor), Some(focus)) => self.is_reversed(&anchor, &focus),
            _ => {
                log::trace!("selection has a range but no anchor or focus");
                false
            }
        };
        self.create_from_native_range(range, reversed)
    }

    pub fn classify(&self, range: &B::NativeRange, reversed: bool) -> RangeKind {
        if self.builder.is_control_range(range) {
            RangeKind::Control
        } else {
            RangeKind::Text { reversed }
        }
    }

    /// Wraps a single native range. `reversed` is ignored for control ranges.
    pub fn create_from_native_range(
        &self,
        range: B::NativeRange,
        reversed: bool,
    ) -> Option<RangeWrapper<B>> {
        let wrapped = match self.classify(&range, reversed) {
            RangeKind::Control => self
                .builder
                .control_from_native(range)
                .map(RangeWrapper::Control),
            RangeKind::Text { reversed } => self
                .builder
                .text_from_native(range, reversed)
                .map(RangeWrapper::Text),
        };
        wrapped
            .inspect_err(|err| log::debug!("failed to wrap native range: {err:#}"))
            .ok()
    }

    /// Always a text range, even for an element that could be a control target.
    pub fn create_from_node_contents(&self, node: &T::Node, reversed: bool) -> RangeWrapper<B> {
        RangeWrapper::Text(self.builder.text_from_node_contents(node, reversed))
    }

    /// A collapsed text range at `(node, offset)`.
    pub fn create_caret(&self, node: T::Node, offset: usize) -> RangeWrapper<B> {
        let caret = Position::new(node, offset);
        self.create_from_positions(caret.clone(), caret)
    }

    pub fn create_from_positions(
        &self,
        anchor: Position<T::Node>,
        focus: Position<T::Node>,
    ) -> RangeWrapper<B> {
        RangeWrapper::Text(self.builder.text_from_positions(anchor, focus))
    }

    pub fn is_reversed(&self, anchor: &Position<T::Node>, focus: &Position<T::Node>) -> bool {
        order::is_reversed(&self.tree, anchor, focus)
    }
}

/// Clears the host's live selection, ignoring any failure to do so.
pub fn clear_selection<H: SelectionHost>(host: &H) {
    host.selection().clear();
}

pub fn has_selection<H: SelectionHost>(host: &H) -> bool {
    host.selection().has_ranges()
}
