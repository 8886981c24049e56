// Selection sources, classified once at the boundary.
//
// Engines expose a selection either through a legacy single-range provider
// (a `createRange` object) or through the modern multi-range `Selection`.
// Adapters decide which shape they hold and hand the core a
// `SelectionSource`; the core never probes for properties itself.

use super::Position;
use anyhow::Result;

/// A legacy single-range provider. Its ranges carry no direction.
pub trait LegacySelection {
    type Range;

    /// May fail, e.g. on access-denied in cross-origin or embedded content.
    fn create_range(&self) -> Result<Self::Range>;

    /// Zero or one.
    fn range_count(&self) -> usize;

    fn empty(&self) -> Result<()>;
}

/// A modern multi-range selection with an anchor and a focus.
pub trait ModernSelection {
    type Node;
    type Range;

    fn range_count(&self) -> usize;

    fn range_at(&self, index: usize) -> Result<Self::Range>;

    fn anchor(&self) -> Option<Position<Self::Node>>;

    fn focus(&self) -> Option<Position<Self::Node>>;

    /// `None` when the engine has no `empty` primitive.
    fn empty(&self) -> Option<Result<()>> {
        None
    }

    fn remove_all_ranges(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub enum SelectionSource<L, M> {
    Legacy(L),
    Modern(M),
    /// Absent, or neither recognized shape.
    None,
}

impl<L: LegacySelection, M: ModernSelection> SelectionSource<L, M> {
    pub fn is_none(&self) -> bool {
        matches!(self, SelectionSource::None)
    }

    pub fn range_count(&self) -> usize {
        match self {
            SelectionSource::Legacy(legacy) => legacy.range_count(),
            SelectionSource::Modern(modern) => modern.range_count(),
            SelectionSource::None => 0,
        }
    }

    pub fn has_ranges(&self) -> bool {
        self.range_count() > 0
    }

    /// Clears the live selection. Never fails: an already-empty selection,
    /// or one invalidated because its target element went away mid-event,
    /// may raise on some engines, and that is ignored.
    pub fn clear(&self) {
        let outcome = match self {
            SelectionSource::None => return,
            SelectionSource::Legacy(legacy) => legacy.empty(),
            SelectionSource::Modern(modern) => match modern.empty() {
                Some(outcome) => outcome,
                None => modern.remove_all_ranges(),
            },
        };
        if let Err(err) = outcome {
            log::debug!("ignoring failure to clear selection: {err:#}");
        }
    }
}

/// A window or document handle that can report its current selection.
pub trait SelectionHost {
    type Legacy: LegacySelection;
    type Modern: ModernSelection;

    fn selection(&self) -> SelectionSource<Self::Legacy, Self::Modern>;
}
