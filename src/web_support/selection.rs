use super::js_error;
use crate::core::{LegacySelection, ModernSelection, Position, SelectionHost, SelectionSource};
use anyhow::Result;
use web_sys::{Node, Range};

/// The browser's `Selection` object.
pub struct SelectionHandle(pub(super) web_sys::Selection);

impl SelectionHandle {
    pub fn new(selection: web_sys::Selection) -> Self {
        Self(selection)
    }

    pub fn get_anchor_node(&self) -> Option<Node> {
        self.0.anchor_node()
    }

    pub fn get_focus_node(&self) -> Option<Node> {
        self.0.focus_node()
    }

    pub fn get_anchor_offset(&self) -> usize {
        self.0.anchor_offset() as usize
    }

    pub fn get_focus_offset(&self) -> usize {
        self.0.focus_offset() as usize
    }
}

impl ModernSelection for SelectionHandle {
    type Node = Node;
    type Range = Range;

    fn range_count(&self) -> usize {
        self.0.range_count() as usize
    }

    fn range_at(&self, index: usize) -> Result<Range> {
        self.0.get_range_at(u32::try_from(index)?).map_err(js_error)
    }

    fn anchor(&self) -> Option<Position<Node>> {
        let node = self.get_anchor_node()?;
        Some(Position::new(node, self.get_anchor_offset()))
    }

    fn focus(&self) -> Option<Position<Node>> {
        let node = self.get_focus_node()?;
        Some(Position::new(node, self.get_focus_offset()))
    }

    fn empty(&self) -> Option<Result<()>> {
        Some(self.0.empty().map_err(js_error))
    }

    fn remove_all_ranges(&self) -> Result<()> {
        self.0.remove_all_ranges().map_err(js_error)
    }
}

/// Engines that only offer the legacy `document.selection` provider cannot
/// run WebAssembly, so a browser host never produces one.
pub enum NoLegacySelection {}

impl LegacySelection for NoLegacySelection {
    type Range = Range;

    fn create_range(&self) -> Result<Range> {
        match *self {}
    }

    fn range_count(&self) -> usize {
        match *self {}
    }

    fn empty(&self) -> Result<()> {
        match *self {}
    }
}

pub type WebSelectionSource = SelectionSource<NoLegacySelection, SelectionHandle>;

fn classify(selection: Result<Option<web_sys::Selection>>) -> WebSelectionSource {
    match selection {
        Ok(Some(selection)) => SelectionSource::Modern(SelectionHandle(selection)),
        Ok(None) => SelectionSource::None,
        Err(err) => {
            log::debug!("getSelection failed: {err:#}");
            SelectionSource::None
        }
    }
}

impl SelectionHost for web_sys::Window {
    type Legacy = NoLegacySelection;
    type Modern = SelectionHandle;

    fn selection(&self) -> WebSelectionSource {
        classify(self.get_selection().map_err(js_error))
    }
}

impl SelectionHost for web_sys::Document {
    type Legacy = NoLegacySelection;
    type Modern = SelectionHandle;

    fn selection(&self) -> WebSelectionSource {
        classify(self.get_selection().map_err(js_error))
    }
}
