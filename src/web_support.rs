// Browser bindings for the selection core. These wrap web_sys types so the
// core only ever sees them through its traits.

mod console;
mod selection;
mod snapshot;
mod tree;

pub use console::init_console_logging;
pub use selection::{NoLegacySelection, SelectionHandle, WebSelectionSource};
pub use snapshot::{ControlSnapshot, MultiSnapshot, SnapshotBuilder, TextSnapshot};
pub use tree::WebTree;

use crate::core::RangeFactory;
use anyhow::anyhow;
use web_sys::wasm_bindgen::JsValue;

pub type WebRangeFactory = RangeFactory<WebTree, SnapshotBuilder>;

impl Default for WebRangeFactory {
    fn default() -> Self {
        RangeFactory::new(WebTree, SnapshotBuilder)
    }
}

/// Converts a thrown JS value into an error. `JsValue` can't cross threads,
/// so only its message is kept.
pub fn js_error(err: JsValue) -> anyhow::Error {
    match err.as_string() {
        Some(message) => anyhow!(message),
        None => anyhow!("{err:?}"),
    }
}
