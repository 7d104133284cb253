// ABOUTME: Color picker state for swatch, independent of any UI toolkit.
// ABOUTME: Value synchronization, saved colors, pointer mapping, and the picker component.

pub mod events;
pub mod gesture;
pub mod picker;
pub mod saved;
pub mod sync;

pub use events::{NoopEvents, PickerEvents};
pub use picker::{ColorPicker, PaletteView};
pub use saved::{MruList, SavedColors};
pub use sync::{ColorSync, SyncOutcome};
