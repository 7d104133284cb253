// ABOUTME: Callbacks emitted by the color picker.
// ABOUTME: Change notifications plus saved-list requests in caller-owned mode.

/// Receiver for picker events. Every method defaults to doing nothing.
pub trait PickerEvents {
    /// A committed color change, `#RRGGBB` or `#RRGGBBAA` with alpha enabled
    fn on_change(&mut self, _hex: &str) {}

    /// The user asked to save `hex` (caller-owned saved list only)
    fn on_save_color(&mut self, _hex: &str) {}

    /// The saved list should be emptied (caller-owned saved list only)
    fn on_clear_saved(&mut self) {}
}

/// Ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl PickerEvents for NoopEvents {}

impl<T: PickerEvents + ?Sized> PickerEvents for &mut T {
    fn on_change(&mut self, hex: &str) {
        (**self).on_change(hex);
    }

    fn on_save_color(&mut self, hex: &str) {
        (**self).on_save_color(hex);
    }

    fn on_clear_saved(&mut self) {
        (**self).on_clear_saved();
    }
}
