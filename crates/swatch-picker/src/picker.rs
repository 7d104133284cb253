// ABOUTME: The color picker component, independent of any UI toolkit.
// ABOUTME: Wires config, value sync, saved colors, tabs, and palettes to caller events.

use swatch_core::color::{self, Hsb, Rgb};
use swatch_core::config::{PickerConfig, Tab};
use swatch_core::palette::PaletteRow;

use crate::events::PickerEvents;
use crate::gesture;
use crate::saved::{MruList, SavedColors};
use crate::sync::{ColorSync, SyncOutcome};

/// What the palettes tab shows for the selected palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteView<'a> {
    Rows(Vec<PaletteRow<'a>>),
    Saved(&'a [String]),
    SavedEmpty,
}

pub struct ColorPicker<E: PickerEvents> {
    config: PickerConfig,
    sync: ColorSync,
    saved: SavedColors,
    active_tab: Tab,
    /// Index into the user palettes; one past the end is the saved list
    active_palette: usize,
    visible: bool,
    events: E,
}

impl<E: PickerEvents> ColorPicker<E> {
    /// Picker that keeps its own saved colors
    pub fn new(config: PickerConfig, events: E) -> Self {
        let saved = SavedColors::Owned(MruList::new(config.saved_limit()));
        Self::build(config, saved, events)
    }

    /// Picker whose saved colors belong to the caller
    pub fn with_saved_colors(config: PickerConfig, colors: Vec<String>, events: E) -> Self {
        Self::build(config, SavedColors::Delegated(colors), events)
    }

    fn build(config: PickerConfig, saved: SavedColors, events: E) -> Self {
        let sync = ColorSync::new(&config.value, config.show_alpha);
        let active_tab = config.tabs.first().copied().unwrap_or(Tab::Picker);
        tracing::debug!(
            "Color picker created: value={}, alpha={}, delegated_saved={}",
            sync.display_hex(),
            config.show_alpha,
            saved.is_delegated()
        );
        Self {
            config,
            sync,
            saved,
            active_tab,
            active_palette: 0,
            visible: false,
            events,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn sync(&self) -> &ColorSync {
        &self.sync
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    fn emit(&mut self, hex: Option<String>) {
        if let Some(hex) = hex {
            tracing::trace!("Color changed to {}", hex);
            self.events.on_change(&hex);
        }
    }

    // Pointer and slider input

    pub fn set_hue(&mut self, hue: u16) {
        if self.is_disabled() {
            return;
        }
        let hex = self.sync.set_hue(hue);
        self.emit(Some(hex));
    }

    pub fn set_saturation_brightness(&mut self, saturation: u8, brightness: u8) {
        if self.is_disabled() {
            return;
        }
        let hex = self.sync.set_saturation_brightness(saturation, brightness);
        self.emit(Some(hex));
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        if self.is_disabled() {
            return;
        }
        let hex = self.sync.set_alpha(alpha);
        self.emit(hex);
    }

    pub fn drag_hue(&mut self, x: f32, width: f32) {
        self.set_hue(gesture::hue_at(x, width));
    }

    pub fn drag_saturation_brightness(&mut self, x: f32, y: f32, size: f32) {
        let (saturation, brightness) = gesture::saturation_brightness_at(x, y, size);
        self.set_saturation_brightness(saturation, brightness);
    }

    pub fn drag_alpha(&mut self, x: f32, width: f32) {
        self.set_alpha(gesture::alpha_at(x, width));
    }

    // Hex field

    pub fn focus_hex(&mut self) {
        if !self.is_disabled() {
            self.sync.focus_input();
        }
    }

    pub fn edit_hex(&mut self, text: &str) {
        if !self.is_disabled() {
            self.sync.edit_input(text);
        }
    }

    pub fn submit_hex(&mut self) {
        if self.is_disabled() {
            return;
        }
        let hex = self.sync.submit_input();
        self.emit(hex);
    }

    pub fn blur_hex(&mut self) {
        if self.is_disabled() {
            return;
        }
        let hex = self.sync.blur_input();
        self.emit(hex);
    }

    // Controlled value and imperative handle

    /// Feed the caller's controlled value
    pub fn set_value(&mut self, hex: &str) -> SyncOutcome {
        let outcome = self.sync.sync_value(hex);
        tracing::trace!("Controlled value {:?}: {:?}", hex, outcome);
        outcome
    }

    /// Current color as reported to `on_change`
    pub fn get_color(&self) -> String {
        self.sync.display_hex()
    }

    /// Apply `hex`; invalid input is ignored
    pub fn set_color(&mut self, hex: &str) {
        let hex = self.sync.set_color(hex);
        self.emit(hex);
    }

    pub fn clear_saved(&mut self) {
        match &mut self.saved {
            SavedColors::Owned(list) => list.clear(),
            SavedColors::Delegated(_) => self.events.on_clear_saved(),
        }
    }

    /// Same as [`ColorPicker::clear_saved`], named for the recent tab
    pub fn clear_recent(&mut self) {
        self.clear_saved();
    }

    /// Show the modal. Returns false when inline.
    pub fn open(&mut self) -> bool {
        if self.config.is_inline() {
            return false;
        }
        self.visible = true;
        true
    }

    /// Tap on the trigger swatch; opens the modal unless disabled
    pub fn press_swatch(&mut self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.open()
    }

    pub fn close(&mut self) {
        if !self.config.is_inline() {
            self.visible = false;
        }
    }

    /// Modal visibility (always false inline)
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Whether the panel itself is on screen
    pub fn is_panel_visible(&self) -> bool {
        self.config.is_inline() || self.visible
    }

    // Saved colors

    /// Save the current color. Caller-owned lists get an `on_save_color`
    /// request instead.
    pub fn save_color(&mut self) {
        if self.is_disabled() {
            return;
        }
        let hex = self.get_color();
        match &mut self.saved {
            SavedColors::Owned(list) => list.add(&hex),
            SavedColors::Delegated(_) => self.events.on_save_color(&hex),
        }
    }

    /// Apply a swatch from a palette or the saved list. Does not save it.
    pub fn select_color(&mut self, hex: &str) {
        if self.is_disabled() {
            return;
        }
        let hex = self.sync.select(hex);
        self.emit(hex);
    }

    pub fn saved_colors(&self) -> &[String] {
        self.saved.colors()
    }

    /// Replace the caller-owned saved list. Ignored for internally owned lists.
    pub fn set_saved_colors(&mut self, colors: Vec<String>) {
        match &mut self.saved {
            SavedColors::Delegated(current) => *current = colors,
            SavedColors::Owned(_) => {
                tracing::warn!("Ignoring saved colors update: list is owned by the picker");
            }
        }
    }

    // Tabs

    pub fn tabs(&self) -> &[Tab] {
        &self.config.tabs
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch tabs; only enabled tabs can be selected
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.config.tabs.contains(&tab) {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn tab_label(&self, tab: Tab) -> &str {
        self.config.labels.tab(tab)
    }

    // Palettes

    /// User palettes, then the saved colors entry
    pub fn palette_names(&self) -> Vec<&str> {
        self.config
            .palettes
            .iter()
            .map(|p| p.name.as_str())
            .chain(std::iter::once(self.config.labels.saved_colors.as_str()))
            .collect()
    }

    pub fn active_palette(&self) -> usize {
        self.active_palette
    }

    pub fn select_palette(&mut self, index: usize) -> bool {
        if index > self.config.palettes.len() {
            return false;
        }
        self.active_palette = index;
        true
    }

    pub fn palette_view(&self) -> PaletteView<'_> {
        match self.config.palettes.get(self.active_palette) {
            Some(palette) => PaletteView::Rows(palette.rows()),
            None if self.saved.is_empty() => PaletteView::SavedEmpty,
            None => PaletteView::Saved(self.saved.colors()),
        }
    }

    // Derived display values

    pub fn hsb(&self) -> Hsb {
        self.sync.hsb()
    }

    pub fn alpha(&self) -> u8 {
        self.sync.alpha()
    }

    pub fn rgb(&self) -> Rgb {
        self.sync.rgb()
    }

    /// `#RRGGBB` without alpha
    pub fn current_hex(&self) -> String {
        self.sync.current_hex()
    }

    pub fn hex_input(&self) -> &str {
        self.sync.input()
    }

    /// Text color that reads on top of the current swatch
    pub fn contrast_color(&self) -> &'static str {
        color::contrast_color(&self.current_hex(), self.alpha())
    }

    /// Fill for the swatch: plain hex, or `rgba(...)` with alpha enabled
    pub fn swatch_fill(&self) -> String {
        if self.config.show_alpha {
            color::hex_to_rgba(&self.current_hex(), self.alpha())
        } else {
            self.current_hex()
        }
    }
}
