// ABOUTME: Shared types and configuration for the swatch color picker.
// ABOUTME: Defines the color codec, palettes, and picker configuration.

pub mod color;
pub mod config;
pub mod palette;

pub use color::{Hsb, Rgb};
pub use config::{Labels, PickerConfig, Presentation, Tab, ThemeName};
pub use palette::{ColorPalette, ColorValue, PaletteRow, Swatch};
