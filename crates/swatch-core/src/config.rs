// ABOUTME: Picker configuration handling.
// ABOUTME: Construction-time options for the color picker, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::is_valid_hex;
use crate::palette::{ColorPalette, PaletteError};

/// Color shown when nothing else is configured
pub const DEFAULT_COLOR: &str = "#007AFF";

/// Default number of recent colors kept by the simple picker
pub const DEFAULT_SAVED_CAPACITY: usize = 12;

/// Panel tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// Saturation/brightness pad with hue (and alpha) strips
    Picker,
    /// Hex field plus RGB and HSB readouts
    Values,
    /// Recently saved colors
    Recent,
    /// User palettes followed by saved colors
    Palettes,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Picker, Tab::Values, Tab::Recent, Tab::Palettes]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// How the panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// A swatch that opens the panel in a modal
    #[default]
    Modal,
    /// The panel is always shown in place
    Inline,
}

/// User-facing strings, overridable for localization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub picker: String,
    pub values: String,
    pub recent: String,
    pub palettes: String,
    pub save: String,
    pub saved_colors: String,
    pub clear_all: String,
    pub no_saved_colors: String,
    pub no_saved_colors_hint: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            picker: "Picker".to_string(),
            values: "Values".to_string(),
            recent: "Recent".to_string(),
            palettes: "Palettes".to_string(),
            save: "Save".to_string(),
            saved_colors: "Saved Colors".to_string(),
            clear_all: "Clear All".to_string(),
            no_saved_colors: "No saved colors yet".to_string(),
            no_saved_colors_hint: "Tap \"Save\" to add colors here".to_string(),
        }
    }
}

impl Labels {
    pub fn tab(&self, tab: Tab) -> &str {
        match tab {
            Tab::Picker => &self.picker,
            Tab::Values => &self.values,
            Tab::Recent => &self.recent,
            Tab::Palettes => &self.palettes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Initial color (6 or 8 digit hex)
    pub value: String,

    /// Tabs to show, in order
    pub tabs: Vec<Tab>,

    /// Panel width in modal mode (None fills the available width)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_width: Option<f32>,

    /// Height of the hue and alpha strips
    pub hue_strip_height: f32,

    pub theme: ThemeName,

    /// Ignore all user input
    pub disabled: bool,

    /// Trigger swatch size (modal mode)
    pub swatch_size: f32,

    /// Trigger swatch corner radius (modal mode)
    pub swatch_border_radius: f32,

    pub presentation: Presentation,

    pub labels: Labels,

    /// Enable the alpha strip and 8 digit hex output
    pub show_alpha: bool,

    /// Palettes for the palettes tab
    pub palettes: Vec<ColorPalette>,

    /// Maximum recent colors kept by the simple picker (0 = unbounded).
    /// Saved colors of the alpha/palettes picker are never capped.
    pub saved_capacity: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_COLOR.to_string(),
            tabs: vec![Tab::Picker, Tab::Values, Tab::Palettes],
            panel_width: None,
            hue_strip_height: 28.0,
            theme: ThemeName::default(),
            disabled: false,
            swatch_size: 48.0,
            swatch_border_radius: 12.0,
            presentation: Presentation::default(),
            labels: Labels::default(),
            show_alpha: false,
            palettes: Vec::new(),
            saved_capacity: DEFAULT_SAVED_CAPACITY,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    #[error("At least one tab must be enabled")]
    NoTabs,

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

impl PickerConfig {
    pub fn is_inline(&self) -> bool {
        self.presentation == Presentation::Inline
    }

    /// Plain RGB picker with a recent tab, as opposed to the alpha and
    /// palettes picker
    pub fn is_simple(&self) -> bool {
        !self.show_alpha
            && !(self.tabs.contains(&Tab::Palettes) && !self.tabs.contains(&Tab::Recent))
    }

    /// Saved list capacity, None when unbounded
    pub fn saved_limit(&self) -> Option<usize> {
        if !self.is_simple() {
            return None;
        }
        (self.saved_capacity > 0).then_some(self.saved_capacity)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_hex(&self.value) {
            return Err(ConfigError::InvalidColor {
                field: "value",
                value: self.value.clone(),
            });
        }
        if self.tabs.is_empty() {
            return Err(ConfigError::NoTabs);
        }
        for palette in &self.palettes {
            palette.validate()?;
        }
        Ok(())
    }

    /// Get the default config file path (~/.config/swatch/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("swatch").join("config.toml"))
    }

    /// Parse and validate TOML config text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
