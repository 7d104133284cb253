// ABOUTME: Named color palettes shown on the palettes tab.
// ABOUTME: Entries are single hex colors or ordered shade maps; loads from JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::is_valid_hex;

/// A palette entry: one color, or a family of named shades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Shades(IndexMap<String, String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub name: String,
    pub colors: IndexMap<String, ColorValue>,
}

/// A labelled swatch inside a palette row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch<'a> {
    pub name: &'a str,
    pub hex: &'a str,
}

/// One display row of a palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteRow<'a> {
    /// All single-color entries, gathered into one row
    Simple(Vec<Swatch<'a>>),
    /// A shaded color family
    Group { name: &'a str, shades: Vec<Swatch<'a>> },
}

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse palettes: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color {value:?} for {entry:?} in palette {palette:?}")]
    InvalidColor {
        palette: String,
        entry: String,
        value: String,
    },
}

impl ColorPalette {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: IndexMap::new(),
        }
    }

    /// Add a single color entry
    pub fn with_color(mut self, name: impl Into<String>, hex: impl Into<String>) -> Self {
        self.colors.insert(name.into(), ColorValue::Single(hex.into()));
        self
    }

    /// Add a shade family, shades in the given order
    pub fn with_shades<N, H>(mut self, name: impl Into<String>, shades: &[(N, H)]) -> Self
    where
        N: AsRef<str>,
        H: AsRef<str>,
    {
        let shades = shades
            .iter()
            .map(|(n, h)| (n.as_ref().to_string(), h.as_ref().to_string()))
            .collect();
        self.colors.insert(name.into(), ColorValue::Shades(shades));
        self
    }

    /// Group entries for display: single colors first (one row), then one
    /// row per shade family, each in declaration order
    pub fn rows(&self) -> Vec<PaletteRow<'_>> {
        let mut simple = Vec::new();
        let mut groups = Vec::new();

        for (name, value) in &self.colors {
            match value {
                ColorValue::Single(hex) => simple.push(Swatch { name, hex }),
                ColorValue::Shades(shades) => groups.push(PaletteRow::Group {
                    name,
                    shades: shades
                        .iter()
                        .map(|(shade, hex)| Swatch { name: shade, hex })
                        .collect(),
                }),
            }
        }

        let mut rows = Vec::with_capacity(groups.len() + 1);
        if !simple.is_empty() {
            rows.push(PaletteRow::Simple(simple));
        }
        rows.extend(groups);
        rows
    }

    /// Every (entry, hex) pair, shades flattened
    pub fn hexes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.colors.iter().flat_map(|(name, value)| {
            let items: Vec<(&str, &str)> = match value {
                ColorValue::Single(hex) => vec![(name.as_str(), hex.as_str())],
                ColorValue::Shades(shades) => shades
                    .iter()
                    .map(|(shade, hex)| (shade.as_str(), hex.as_str()))
                    .collect(),
            };
            items
        })
    }

    /// Check every color is a 6 or 8 digit hex
    pub fn validate(&self) -> Result<(), PaletteError> {
        match self.hexes().find(|(_, hex)| !is_valid_hex(hex)) {
            Some((entry, hex)) => Err(PaletteError::InvalidColor {
                palette: self.name.clone(),
                entry: entry.to_string(),
                value: hex.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Load a JSON array of palettes
    pub fn load_json(path: &Path) -> Result<Vec<ColorPalette>, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Vec<ColorPalette>, PaletteError> {
        let palettes: Vec<ColorPalette> = serde_json::from_str(content)?;
        for palette in &palettes {
            palette.validate()?;
        }
        Ok(palettes)
    }

    /// System-style basic colors
    pub fn basic() -> Self {
        Self::new("Basic")
            .with_color("Red", "#FF3B30")
            .with_color("Orange", "#FF9500")
            .with_color("Yellow", "#FFCC00")
            .with_color("Green", "#34C759")
            .with_color("Blue", "#007AFF")
            .with_color("Purple", "#AF52DE")
            .with_color("Black", "#000000")
            .with_color("White", "#FFFFFF")
    }

    /// A few Tailwind shade families
    pub fn tailwind() -> Self {
        Self::new("Tailwind")
            .with_shades(
                "slate",
                &[
                    ("50", "#F8FAFC"),
                    ("100", "#F1F5F9"),
                    ("200", "#E2E8F0"),
                    ("300", "#CBD5E1"),
                    ("400", "#94A3B8"),
                    ("500", "#64748B"),
                    ("600", "#475569"),
                    ("700", "#334155"),
                    ("800", "#1E293B"),
                    ("900", "#0F172A"),
                ],
            )
            .with_shades(
                "blue",
                &[
                    ("50", "#EFF6FF"),
                    ("100", "#DBEAFE"),
                    ("200", "#BFDBFE"),
                    ("300", "#93C5FD"),
                    ("400", "#60A5FA"),
                    ("500", "#3B82F6"),
                    ("600", "#2563EB"),
                    ("700", "#1D4ED8"),
                    ("800", "#1E40AF"),
                    ("900", "#1E3A8A"),
                ],
            )
    }

    pub fn presets() -> Vec<ColorPalette> {
        vec![Self::basic(), Self::tailwind()]
    }
}
