// ABOUTME: Keeps the canonical HSB(+alpha) color in step with its hex projections.
// ABOUTME: Reconciles controlled values and the hex text field without feedback loops.

use swatch_core::color::{self, Hsb, Rgb};
use swatch_core::config::DEFAULT_COLOR;

/// HSB of `DEFAULT_COLOR`
const DEFAULT_HSB: Hsb = Hsb {
    hue: 211,
    saturation: 100,
    brightness: 100,
};

/// Result of feeding a controlled value into [`ColorSync::sync_value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The value is the one most recently emitted (or already seen)
    Echo,
    /// Not an acceptable hex; nothing changed
    Invalid,
    /// Decodes to the current color
    Unchanged,
    /// At least one channel was overwritten
    Applied,
}

/// Comparison key: uppercase with a single leading `#`
fn hex_key(hex: &str) -> String {
    format!("#{}", hex.strip_prefix('#').unwrap_or(hex).to_ascii_uppercase())
}

/// Canonical color state plus the hex field buffer.
///
/// Mutating methods return the hex to report to the change listener (if
/// any). The returned hex is remembered so a caller echoing it back through
/// [`ColorSync::sync_value`] is recognized and ignored.
#[derive(Debug, Clone)]
pub struct ColorSync {
    hsb: Hsb,
    alpha: u8,
    alpha_enabled: bool,
    input: String,
    input_focused: bool,
    input_dirty: bool,
    last_notified: String,
    revision: u64,
}

impl ColorSync {
    /// Start from `value`; an undecodable value falls back to the default color
    pub fn new(value: &str, alpha_enabled: bool) -> Self {
        let hsb = color::hex_to_hsb(value).unwrap_or_else(|| {
            tracing::warn!("Invalid initial color {:?}, using {}", value, DEFAULT_COLOR);
            DEFAULT_HSB
        });
        let alpha = if alpha_enabled {
            color::parse_alpha_from_hex(value)
        } else {
            100
        };

        let mut sync = Self {
            hsb,
            alpha,
            alpha_enabled,
            input: String::new(),
            input_focused: false,
            input_dirty: false,
            last_notified: hex_key(value),
            revision: 0,
        };
        sync.input = sync.display_hex();
        sync
    }

    pub fn hsb(&self) -> Hsb {
        self.hsb
    }

    /// Alpha percentage (always 100 when alpha is disabled)
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn alpha_enabled(&self) -> bool {
        self.alpha_enabled
    }

    /// `#RRGGBB` of the canonical color
    pub fn current_hex(&self) -> String {
        self.hsb.to_hex()
    }

    /// The full hex as reported to listeners: `#RRGGBBAA` with alpha enabled
    pub fn display_hex(&self) -> String {
        let hex = self.current_hex();
        if self.alpha_enabled {
            color::append_alpha_to_hex(&hex, self.alpha)
        } else {
            hex
        }
    }

    pub fn rgb(&self) -> Rgb {
        color::hex_to_rgb(&self.current_hex()).unwrap_or(Rgb::new(0, 0, 0))
    }

    /// Current contents of the hex field
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    /// The hex most recently emitted or received as a controlled value
    pub fn last_notified(&self) -> &str {
        &self.last_notified
    }

    /// Incremented on every write to the canonical color
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether `hex` is acceptable as a committed value for this variant
    pub fn accepts(&self, hex: &str) -> bool {
        if self.alpha_enabled {
            color::is_valid_hex(hex)
        } else {
            color::is_valid_hex6(hex)
        }
    }

    pub fn set_hue(&mut self, hue: u16) -> String {
        let hsb = Hsb::new(hue, self.hsb.saturation, self.hsb.brightness);
        self.commit(hsb, None)
    }

    pub fn set_saturation_brightness(&mut self, saturation: u8, brightness: u8) -> String {
        let hsb = Hsb::new(self.hsb.hue, saturation, brightness);
        self.commit(hsb, None)
    }

    /// Returns None when alpha is disabled
    pub fn set_alpha(&mut self, alpha: u8) -> Option<String> {
        if !self.alpha_enabled {
            return None;
        }
        Some(self.commit(self.hsb, Some(alpha.min(100))))
    }

    /// Apply a swatch color. Alpha comes from the hex, so a 6 digit swatch is
    /// opaque.
    pub fn select(&mut self, hex: &str) -> Option<String> {
        if !color::is_valid_hex(hex) {
            tracing::debug!("Ignoring invalid swatch color {:?}", hex);
            return None;
        }
        let hsb = color::hex_to_hsb(hex)?;
        let alpha = self.alpha_enabled.then(|| color::parse_alpha_from_hex(hex));
        Some(self.commit(hsb, alpha))
    }

    /// Programmatic set. Invalid input is a no-op; a 6 digit hex keeps the
    /// current alpha.
    pub fn set_color(&mut self, hex: &str) -> Option<String> {
        if !self.accepts(hex) {
            tracing::debug!("Ignoring invalid color {:?}", hex);
            return None;
        }
        self.apply_hex(hex)
    }

    /// Reconcile a caller-controlled value. Never produces a notification.
    pub fn sync_value(&mut self, hex: &str) -> SyncOutcome {
        let key = hex_key(hex);
        if key == self.last_notified {
            tracing::trace!("Controlled value {} is an echo", key);
            return SyncOutcome::Echo;
        }
        self.last_notified = key;

        if !self.accepts(hex) {
            tracing::debug!("Ignoring invalid controlled value {:?}", hex);
            return SyncOutcome::Invalid;
        }
        let Some(hsb) = color::hex_to_hsb(hex) else {
            return SyncOutcome::Invalid;
        };
        let alpha = self.alpha_enabled.then(|| color::parse_alpha_from_hex(hex));

        let hsb_changed = hsb != self.hsb;
        let alpha_changed = alpha.is_some_and(|a| a != self.alpha);
        if !hsb_changed && !alpha_changed {
            return SyncOutcome::Unchanged;
        }

        if hsb_changed {
            self.hsb = hsb;
        }
        if let Some(a) = alpha.filter(|_| alpha_changed) {
            self.alpha = a;
        }
        self.revision += 1;
        self.reconcile_input();
        SyncOutcome::Applied
    }

    pub fn focus_input(&mut self) {
        self.input_focused = true;
    }

    /// Replace the field text; the canonical color is untouched until commit
    pub fn edit_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.input_dirty = true;
    }

    /// Commit the field text. Invalid text silently reverts the field.
    /// Untouched text commits nothing.
    pub fn submit_input(&mut self) -> Option<String> {
        if !self.input_dirty {
            return None;
        }
        self.input_dirty = false;

        let text = self.input.trim();
        let candidate = if text.starts_with('#') {
            text.to_string()
        } else {
            format!("#{}", text)
        };

        if !self.accepts(&candidate) {
            tracing::debug!("Reverting invalid hex input {:?}", self.input);
            self.input = self.display_hex();
            return None;
        }
        self.apply_hex(&candidate)
    }

    /// Leave the field, committing any edit and catching up with the
    /// canonical color
    pub fn blur_input(&mut self) -> Option<String> {
        self.input_focused = false;
        let hex = self.submit_input();
        self.reconcile_input();
        hex
    }

    fn apply_hex(&mut self, hex: &str) -> Option<String> {
        let hsb = color::hex_to_hsb(hex)?;
        let has_alpha = hex.strip_prefix('#').unwrap_or(hex).len() == 8;
        let alpha = (self.alpha_enabled && has_alpha).then(|| color::parse_alpha_from_hex(hex));
        Some(self.commit(hsb, alpha))
    }

    fn commit(&mut self, hsb: Hsb, alpha: Option<u8>) -> String {
        self.hsb = hsb;
        if let Some(a) = alpha {
            self.alpha = a;
        }
        self.revision += 1;

        let hex = self.display_hex();
        self.last_notified = hex.clone();
        self.reconcile_input();
        hex
    }

    /// The field follows the canonical color only while it is not being edited
    fn reconcile_input(&mut self) {
        if !self.input_focused {
            self.input = self.display_hex();
            self.input_dirty = false;
        }
    }
}
